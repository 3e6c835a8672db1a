mod common;

use std::fs;

use common::{git, repo_with, tag_release, util_py};
use predicates::prelude::*;

#[test]
fn bumps_commits_and_tags_lightweight() {
    let temp = repo_with("NAME = 'plugin'\nversion = \"0.9.0\"\n");
    let dir = temp.path();

    tag_release(dir)
        .arg("1.0.0")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "updated plugin/util.py version 0.9.0 -> 1.0.0",
        ))
        .stdout(predicate::str::contains("created tag 1.0.0"));

    assert_eq!(util_py(dir), "NAME = 'plugin'\nversion = \"1.0.0\"\n");
    assert_eq!(git(dir, &["log", "-1", "--format=%s"]), "Bump version to 1.0.0");
    assert_eq!(git(dir, &["rev-list", "--count", "HEAD"]), "2");
    assert_eq!(
        git(dir, &["rev-parse", "1.0.0^{commit}"]),
        git(dir, &["rev-parse", "HEAD"])
    );
    // Lightweight tags point straight at the commit.
    assert_eq!(git(dir, &["cat-file", "-t", "1.0.0"]), "commit");
    assert_eq!(git(dir, &["status", "--porcelain"]), "");
}

#[test]
fn unchanged_version_tags_current_head_with_override() {
    let temp = repo_with("META = {\"version\": '2.0.0'}\n");
    let dir = temp.path();
    let head = git(dir, &["rev-parse", "HEAD"]);

    tag_release(dir)
        .args(["2.0.0", "--tag-name", "v2.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plugin/util.py version already 2.0.0"))
        .stdout(predicate::str::contains("no plugin/util.py change to commit"));

    assert_eq!(util_py(dir), "META = {\"version\": '2.0.0'}\n");
    assert_eq!(git(dir, &["rev-parse", "HEAD"]), head);
    assert_eq!(git(dir, &["rev-parse", "v2.0.0^{commit}"]), head);
    assert_eq!(git(dir, &["tag", "--list"]), "v2.0.0");
}

#[test]
fn annotated_tag_carries_release_message() {
    let temp = repo_with("version = '1.0.0'\n");
    let dir = temp.path();

    tag_release(dir)
        .args(["1.1.0", "--annotated"])
        .assert()
        .success();

    assert_eq!(git(dir, &["cat-file", "-t", "1.1.0"]), "tag");
    assert_eq!(
        git(dir, &["tag", "-l", "--format=%(contents:subject)", "1.1.0"]),
        "Release 1.1.0"
    );
}

#[test]
fn dirty_tree_is_rejected() {
    let temp = repo_with("version = '1.0.0'\n");
    let dir = temp.path();
    fs::write(dir.join("scratch.txt"), "wip").unwrap();

    tag_release(dir)
        .arg("2.0.0")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("working tree is not clean"));

    assert_eq!(util_py(dir), "version = '1.0.0'\n");
    assert_eq!(git(dir, &["tag", "--list"]), "");
    assert_eq!(git(dir, &["rev-list", "--count", "HEAD"]), "1");
}

#[test]
fn allow_dirty_commits_only_the_target_file() {
    let temp = repo_with("version = '1.0.0'\n");
    let dir = temp.path();
    fs::write(dir.join("notes.txt"), "staged but unrelated").unwrap();
    git(dir, &["add", "notes.txt"]);

    tag_release(dir)
        .args(["1.0.1", "--allow-dirty"])
        .assert()
        .success();

    assert_eq!(
        git(dir, &["show", "--name-only", "--format=", "HEAD"]),
        "plugin/util.py"
    );
    assert_eq!(git(dir, &["status", "--porcelain"]), "A  notes.txt");
}

#[test]
fn missing_declaration_exits_with_two() {
    let original = "__all__ = ['run']\n";
    let temp = repo_with(original);
    let dir = temp.path();

    tag_release(dir)
        .arg("1.0.0")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "failed to locate a 'version' entry in",
        ))
        .stderr(predicate::str::contains("please update manually"));

    assert_eq!(util_py(dir), original);
    assert_eq!(git(dir, &["tag", "--list"]), "");
}

#[test]
fn existing_tag_fails_with_git_diagnostic() {
    let temp = repo_with("version = '1.0.0'\n");
    let dir = temp.path();
    git(dir, &["tag", "1.0.0"]);

    tag_release(dir)
        .arg("1.0.0")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("git command failed"))
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_file_moves_target_and_messages() {
    let temp = repo_with("version = '1.0.0'\n");
    let dir = temp.path();
    fs::write(dir.join("package.json"), "{\n  \"version\": \"1.0.0\"\n}\n").unwrap();
    fs::write(
        dir.join(".tag-release.json"),
        r#"{ "file": "package.json", "commit_message": "release: {tag}" }"#,
    )
    .unwrap();
    git(dir, &["add", "."]);
    git(dir, &["commit", "--quiet", "-m", "Add package.json"]);

    tag_release(dir)
        .args(["1.2.0", "--tag-name", "v1.2.0"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.join("package.json")).unwrap(),
        "{\n  \"version\": \"1.2.0\"\n}\n"
    );
    assert_eq!(util_py(dir), "version = '1.0.0'\n");
    assert_eq!(git(dir, &["log", "-1", "--format=%s"]), "release: v1.2.0");
}

#[test]
fn outside_a_repository_fails() {
    let temp = tempfile::TempDir::new().unwrap();

    tag_release(temp.path())
        .arg("1.0.0")
        .env("GIT_CEILING_DIRECTORIES", temp.path().parent().unwrap())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("git command failed"));
}

#[test]
fn usage_errors_exit_with_one() {
    let temp = tempfile::TempDir::new().unwrap();

    tag_release(temp.path()).assert().code(1);
    tag_release(temp.path()).arg("--help").assert().success();
}

#[test]
fn version_flag_prints_tool_version() {
    let temp = tempfile::TempDir::new().unwrap();

    tag_release(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tag-release "));
}

#[test]
fn quiet_from_environment_accepts_numeric_flag() {
    let temp = repo_with("version = '1.0.0'\n");
    let dir = temp.path();

    tag_release(dir)
        .arg("1.1.0")
        .env("TAG_RELEASE_QUIET", "1")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(util_py(dir), "version = '1.1.0'\n");
}

#[test]
fn target_outside_repository_is_refused_before_writing() {
    let temp = repo_with("version = '1.0.0'\n");
    let dir = temp.path();
    let outside = tempfile::Builder::new()
        .suffix(".py")
        .tempfile_in(dir.parent().unwrap())
        .unwrap();
    fs::write(outside.path(), "version = '1.0.0'\n").unwrap();
    let relative = format!(
        "../{}",
        outside.path().file_name().unwrap().to_str().unwrap()
    );

    tag_release(dir)
        .args(["2.0.0", "--file", &relative])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must be a path inside the repository"));

    assert_eq!(
        fs::read_to_string(outside.path()).unwrap(),
        "version = '1.0.0'\n"
    );
    assert_eq!(git(dir, &["tag", "--list"]), "");
}
