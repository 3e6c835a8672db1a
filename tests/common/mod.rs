#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::Command as BinCommand;
use tempfile::TempDir;

/// Run git in `dir`, panicking with its stderr on failure.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// A repository on branch `main` with `plugin/util.py` committed.
pub fn repo_with(util_py: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    git(dir, &["init", "--quiet"]);
    git(dir, &["checkout", "--quiet", "-b", "main"]);
    git(dir, &["config", "user.name", "Test"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
    git(dir, &["config", "tag.gpgsign", "false"]);

    fs::create_dir(dir.join("plugin")).unwrap();
    fs::write(dir.join("plugin/util.py"), util_py).unwrap();
    git(dir, &["add", "."]);
    git(dir, &["commit", "--quiet", "-m", "Initial commit"]);

    temp
}

pub fn util_py(dir: &Path) -> String {
    fs::read_to_string(dir.join("plugin/util.py")).unwrap()
}

pub fn tag_release(dir: &Path) -> BinCommand {
    let mut cmd = BinCommand::cargo_bin("tag-release").unwrap();
    cmd.current_dir(dir)
        .env_remove("TAG_RELEASE_FILE")
        .env_remove("TAG_RELEASE_REMOTE")
        .env_remove("TAG_RELEASE_VERBOSE")
        .env_remove("TAG_RELEASE_QUIET");
    cmd
}
