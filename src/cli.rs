use std::path::{Component, Path, PathBuf};

use clap::Parser;

use crate::config::{self, Config, Template};
use crate::prelude::*;
use crate::release::Options;

/// Update the embedded version string, commit it and tag the release.
#[derive(Parser, Debug)]
#[command(name = "tag-release", version, about, long_about = None)]
pub struct Cli {
    /// Version string to set and tag (e.g. 1.2.3)
    #[arg(id = "new_version", value_name = "VERSION")]
    pub version: String,

    /// Create an annotated tag instead of a lightweight one
    #[arg(long)]
    pub annotated: bool,

    /// Push HEAD and the tag to the remote after tagging
    #[arg(long)]
    pub push: bool,

    /// Allow a dirty working tree
    #[arg(long)]
    pub allow_dirty: bool,

    /// Tag name to use (defaults to the version string)
    #[arg(long, value_name = "NAME")]
    pub tag_name: Option<String>,

    /// Repository-relative file holding the version declaration
    #[arg(long, value_name = "PATH", env = "TAG_RELEASE_FILE")]
    pub file: Option<String>,

    /// Remote to push to
    #[arg(long, value_name = "NAME", env = "TAG_RELEASE_REMOTE")]
    pub remote: Option<String>,

    /// Directory inside the repository to release
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub repo: PathBuf,

    /// Config file (defaults to .tag-release.json at the repository root)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Echo git commands (twice to also echo their output)
    #[arg(short, long, action = clap::ArgAction::Count, env = "TAG_RELEASE_VERBOSE")]
    pub verbose: u8,

    /// Only report errors
    #[arg(
        short,
        long,
        conflicts_with = "verbose",
        env = "TAG_RELEASE_QUIET",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub quiet: bool,
}

impl Cli {
    /// Layer the command line over `file_config` and the built-in defaults.
    pub fn options(&self, file_config: Config) -> Result<Options> {
        let file = self
            .file
            .clone()
            .or(file_config.file)
            .unwrap_or_else(|| config::DEFAULT_FILE.to_string());
        let remote = self
            .remote
            .clone()
            .or(file_config.remote)
            .unwrap_or_else(|| config::DEFAULT_REMOTE.to_string());

        if self.version.trim().is_empty() {
            return Err(Error::Config("version must not be empty".into()));
        }
        if self.tag_name.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(Error::Config("--tag-name must not be empty".into()));
        }
        if file.trim().is_empty() {
            return Err(Error::Config("target file must not be empty".into()));
        }
        if !stays_inside_repository(Path::new(&file)) {
            return Err(Error::Config(format!(
                "target file {file} must be a path inside the repository"
            )));
        }
        if remote.trim().is_empty() {
            return Err(Error::Config("remote must not be empty".into()));
        }

        Ok(Options {
            version: self.version.clone(),
            tag_name: self.tag_name.clone(),
            annotated: self.annotated,
            push: self.push,
            allow_dirty: self.allow_dirty,
            file,
            remote,
            commit_message: Template::new(
                file_config
                    .commit_message
                    .unwrap_or_else(|| config::DEFAULT_COMMIT_MESSAGE.to_string()),
            ),
            tag_message: Template::new(
                file_config
                    .tag_message
                    .unwrap_or_else(|| config::DEFAULT_TAG_MESSAGE.to_string()),
            ),
        })
    }
}

/// Relative, and never climbing out through `..`.
fn stays_inside_repository(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
