//! Thin wrappers over the system `git` binary.
//!
//! Everything the release pipeline needs from version control goes through
//! [`Vcs`], so the pipeline can be exercised without a real repository.

use std::path::{Path, PathBuf};

use crate::cmd::execute;
use crate::logging::Logger;
use crate::prelude::*;

pub mod add;
pub mod commit;
pub mod push;
pub mod status;
pub mod tag;

pub use status::StatusEntry;

/// The version-control operations a release run performs.
pub trait Vcs {
    fn status(&self) -> Result<Vec<StatusEntry>>;

    /// Stage a single repository-relative path.
    fn add(&self, path: &str) -> Result<()>;

    /// Commit `path` only, with `message`.
    fn commit(&self, message: &str, path: &str) -> Result<()>;

    /// Tag HEAD; `Some(message)` makes it annotated.
    fn tag(&self, name: &str, message: Option<&str>) -> Result<()>;

    fn push(&self, remote: &str, refspec: &str) -> Result<()>;
}

/// [`Vcs`] backed by the `git` executable on `PATH`.
pub struct SystemGit {
    root: PathBuf,
    logger: Logger,
}

impl SystemGit {
    /// Locate the top level of the repository containing `dir`.
    pub fn open(dir: &Path, logger: Logger) -> Result<Self> {
        let toplevel = execute(dir, "git", &["rev-parse", "--show-toplevel"], logger)?;

        Ok(Self {
            root: PathBuf::from(toplevel.trim()),
            logger,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Vcs for SystemGit {
    fn status(&self) -> Result<Vec<StatusEntry>> {
        status::status(&self.root, self.logger)
    }

    fn add(&self, path: &str) -> Result<()> {
        add::add(&self.root, path, self.logger)
    }

    fn commit(&self, message: &str, path: &str) -> Result<()> {
        commit::commit(&self.root, message, &[path], self.logger)?;
        Ok(())
    }

    fn tag(&self, name: &str, message: Option<&str>) -> Result<()> {
        tag::tag(&self.root, name, message, self.logger)
    }

    fn push(&self, remote: &str, refspec: &str) -> Result<()> {
        push::push(&self.root, remote, refspec, self.logger)?;
        Ok(())
    }
}
