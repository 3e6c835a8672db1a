//! The release procedure:
//! clean-check, rewrite, optional commit, tag, optional push.
//!
//! Stages run strictly in order and the first failure ends the run. Nothing
//! already done is undone, so a failed push can leave a commit and a tag
//! behind for the user to sort out.

use std::path::Path;

use crate::config::Template;
use crate::git::Vcs;
use crate::logging::Logger;
use crate::prelude::*;
use crate::updater::version::{self, Outcome};

#[derive(Debug, Clone)]
pub struct Options {
    pub version: String,
    pub tag_name: Option<String>,
    pub annotated: bool,
    pub push: bool,
    pub allow_dirty: bool,
    /// Target file, relative to the repository root.
    pub file: String,
    pub remote: String,
    pub commit_message: Template,
    pub tag_message: Template,
}

impl Options {
    pub fn tag_name(&self) -> &str {
        self.tag_name.as_deref().unwrap_or(&self.version)
    }
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub committed: bool,
    pub tag: String,
    pub pushed: bool,
}

pub fn run(vcs: &impl Vcs, root: &Path, options: &Options, logger: Logger) -> Result<Report> {
    if options.allow_dirty {
        logger.verbose(1, "skipping working tree check (--allow-dirty)");
    } else {
        ensure_clean(vcs, logger)?;
    }

    let changed = rewrite(root, options, logger)?;
    let tag = options.tag_name();

    if changed {
        let message = options.commit_message.render(&options.version, tag)?;
        vcs.add(&options.file)?;
        vcs.commit(&message, &options.file)?;
        logger.info(format_args!("committed {} change", options.file));
    } else {
        logger.info(format_args!("no {} change to commit", options.file));
    }

    if options.annotated {
        let message = options.tag_message.render(&options.version, tag)?;
        vcs.tag(tag, Some(&message))?;
        logger.info(format_args!("created annotated tag {tag}"));
    } else {
        vcs.tag(tag, None)?;
        logger.info(format_args!("created tag {tag}"));
    }

    if options.push {
        vcs.push(&options.remote, "HEAD")?;
        vcs.push(&options.remote, &format!("refs/tags/{tag}"))?;
        logger.info(format_args!("pushed HEAD and tag {tag} to {}", options.remote));
    }

    Ok(Report {
        committed: changed,
        tag: tag.to_string(),
        pushed: options.push,
    })
}

fn ensure_clean(vcs: &impl Vcs, logger: Logger) -> Result<()> {
    let entries = vcs.status()?;
    if entries.is_empty() {
        return Ok(());
    }

    let mut untracked = 0;
    for entry in &entries {
        if entry.is_untracked() {
            untracked += 1;
            logger.verbose(1, format_args!("  untracked: {}", entry.path));
        } else {
            logger.verbose(1, format_args!("  {} {}", entry.code, entry.path));
        }
    }

    Err(Error::DirtyWorkingTree {
        entries: entries.len(),
        untracked,
    })
}

/// Returns whether the target file was rewritten.
fn rewrite(root: &Path, options: &Options, logger: Logger) -> Result<bool> {
    let path = root.join(&options.file);

    match version::set_version(&path, &options.version)? {
        Outcome::Unchanged => {
            logger.info(format_args!(
                "{} version already {}",
                options.file, options.version
            ));
            Ok(false)
        }
        Outcome::Updated { previous } => {
            if version::is_downgrade(&previous, &options.version) {
                logger.warn(format_args!(
                    "{} is not newer than the current version {previous}",
                    options.version
                ));
            }
            logger.info(format_args!(
                "updated {} version {previous} -> {}",
                options.file, options.version
            ));
            Ok(true)
        }
    }
}
