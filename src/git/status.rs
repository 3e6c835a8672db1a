use std::path::Path;

use crate::cmd::execute;
use crate::logging::Logger;
use crate::prelude::*;

/// One line of `git status --porcelain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// Two-character XY code, e.g. ` M`, `A `, `??`.
    pub code: String,
    pub path: String,
}

impl StatusEntry {
    pub fn is_untracked(&self) -> bool {
        self.code == "??"
    }
}

pub fn status(dir: &Path, logger: Logger) -> Result<Vec<StatusEntry>> {
    let output = execute(dir, "git", &["status", "--porcelain"], logger)?;
    Ok(parse(&output))
}

fn parse(porcelain: &str) -> Vec<StatusEntry> {
    porcelain
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            // Porcelain v1: "XY PATH" (renames are "XY ORIG -> PATH").
            let code = line.get(..2).unwrap_or(line).to_string();
            let path = line.get(3..).unwrap_or_default();
            let path = path.rsplit(" -> ").next().unwrap_or(path).to_string();

            StatusEntry { code, path }
        })
        .collect()
}
