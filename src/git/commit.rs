use std::path::Path;

use crate::cmd::execute;
use crate::logging::Logger;
use crate::prelude::*;

/// Commit only `paths`, leaving anything else in the index alone.
pub fn commit(dir: &Path, message: &str, paths: &[&str], logger: Logger) -> Result<String> {
    let mut args = vec!["commit", "-m", message, "--"];
    args.extend_from_slice(paths);

    execute(dir, "git", &args, logger)
}
