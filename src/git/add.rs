use std::path::Path;

use crate::cmd::execute;
use crate::logging::Logger;
use crate::prelude::*;

pub fn add(dir: &Path, path: &str, logger: Logger) -> Result<()> {
    execute(dir, "git", &["add", "--", path], logger)?;
    Ok(())
}
