use std::path::Path;

use crate::cmd::execute;
use crate::logging::Logger;
use crate::prelude::*;

/// Tag HEAD. A message makes the tag annotated, otherwise it is lightweight.
pub fn tag(dir: &Path, name: &str, message: Option<&str>, logger: Logger) -> Result<()> {
    match message {
        Some(message) => execute(dir, "git", &["tag", "-a", name, "-m", message], logger)?,
        None => execute(dir, "git", &["tag", name], logger)?,
    };

    Ok(())
}
