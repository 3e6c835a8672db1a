use std::path::Path;

use crate::cmd::execute;
use crate::logging::Logger;
use crate::prelude::*;

pub fn push(dir: &Path, remote: &str, refspec: &str, logger: Logger) -> Result<String> {
    execute(dir, "git", &["push", remote, refspec], logger)
}
