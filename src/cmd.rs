use std::path::Path;
use std::process::Command;

use crate::logging::Logger;
use crate::prelude::*;

/// Run `cmd` with `args` inside `dir`, returning its stdout.
///
/// A non-zero exit turns into [`Error::Command`] carrying the captured stderr
/// as-is, so git's own diagnostic reaches the user.
pub fn execute(dir: &Path, cmd: &str, args: &[&str], logger: Logger) -> Result<String> {
    logger.verbose(1, format_args!("$ {} {}", cmd, render_args(args)));

    let output = Command::new(cmd)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|source| Error::Spawn {
            program: cmd.to_string(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if output.status.success() {
        for line in stdout.lines().chain(stderr.lines()) {
            logger.verbose(2, format_args!("  {line}"));
        }
        Ok(stdout)
    } else {
        Err(Error::Command {
            program: cmd.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            status: output.status.to_string(),
            stderr,
        })
    }
}

/// Join arguments for display, quoting the ones a reader could not split back
/// apart (empty, whitespace, quotes).
pub fn render_args<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(|arg| {
            let arg = arg.as_ref();
            let ambiguous = |c: char| c.is_whitespace() || c == '"' || c == '\'';
            if arg.is_empty() || arg.contains(ambiguous) {
                format!("{arg:?}")
            } else {
                arg.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
