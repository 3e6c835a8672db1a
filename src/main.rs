use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use config::Config;
use git::SystemGit;
use logging::Logger;
use prelude::Error;

pub mod cli;
pub mod cmd;
pub mod config;
pub mod git;
pub mod logging;
pub mod prelude;
pub mod release;
pub mod updater;


fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // Exit status 2 is reserved for a missing version declaration.
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let logger = Logger::new(cli.verbose, cli.quiet);

    match run(&cli, logger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logger.error(format_args!("{err:#}"));
            ExitCode::from(err.downcast_ref::<Error>().map_or(1, Error::exit_code))
        }
    }
}

fn run(cli: &Cli, logger: Logger) -> anyhow::Result<()> {
    let git = SystemGit::open(&cli.repo, logger)?;
    let config = Config::load(git.root(), cli.config.as_deref())?;
    let options = cli.options(config)?;

    let report = release::run(&git, git.root(), &options, logger)?;
    logger.verbose(
        1,
        format_args!(
            "done: committed={} tag={} pushed={}",
            report.committed, report.tag, report.pushed
        ),
    );

    Ok(())
}
