use anyhow::Result;

use crate::cli::exit_status::ExitStatus;

pub mod args;
mod commands;
pub mod exit_status;
pub mod file_scanner;
mod report;
mod run;

pub use args::{Arguments, Command};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_inputs_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(result.status)
}
