//! Command-line interface layer.
//!
//! Parses arguments, runs the selected command and prints its result. The
//! detection itself lives in `rules` and does not depend on this module.

use std::process::ExitCode;

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs, OutputFormat};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();
    let format = args.format();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result, format, verbose)?;

    Ok(result.exit_status().into())
}
