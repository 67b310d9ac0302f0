use std::path::Path;

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, init::init},
};

/// Dispatch to the handler for the parsed command.
///
/// # Returns
/// - `Ok(CommandResult)` with the issues and counts to report
/// - `Err` if the command itself fails (invalid config, existing config on `init`)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(Path::new(".")),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
