//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Find conditionally rendered text that breaks auto-translation
//! - `init`: Create a `.wrapcheckrc.json` with default settings

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }

    /// Output format requested for the command (text for commands without one).
    pub fn format(&self) -> OutputFormat {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.format,
            Some(Command::Init) | None => OutputFormat::Text,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (defaults to the current directory)
    #[arg(long, env = "WRAPCHECK_SOURCE_ROOT")]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, cargo-style diagnostics
    #[default]
    Text,
    /// A JSON array of issues on stdout
    Json,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to report (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find JSX text nodes that crash React when the page is auto-translated
    Check(CheckCommand),
    /// Initialize a new .wrapcheckrc.json configuration file
    Init,
}
