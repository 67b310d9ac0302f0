use crate::cli::ExitStatus;
use crate::issues::{Issue, Severity};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub config_file: String,
}

/// Result of running a wrapcheck command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of files that failed to read or parse.
    pub parse_error_count: usize,
    /// Number of source files (TSX/JSX/JS) that were checked.
    pub source_files_checked: usize,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, issues: Vec<Issue>, source_files_checked: usize) -> Self {
        let parse_error_count = issues
            .iter()
            .filter(|i| matches!(i, Issue::ParseError(_)))
            .count();
        let error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();

        Self {
            summary,
            error_count,
            issues,
            parse_error_count,
            source_files_checked,
        }
    }

    /// Any issue, parse errors included, fails the run.
    pub fn exit_status(&self) -> ExitStatus {
        if !self.issues.is_empty() {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
