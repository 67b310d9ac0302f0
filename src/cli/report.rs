//! Rendering of command results.
//!
//! Issues are shown cargo-style for humans or as a JSON array for tools.
//! Kept apart from the detection code so wrapcheck can be used as a library.

use std::{
    cmp::Ordering,
    io::{self, Write},
};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, InitSummary},
};
use crate::issues::{Issue, Report, ReportLocation, Severity};

pub const SUCCESS_MARK: &str = "\u{2713}";
pub const FAILURE_MARK: &str = "\u{2718}";

/// Where an issue points, flattened for printing and sorting.
struct Position<'a> {
    path: &'a str,
    /// `(line, col, source line)`; `None` for file-level issues.
    at: Option<(usize, usize, &'a str)>,
}

impl<'a> Position<'a> {
    fn of(location: ReportLocation<'a>) -> Self {
        match location {
            ReportLocation::Source(ctx) => Self {
                path: ctx.file_path(),
                at: Some((ctx.line(), ctx.col(), ctx.source_line.as_str())),
            },
            ReportLocation::File { path } => Self { path, at: None },
        }
    }

    fn line(&self) -> Option<usize> {
        self.at.map(|(line, _, _)| line)
    }

    fn col(&self) -> Option<usize> {
        self.at.map(|(_, col, _)| col)
    }
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 { one } else { many }
}

/// Print issues cargo-style, followed by a problem count.
///
/// Issues are sorted by path, line and column. File-level issues sort
/// before positioned ones in the same file.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }
    let _ = write_report(&sorted_issues(issues), writer);
}

fn write_report<W: Write>(issues: &[Issue], w: &mut W) -> io::Result<()> {
    // Gutter wide enough for the largest line number.
    let gutter = issues
        .iter()
        .filter_map(|i| Position::of(i.location()).line())
        .max()
        .map_or(1, |line| line.to_string().len());

    for issue in issues {
        write_issue(issue, gutter, w)?;
    }

    writeln!(
        w,
        "{} {} {}",
        FAILURE_MARK.red(),
        issues.len(),
        plural(issues.len(), "problem", "problems").red()
    )
}

fn write_issue<W: Write>(issue: &Issue, gutter: usize, w: &mut W) -> io::Result<()> {
    let (label, caret) = match issue.report_severity() {
        Severity::Error => ("error".bold().red(), "^".red()),
    };
    let bar = "|".blue();
    let blank = " ".repeat(gutter);

    writeln!(
        w,
        "{}: {}  {}",
        label,
        issue.message(),
        issue.report_rule().as_str().dimmed().cyan()
    )?;

    let position = Position::of(issue.location());
    match position.at {
        Some((line, col, source_line)) => {
            writeln!(w, "  {} {}:{}:{}", "-->".blue(), position.path, line, col)?;
            writeln!(w, "{} {}", blank, bar)?;
            writeln!(w, "{} {} {}", format!("{:>gutter$}", line).blue(), bar, source_line)?;

            // col is 1-based and counts characters; the caret needs columns.
            let before: String = source_line.chars().take(col.saturating_sub(1)).collect();
            let indent = " ".repeat(before.width());
            writeln!(w, "{} {} {}{}", blank, bar, indent, caret)?;
        }
        None => writeln!(w, "  {} {}", "-->".blue(), position.path)?,
    }

    if let Some(hint) = issue.hint() {
        writeln!(w, "{} {} {} {}", blank, "=".blue(), "hint:".bold().cyan(), hint)?;
    }

    writeln!(w)
}

pub fn print_success_to<W: Write>(source_files: usize, writer: &mut W) {
    let message = format!(
        "Checked {} source {} - no issues found",
        source_files,
        plural(source_files, "file", "files")
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

/// Without `-v` the per-file parse errors are not printed, so say how many
/// there were.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count == 0 || verbose {
        return;
    }
    let _ = writeln!(
        writer,
        "{} {} file(s) could not be parsed (use {} for details)",
        "warning:".bold().yellow(),
        count,
        "-v".cyan()
    );
}

/// One issue as it appears in `--format json` output.
#[derive(Debug, Serialize)]
struct JsonIssue<'a> {
    rule: &'static str,
    severity: Severity,
    message: String,
    file: &'a str,
    line: Option<usize>,
    column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'a str>,
}

impl<'a> From<&'a Issue> for JsonIssue<'a> {
    fn from(issue: &'a Issue) -> Self {
        let position = Position::of(issue.location());
        Self {
            rule: issue.report_rule().as_str(),
            severity: issue.report_severity(),
            message: issue.message(),
            file: position.path,
            line: position.line(),
            column: position.col(),
            hint: issue.hint(),
        }
    }
}

/// Write issues as a pretty-printed JSON array, sorted like the text report.
pub fn report_json_to<W: Write>(issues: &[Issue], writer: &mut W) -> Result<()> {
    let sorted = sorted_issues(issues);
    let entries: Vec<JsonIssue<'_>> = sorted.iter().map(JsonIssue::from).collect();

    serde_json::to_writer_pretty(&mut *writer, &entries).context("Failed to serialize issues")?;
    writeln!(writer)?;
    Ok(())
}

fn sorted_issues(issues: &[Issue]) -> Vec<Issue> {
    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);
    sorted
}

fn compare_issues(a: &Issue, b: &Issue) -> Ordering {
    let pa = Position::of(a.location());
    let pb = Position::of(b.location());

    pa.path
        .cmp(pb.path)
        .then_with(|| pa.line().cmp(&pb.line()))
        .then_with(|| pa.col().cmp(&pb.col()))
        .then_with(|| a.rule().cmp(&b.rule()))
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let message = format!("Created {}", summary.config_file);
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

/// Print the outcome of a command to stdout, with warnings on stderr.
pub fn print(result: &CommandResult, format: OutputFormat, verbose: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match &result.summary {
        CommandSummary::Check => match format {
            OutputFormat::Text => {
                report_to(&result.issues, &mut stdout);
                if result.issues.is_empty() {
                    print_success_to(result.source_files_checked, &mut stdout);
                }
            }
            OutputFormat::Json => report_json_to(&result.issues, &mut stdout)?,
        },
        CommandSummary::Init(summary) => print_init(summary, &mut stdout),
    }

    print_parse_warning_to(result.parse_error_count, verbose, &mut io::stderr().lock());
    Ok(())
}
