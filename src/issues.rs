//! What a run reports.
//!
//! [`Issue`] wraps every finding type. Each one carries enough to print
//! itself (path, position, source line, message) so the reporter never
//! goes back to the AST.

use std::fmt;

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::core::SourceContext;
use crate::rules::conditional_text::FindingKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier printed after the message. The order of the variants is the
/// tie-break order when sorting issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    DangerousConditional,
    DangerousLiteral,
    ParseError,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::DangerousConditional => FindingKind::DangerousConditional.as_str(),
            Rule::DangerousLiteral => FindingKind::DangerousLiteral.as_str(),
            Rule::ParseError => "parse-error",
        }
    }
}

impl From<FindingKind> for Rule {
    fn from(kind: FindingKind) -> Self {
        match kind {
            FindingKind::DangerousConditional => Rule::DangerousConditional,
            FindingKind::DangerousLiteral => Rule::DangerousLiteral,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a finding is located in the output.
pub enum ReportLocation<'a> {
    /// A position inside a source line, printed with a caret.
    Source(&'a SourceContext),
    /// The file as a whole.
    File { path: &'a str },
}

/// Rendering hooks shared by every finding type, dispatched on [`Issue`].
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    fn message(&self) -> String;

    fn report_rule(&self) -> Rule;

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn hint(&self) -> Option<&str> {
        None
    }
}

/// A text node that React loses track of once a translation extension
/// rewrites it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalTextIssue {
    pub context: SourceContext,
    pub kind: FindingKind,
}

impl Report for ConditionalTextIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.kind.message().to_owned()
    }

    fn report_rule(&self) -> Rule {
        self.kind.into()
    }

    fn hint(&self) -> Option<&str> {
        let hint = match self.kind {
            FindingKind::DangerousConditional => {
                "render the text inside its own element, e.g. {cond && <span>text</span>}"
            }
            FindingKind::DangerousLiteral => {
                "wrap the text in its own element, e.g. <span>text</span>"
            }
        };
        Some(hint)
    }
}

/// A file that could not be read or did not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_rule(&self) -> Rule {
        Rule::ParseError
    }
}

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    ConditionalText(ConditionalTextIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}
