//! Disable directives for wrapcheck comments.
//!
//! Supports rule-specific disable comments:
//! - `wrapcheck-disable-next-line` - disable all rules for next line
//! - `wrapcheck-disable-next-line dangerous-literal` - disable only that rule
//! - `wrapcheck-disable` / `wrapcheck-enable` - range-based disabling
//!
//! Both `// ...` and `{/* ... */}` comments are recognised.

use std::collections::{HashMap, HashSet};

use swc_common::SourceMap;

use crate::core::parsers::jsx::ExtractedComments;
use crate::rules::conditional_text::FindingKind;

const DISABLE_NEXT_LINE: &str = "wrapcheck-disable-next-line";
const DISABLE: &str = "wrapcheck-disable";
const ENABLE: &str = "wrapcheck-enable";

/// Parsed wrapcheck directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Disable { rules: HashSet<FindingKind> },
    Enable { rules: HashSet<FindingKind> },
    DisableNextLine { rules: HashSet<FindingKind> },
}

impl Directive {
    /// Parse directive from comment text.
    /// Returns None if not a wrapcheck directive.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        // Order matters: check longer prefix first
        if let Some(rest) = text.strip_prefix(DISABLE_NEXT_LINE) {
            return Some(Self::DisableNextLine {
                rules: Self::parse_rules(rest)?,
            });
        }
        if let Some(rest) = text.strip_prefix(DISABLE) {
            return Some(Self::Disable {
                rules: Self::parse_rules(rest)?,
            });
        }
        if let Some(rest) = text.strip_prefix(ENABLE) {
            return Some(Self::Enable {
                rules: Self::parse_rules(rest)?,
            });
        }

        None
    }

    /// Returns None when the prefix is glued to another word
    /// (`wrapcheck-disabled`), which is not a directive.
    fn parse_rules(rest: &str) -> Option<HashSet<FindingKind>> {
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let rest = rest.trim();
        if rest.is_empty() {
            // No rules specified = all rules
            return Some(all_rules());
        }

        let parsed: HashSet<_> = rest
            .split_whitespace()
            .filter_map(FindingKind::parse)
            .collect();

        // If no valid rules parsed, treat as all rules
        if parsed.is_empty() {
            Some(all_rules())
        } else {
            Some(parsed)
        }
    }
}

fn all_rules() -> HashSet<FindingKind> {
    FindingKind::all().into_iter().collect()
}

/// Range representing disabled lines [start, end] inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisabledRange {
    pub start: usize,
    pub end: usize, // usize::MAX for open-ended
}

/// Tracks disabled lines per rule for a single file.
#[derive(Debug, Default)]
pub struct Suppressions {
    /// Single-line disables: rule -> set of line numbers
    pub disabled_lines: HashMap<FindingKind, HashSet<usize>>,
    /// Range-based disables: rule -> list of (start, end) ranges
    pub disabled_ranges: HashMap<FindingKind, Vec<DisabledRange>>,
}

impl Suppressions {
    /// Check if a line is suppressed for a specific rule.
    pub fn is_suppressed(&self, line: usize, rule: FindingKind) -> bool {
        if let Some(lines) = self.disabled_lines.get(&rule)
            && lines.contains(&line)
        {
            return true;
        }
        if let Some(ranges) = self.disabled_ranges.get(&rule)
            && ranges.iter().any(|r| line >= r.start && line <= r.end)
        {
            return true;
        }
        false
    }

    /// Build suppressions from the comments extracted while parsing.
    pub fn from_comments(comments: &ExtractedComments, source_map: &SourceMap) -> Self {
        let (leading, trailing) = comments.borrow_all();

        let mut directives: Vec<_> = leading
            .values()
            .chain(trailing.values())
            .flatten()
            .filter_map(|cmt| {
                let directive = Directive::parse(&cmt.text)?;
                let line = source_map.lookup_char_pos(cmt.span.lo).line;
                Some((line, cmt.span.lo, directive))
            })
            .collect();
        // Source order, so `disable`/`enable` on one line apply left to right.
        // A comment can be both trailing and leading; keep one copy.
        directives.sort_by_key(|(line, lo, _)| (*line, *lo));
        directives.dedup_by_key(|(_, lo, _)| *lo);

        Self::from_directives(
            directives
                .into_iter()
                .map(|(line, _, directive)| (line, directive)),
        )
    }

    /// Build suppressions from `(line, directive)` pairs sorted by line.
    pub fn from_directives(directives: impl IntoIterator<Item = (usize, Directive)>) -> Self {
        let mut ctx = Self::default();

        // Track open disable ranges per rule
        let mut open_ranges: HashMap<FindingKind, usize> = HashMap::new();

        for (line, directive) in directives {
            match directive {
                Directive::Disable { rules } => {
                    for rule in rules {
                        // Only start a new range if not already open
                        open_ranges.entry(rule).or_insert(line);
                    }
                }
                Directive::Enable { rules } => {
                    for rule in rules {
                        if let Some(start) = open_ranges.remove(&rule) {
                            ctx.disabled_ranges
                                .entry(rule)
                                .or_default()
                                .push(DisabledRange {
                                    start,
                                    end: line.saturating_sub(1),
                                });
                        }
                    }
                }
                Directive::DisableNextLine { rules } => {
                    for rule in rules {
                        ctx.disabled_lines.entry(rule).or_default().insert(line + 1);
                    }
                }
            }
        }

        // Close any open ranges (extend to end of file)
        for (rule, start) in open_ranges {
            ctx.disabled_ranges
                .entry(rule)
                .or_default()
                .push(DisabledRange {
                    start,
                    end: usize::MAX,
                });
        }

        ctx
    }
}
