//! Conditional text node detection.
//!
//! Browser auto-translation (Google Translate and friends) replaces text
//! nodes with `<font>` wrappers. When React later inserts or removes a
//! sibling next to such a node, it tries to touch a text node that is no
//! longer in the DOM and the page crashes or stops updating
//! (facebook/react#11538). The fix on the user side is always the same:
//! wrap the text in its own element.
//!
//! Two shapes are flagged:
//!
//! - **dangerous-conditional**: a `{cond && 'text'}` / `{cond ? 'text' : x}`
//!   container that has other rendered siblings.
//! - **dangerous-literal**: a text node directly after a container that can
//!   alternate between an element and nothing, e.g.
//!   `{cond && <span />} text`.
//!
//! ## Module Structure
//!
//! - `detector`: AST visitor and the two decision procedures
//! - `siblings`: newline-padding aware sibling filtering

mod detector;
mod siblings;


use rayon::prelude::*;
use swc_common::{BytePos, SourceMap, SourceMapper, Span};

pub use detector::{
    ConditionalTextDetector, Finding, FindingKind, check_conditional_text,
    check_text_after_conditional,
};
pub use siblings::{is_formatting_whitespace, is_insignificant, significant_siblings};

use crate::{
    core::{
        CheckContext, SourceContext, SourceLocation, collect::Suppressions, parsers::jsx::ParsedJSX,
    },
    issues::ConditionalTextIssue,
};

/// Run the check over every parsed file in the context.
pub fn check_conditional_text_issues(ctx: &CheckContext) -> Vec<ConditionalTextIssue> {
    ctx.parsed_files()
        .par_iter()
        .flat_map_iter(|(file_path, parsed)| check_parsed_file(file_path, parsed))
        .collect()
}

/// Detect hazards in one parsed file and turn them into located issues,
/// dropping the ones silenced by `wrapcheck-disable` comments.
pub fn check_parsed_file(file_path: &str, parsed: &ParsedJSX) -> Vec<ConditionalTextIssue> {
    let suppressions = Suppressions::from_comments(&parsed.comments, &parsed.source_map);

    ConditionalTextDetector::new()
        .detect(&parsed.module)
        .into_iter()
        .filter_map(|finding| {
            let pos = display_pos(finding.span, &parsed.source_map);
            let loc = parsed.source_map.lookup_char_pos(pos);

            if suppressions.is_suppressed(loc.line, finding.kind) {
                return None;
            }

            let source_line = loc
                .file
                .get_line(loc.line - 1)
                .map(|cow| cow.to_string())
                .unwrap_or_default();

            Some(ConditionalTextIssue {
                context: SourceContext::new(
                    SourceLocation::new(file_path, loc.line, loc.col.0 + 1),
                    source_line,
                ),
                kind: finding.kind,
            })
        })
        .collect()
}

/// Position to show for a finding.
///
/// A flagged text node usually starts with the newline right after the
/// preceding `}`; point at its first visible character instead. Whitespace-only
/// nodes keep their own start.
fn display_pos(span: Span, source_map: &SourceMap) -> BytePos {
    let Ok(snippet) = source_map.span_to_snippet(span) else {
        return span.lo;
    };
    let trimmed = snippet.trim_start();
    if trimmed.is_empty() {
        return span.lo;
    }
    span.lo + BytePos((snippet.len() - trimmed.len()) as u32)
}
