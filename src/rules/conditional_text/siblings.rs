//! Whitespace-aware sibling filtering.
//!
//! JSX inserts whitespace-only text between children whenever the source puts
//! them on separate lines. Those text nodes never render anything, so they
//! must not count as siblings. A whitespace run that does not start with a
//! newline (e.g. the `" "` in `{a} <b/>`) is a real rendered text node.

use swc_ecma_ast::JSXElementChild;

/// Returns true if `value` is newline-led formatting whitespace.
pub fn is_formatting_whitespace(value: &str) -> bool {
    value.trim().is_empty() && value.starts_with('\n')
}

/// Returns true if `child` is a text node made only of
/// newline-led formatting whitespace.
pub fn is_insignificant(child: &JSXElementChild) -> bool {
    match child {
        JSXElementChild::JSXText(text) => is_formatting_whitespace(&text.value),
        JSXElementChild::JSXExprContainer(_)
        | JSXElementChild::JSXSpreadChild(_)
        | JSXElementChild::JSXElement(_)
        | JSXElementChild::JSXFragment(_) => false,
    }
}

/// Children that would actually render something, in source order.
pub fn significant_siblings(children: &[JSXElementChild]) -> Vec<&JSXElementChild> {
    children
        .iter()
        .filter(|child| !is_insignificant(child))
        .collect()
}
