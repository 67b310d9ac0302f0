//! Comment collection.
//!
//! Disable directives (`// wrapcheck-disable-next-line <rule>`) are read from
//! the comments swc extracts while parsing.

pub mod suppressions;

pub use suppressions::{Directive, DisabledRange, Suppressions};
