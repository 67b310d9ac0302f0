//! Wrapcheck - finds JSX text that crashes React under browser auto-translation
//!
//! Translation extensions swap text nodes for `<font>` wrappers. React keeps
//! pointing at the original nodes, so a conditional sibling appearing or
//! disappearing next to bare text ends in a `removeChild`/`insertBefore`
//! failure. Wrapcheck reports the JSX shapes that set this up.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: File discovery, parsing and suppression comments
//! - `issues`: Issue type definitions and reporting
//! - `rules`: The conditional text detector
//!
//! The detector can be used on its own:
//!
//! ```ignore
//! use wrapcheck::rules::conditional_text::ConditionalTextDetector;
//!
//! let findings = ConditionalTextDetector::new().detect(&parsed.module);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
