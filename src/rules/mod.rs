//! Rule implementations for wrapcheck.
//!
//! ## Module Structure
//!
//! - `conditional_text`: Conditionally rendered text nodes that break
//!   browser auto-translation

pub mod conditional_text;
