//! Plain data shared between the analysis pipeline and issues.

mod source;

pub use source::*;
