//! Analysis pipeline shared by all commands.
//!
//! ## Module Structure
//!
//! - `context`: `CheckContext` (config, file list, lazily parsed files)
//! - `file_scanner`: File discovery with include/ignore patterns
//! - `parsers`: swc-based JSX/TSX parsing
//! - `collect`: Per-file comment directives (suppressions)
//! - `data`: Source location types

pub mod collect;
pub mod context;
pub mod data;
pub mod file_scanner;
pub mod parsers;

pub use context::CheckContext;
pub use data::*;
