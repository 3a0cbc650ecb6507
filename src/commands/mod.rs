//! Command implementations
//!
//! - `plumbing`: Low-level object inspection (cat-file, ls-tree)
//! - `porcelain`: The dependency graph command

pub mod plumbing;
pub mod porcelain;
