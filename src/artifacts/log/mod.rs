//! Commit history filtering by file
//!
//! - `target_file`: The file name or path a scan looks for
//! - `file_locator`: Depth-first search for the target under one tree
//! - `commit_finder`: Scan of every stored commit, with an abort or skip policy

pub mod commit_finder;
pub mod file_locator;
pub mod target_file;
