//! Porcelain commands
//!
//! - `graph`: Render the ancestry of the commits containing a file

pub mod graph;
