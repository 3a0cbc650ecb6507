//! Plumbing commands (low-level object inspection)
//!
//! - `cat-file`: Print the type or content of an object
//! - `ls-tree`: List the contents of a tree object

pub mod cat_file;
pub mod ls_tree;
