//! Git data structures and algorithms
//!
//! - `database`: Object store interface, raw objects and read errors
//! - `graph`: Commit ancestry graphs and their Graphviz rendering
//! - `log`: Locating the commits whose tree contains a file
//! - `objects`: Git object types (blob, tree, commit)

pub mod database;
pub mod graph;
pub mod log;
pub mod objects;
