//! Reads the loose objects of a git repository, finds the commits whose tree
//! contains a given file and renders their ancestry as a Graphviz digraph.

pub mod areas;
pub mod artifacts;
pub mod commands;
