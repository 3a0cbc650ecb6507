//! Commit ancestry graphs
//!
//! - `dependency_graph`: Located commits mapped to their raw parent lists
//! - `graphviz`: Deterministic DOT rendering

pub mod dependency_graph;
pub mod graphviz;
