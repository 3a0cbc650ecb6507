//! Graphviz (DOT) rendering of a dependency graph
//!
//! ```text
//! digraph G {
//!     node [shape=box, fontsize=10];
//!     "<commit>" [label="<commit>"];
//!     "<commit>" -> "<parent>";
//! }
//! ```
//!
//! Nodes appear in sorted id order, each followed by its edges in parent
//! declaration order, so the text is identical across runs over the same store.

use crate::artifacts::graph::dependency_graph::DependencyGraph;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct RenderOptions {
    /// Label nodes with the short id instead of the full one
    pub abbrev: bool,
}

#[derive(Debug, Clone, Copy, Default, new)]
pub struct Graphviz {
    options: RenderOptions,
}

impl Graphviz {
    pub fn render(&self, graph: &DependencyGraph) -> String {
        let mut dot = vec![
            "digraph G {".to_string(),
            "    node [shape=box, fontsize=10];".to_string(),
        ];

        for (commit, parents) in graph.nodes() {
            dot.push(format!(
                "    \"{commit}\" [label=\"{}\"];",
                self.label(commit)
            ));
            for parent in parents {
                dot.push(format!("    \"{commit}\" -> \"{parent}\";"));
            }
        }
        dot.push("}".to_string());

        dot.join("\n")
    }

    fn label(&self, commit: &ObjectId) -> String {
        if self.options.abbrev {
            commit.to_short_oid()
        } else {
            commit.to_string()
        }
    }
}
