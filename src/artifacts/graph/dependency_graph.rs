use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;

/// Ancestry graph of located commits.
///
/// Keys are the located commits in sorted id order; each maps to its raw
/// parent list in declaration order. Parents are never filtered, so they may
/// name commits that are not keys themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    parents: BTreeMap<ObjectId, Vec<ObjectId>>,
}

impl DependencyGraph {
    pub fn from_commits<'c>(commits: impl IntoIterator<Item = &'c Commit>) -> Self {
        let mut graph = DependencyGraph::default();
        for commit in commits {
            graph.insert(commit.oid().clone(), commit.parents().to_vec());
        }

        graph
    }

    pub fn insert(&mut self, commit: ObjectId, parents: Vec<ObjectId>) {
        self.parents.insert(commit, parents);
    }

    /// Nodes with their parents, in sorted id order.
    pub fn nodes(&self) -> impl Iterator<Item = (&ObjectId, &[ObjectId])> {
        self.parents
            .iter()
            .map(|(commit, parents)| (commit, parents.as_slice()))
    }

    /// `(commit, parent)` pairs, grouped by commit in node order.
    pub fn edges(&self) -> impl Iterator<Item = (&ObjectId, &ObjectId)> {
        self.nodes()
            .flat_map(|(commit, parents)| parents.iter().map(move |parent| (commit, parent)))
    }

    pub fn parents(&self, commit: &ObjectId) -> Option<&[ObjectId]> {
        self.parents.get(commit).map(Vec::as_slice)
    }

    pub fn contains(&self, commit: &ObjectId) -> bool {
        self.parents.contains_key(commit)
    }

    pub fn node_count(&self) -> usize {
        self.parents.len()
    }

    pub fn edge_count(&self) -> usize {
        self.parents.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}
