use crate::artifacts::database::database_error::DatabaseError;
use crate::artifacts::database::object_store::ObjectStore;
use crate::artifacts::log::target_file::TargetFile;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashSet;

/// Decides whether a target file exists anywhere under a tree.
///
/// Traversal is depth-first over an explicit stack of `(tree, position)`
/// frames, where `position` is the index of the target path component being
/// matched. A frame is expanded at most once per call, so shared subtrees are
/// read once and stack depth never grows with tree depth.
pub struct FileLocator<'s, S: ObjectStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: ObjectStore + ?Sized> FileLocator<'s, S> {
    pub fn new(store: &'s S) -> Self {
        FileLocator { store }
    }

    pub fn contains(&self, tree_oid: &ObjectId, target: &TargetFile) -> Result<bool, DatabaseError> {
        let mut stack = vec![(tree_oid.clone(), 0usize)];
        let mut visited = HashSet::new();

        while let Some((oid, position)) = stack.pop() {
            if !visited.insert((oid.clone(), position)) {
                continue;
            }

            let tree = self.store.read_tree(&oid)?;
            let component = target.component(position);
            let mut subtrees = Vec::new();

            for entry in tree.entries() {
                match target {
                    TargetFile::Name(name) => {
                        if entry.name == *name {
                            return Ok(true);
                        }
                        if entry.is_tree() {
                            subtrees.push((entry.oid.clone(), position));
                        }
                    }
                    TargetFile::Path(_) => {
                        if entry.name != component {
                            continue;
                        }
                        if target.is_last(position) {
                            return Ok(true);
                        }
                        if entry.is_tree() {
                            subtrees.push((entry.oid.clone(), position + 1));
                        }
                    }
                }
            }

            tracing::trace!(tree = %oid, subtrees = subtrees.len(), "searched tree");

            // reversed so the first subtree in payload order is popped first
            stack.extend(subtrees.into_iter().rev());
        }

        Ok(false)
    }
}
