use crate::areas::repository::Repository;
use crate::artifacts::database::object_store::ObjectStore;
use crate::artifacts::objects::object_id::ObjectId;
use std::path::{Path, PathBuf};

impl Repository {
    /// List a tree, or the tree of a commit, in `git ls-tree` format.
    pub fn ls_tree(&self, object_sha: &str, recursive: bool) -> anyhow::Result<()> {
        let oid = self.resolve_object_id(object_sha)?;

        let tree_oid = match self.database().read_commit(&oid)? {
            Some(commit) => commit.tree_oid().clone(),
            None => oid,
        };

        self.print_tree(&tree_oid, None, recursive)
    }

    fn print_tree(
        &self,
        oid: &ObjectId,
        prefix: Option<&Path>,
        recursive: bool,
    ) -> anyhow::Result<()> {
        let tree = self.database().read_tree(oid)?;

        for entry in tree.into_entries() {
            let path = match prefix {
                Some(prefix) => prefix.join(&entry.name),
                None => PathBuf::from(&entry.name),
            };

            if recursive && entry.is_tree() {
                self.print_tree(&entry.oid, Some(&path), recursive)?;
            } else {
                writeln!(
                    self.writer(),
                    "{:0>6} {} {}\t{}",
                    entry.mode.as_str(),
                    entry.mode.object_kind(),
                    entry.oid,
                    path.display()
                )?;
            }
        }

        Ok(())
    }
}
