use crate::artifacts::database::database_error::DatabaseError;
use crate::artifacts::database::object_store::ObjectStore;
use crate::artifacts::log::file_locator::FileLocator;
use crate::artifacts::log::target_file::TargetFile;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashMap;

/// What to do when an object cannot be read or decoded during a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanPolicy {
    /// Fail the whole scan on the first error; no partial result.
    #[default]
    Abort,
    /// Log a warning, record the object as skipped and keep scanning.
    Skip,
}

#[derive(Debug)]
pub struct SkippedObject {
    pub oid: ObjectId,
    pub error: DatabaseError,
}

/// Result of a scan: matching commits in object id order.
#[derive(Debug, Default)]
pub struct CommitScan {
    pub commits: Vec<Commit>,
    pub skipped: Vec<SkippedObject>,
}

impl CommitScan {
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn commit_ids(&self) -> impl Iterator<Item = &ObjectId> {
        self.commits.iter().map(Commit::oid)
    }
}

/// Finds every commit whose tree contains the target file.
pub struct CommitFinder<'s, S: ObjectStore + ?Sized> {
    store: &'s S,
    policy: ScanPolicy,
}

impl<'s, S: ObjectStore + ?Sized> CommitFinder<'s, S> {
    pub fn new(store: &'s S, policy: ScanPolicy) -> Self {
        CommitFinder { store, policy }
    }

    pub fn find(&self, target: &TargetFile) -> Result<CommitScan, DatabaseError> {
        let mut scan = CommitScan::default();
        // commits sharing a snapshot are resolved once
        let mut tree_cache = HashMap::new();

        for oid in self.store.list_object_ids()? {
            match self.inspect(&oid, target, &mut tree_cache) {
                Ok(Some(commit)) => {
                    tracing::debug!(commit = %oid, tree = %commit.tree_oid(), %target, "commit contains target");
                    scan.commits.push(commit);
                }
                Ok(None) => {}
                Err(error) => match self.policy {
                    ScanPolicy::Abort => return Err(error),
                    ScanPolicy::Skip => {
                        tracing::warn!(object = %oid, %error, "skipping unreadable object");
                        scan.skipped.push(SkippedObject { oid, error });
                    }
                },
            }
        }

        Ok(scan)
    }

    fn inspect(
        &self,
        oid: &ObjectId,
        target: &TargetFile,
        tree_cache: &mut HashMap<ObjectId, bool>,
    ) -> Result<Option<Commit>, DatabaseError> {
        let Some(commit) = self.store.read_commit(oid)? else {
            return Ok(None);
        };

        let found = match tree_cache.get(commit.tree_oid()) {
            Some(found) => *found,
            None => {
                let found = FileLocator::new(self.store).contains(commit.tree_oid(), target)?;
                tree_cache.insert(commit.tree_oid().clone(), found);
                found
            }
        };

        Ok(found.then_some(commit))
    }
}
