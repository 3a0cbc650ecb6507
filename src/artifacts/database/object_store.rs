use crate::artifacts::database::database_error::DatabaseError;
use crate::artifacts::database::raw_object::RawObject;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;

/// Read-only access to a content-addressable object store.
///
/// Implemented by the on-disk loose object database and by the in-memory
/// store used for fixtures.
pub trait ObjectStore {
    /// Load one object and split it into type tag and payload.
    fn read_object(&self, object_id: &ObjectId) -> Result<RawObject, DatabaseError>;

    /// Every object id present in the store, sorted lexicographically.
    fn list_object_ids(&self) -> Result<Vec<ObjectId>, DatabaseError>;

    /// Load an object that must be a tree.
    fn read_tree(&self, object_id: &ObjectId) -> Result<Tree, DatabaseError> {
        let object = self.read_object(object_id)?;
        if !object.is_tree() {
            return Err(DatabaseError::corrupt(
                object_id,
                format!("expected a tree, found a {}", object.kind),
            ));
        }

        Tree::deserialize(object_id, &object.payload)
    }

    /// Load an object and decode it as a commit, or `None` for other kinds.
    fn read_commit(&self, object_id: &ObjectId) -> Result<Option<Commit>, DatabaseError> {
        let object = self.read_object(object_id)?;
        if !object.is_commit() {
            return Ok(None);
        }

        Commit::deserialize(object_id, &object.payload).map(Some)
    }

    /// Find all objects whose id starts with the given (case-insensitive) prefix.
    fn find_objects_by_prefix(&self, prefix: &str) -> Result<Vec<ObjectId>, DatabaseError> {
        let prefix = prefix.to_ascii_lowercase();

        Ok(self
            .list_object_ids()?
            .into_iter()
            .filter(|oid| oid.as_ref().starts_with(&prefix))
            .collect())
    }
}

impl<S: ObjectStore + ?Sized> ObjectStore for &S {
    fn read_object(&self, object_id: &ObjectId) -> Result<RawObject, DatabaseError> {
        (**self).read_object(object_id)
    }

    fn list_object_ids(&self) -> Result<Vec<ObjectId>, DatabaseError> {
        (**self).list_object_ids()
    }
}
