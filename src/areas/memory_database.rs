use crate::areas::database::{compress, decode_loose_object};
use crate::artifacts::database::database_error::DatabaseError;
use crate::artifacts::database::object_store::ObjectStore;
use crate::artifacts::database::raw_object::RawObject;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use std::collections::BTreeMap;

/// In-memory object store holding zlib-compressed loose objects.
///
/// Reads go through the same inflate and header-splitting path as the
/// on-disk [`Database`](crate::areas::database::Database), which makes it a
/// drop-in fixture for everything built on [`ObjectStore`].
#[derive(Debug, Default, Clone)]
pub struct MemoryDatabase {
    objects: BTreeMap<ObjectId, Bytes>,
    verify_size: bool,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size_check(mut self, verify_size: bool) -> Self {
        self.verify_size = verify_size;
        self
    }

    /// Store an object under the id git would give it.
    pub fn insert(&mut self, object: &impl Object) -> ObjectId {
        let object_id = object.object_id();
        self.insert_loose(object_id.clone(), &object.to_loose_bytes());

        object_id
    }

    /// Store an uncompressed loose body (`<kind> <size>\0<payload>`) under any id.
    pub fn insert_loose(&mut self, object_id: ObjectId, content: &[u8]) {
        let compressed = compress(content).expect("compressing into a Vec cannot fail");
        self.objects.insert(object_id, compressed);
    }

    /// Store already-compressed bytes verbatim.
    pub fn insert_compressed(&mut self, object_id: ObjectId, compressed: impl Into<Bytes>) {
        self.objects.insert(object_id, compressed.into());
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectStore for MemoryDatabase {
    fn read_object(&self, object_id: &ObjectId) -> Result<RawObject, DatabaseError> {
        let compressed = self
            .objects
            .get(object_id)
            .ok_or_else(|| DatabaseError::NotFound(object_id.clone()))?;

        decode_loose_object(object_id, compressed, self.verify_size)
    }

    fn list_object_ids(&self) -> Result<Vec<ObjectId>, DatabaseError> {
        Ok(self.objects.keys().cloned().collect())
    }
}
