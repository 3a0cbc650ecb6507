use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;

/// A decompressed object split into its type tag and payload.
///
/// The payload excludes the `<kind> <size>\0` header.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RawObject {
    pub kind: ObjectType,
    pub payload: Bytes,
}

impl RawObject {
    pub fn is_commit(&self) -> bool {
        self.kind == ObjectType::Commit
    }

    pub fn is_tree(&self) -> bool {
        self.kind == ObjectType::Tree
    }
}
