use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while reading and decoding objects from the store.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("object not found: {0}")]
    NotFound(ObjectId),

    #[error("corrupt object {oid}: {reason}")]
    CorruptObject { oid: ObjectId, reason: String },

    #[error("malformed commit {oid}: {reason}")]
    MalformedCommit { oid: ObjectId, reason: String },

    #[error("size mismatch in object {oid}: header declares {declared} bytes, payload has {actual}")]
    SizeMismatch {
        oid: ObjectId,
        declared: usize,
        actual: usize,
    },

    #[error("unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DatabaseError {
    pub fn corrupt(oid: &ObjectId, reason: impl Into<String>) -> Self {
        DatabaseError::CorruptObject {
            oid: oid.clone(),
            reason: reason.into(),
        }
    }

    pub fn malformed_commit(oid: &ObjectId, reason: impl Into<String>) -> Self {
        DatabaseError::MalformedCommit {
            oid: oid.clone(),
            reason: reason.into(),
        }
    }

    /// Object the failure is attributed to, if any.
    pub fn object_id(&self) -> Option<&ObjectId> {
        match self {
            DatabaseError::NotFound(oid)
            | DatabaseError::CorruptObject { oid, .. }
            | DatabaseError::MalformedCommit { oid, .. }
            | DatabaseError::SizeMismatch { oid, .. } => Some(oid),
            DatabaseError::Io { .. } => None,
        }
    }
}
