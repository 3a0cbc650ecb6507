use crate::artifacts::database::database_error::DatabaseError;
use crate::artifacts::objects::RAW_OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use sha1::{Digest, Sha1};

/// Encode an object's payload (without the `<kind> <size>\0` header).
pub trait Packable {
    fn serialize(&self) -> Bytes;
}

/// Decode an object's payload read from the store.
pub trait Unpackable {
    fn deserialize(object_id: &ObjectId, payload: &[u8]) -> Result<Self, DatabaseError>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    /// Full loose-object body: header followed by the payload.
    fn to_loose_bytes(&self) -> Bytes {
        let payload = self.serialize();
        let mut object_bytes = format!("{} {}\0", self.object_type(), payload.len()).into_bytes();
        object_bytes.extend_from_slice(&payload);

        Bytes::from(object_bytes)
    }

    fn object_id(&self) -> ObjectId {
        let mut hasher = Sha1::new();
        hasher.update(self.to_loose_bytes());

        let digest = hasher.finalize();
        let mut raw = [0u8; RAW_OBJECT_ID_LENGTH];
        raw.copy_from_slice(&digest);
        ObjectId::from_raw(&raw)
    }
}
