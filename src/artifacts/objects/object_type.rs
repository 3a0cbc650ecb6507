use crate::artifacts::database::database_error::DatabaseError;
use crate::artifacts::objects::object_id::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
    Tag,
}

impl ObjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
            ObjectType::Commit => "commit",
            ObjectType::Tag => "tag",
        }
    }

    /// Parse the `<kind> <size>` header that precedes every object payload.
    ///
    /// Returns the object type together with the declared payload size.
    pub fn parse_header(oid: &ObjectId, header: &[u8]) -> Result<(Self, usize), DatabaseError> {
        let header = std::str::from_utf8(header)
            .map_err(|_| DatabaseError::corrupt(oid, "header is not valid UTF-8"))?;
        let (kind, size) = header
            .split_once(' ')
            .ok_or_else(|| DatabaseError::corrupt(oid, format!("malformed header {header:?}")))?;

        let object_type = ObjectType::try_from(kind)
            .map_err(|_| DatabaseError::corrupt(oid, format!("unknown object type {kind:?}")))?;
        if size.is_empty() || !size.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DatabaseError::corrupt(
                oid,
                format!("invalid declared size {size:?}"),
            ));
        }
        let size = size
            .parse::<usize>()
            .map_err(|_| DatabaseError::corrupt(oid, format!("invalid declared size {size:?}")))?;

        Ok((object_type, size))
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        match value {
            "blob" => Ok(ObjectType::Blob),
            "tree" => Ok(ObjectType::Tree),
            "commit" => Ok(ObjectType::Commit),
            "tag" => Ok(ObjectType::Tag),
            _ => Err(anyhow::anyhow!("Invalid object type")),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
