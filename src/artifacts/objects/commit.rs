//! Git commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! They contain:
//! - A tree object ID (directory snapshot)
//! - Parent commit ID(s) (for history)
//! - Any number of other headers (author, committer, gpgsig, ...)
//! - Commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! Header values spanning several lines (signatures) continue on lines that
//! start with a single space.

use crate::artifacts::database::database_error::DatabaseError;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;

const TREE_HEADER: &str = "tree";
const PARENT_HEADER: &str = "parent";

/// Git commit object
///
/// Parents are kept in declaration order; a merge commit keeps every one of
/// them.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Id the commit was stored (or hashed) under
    oid: ObjectId,
    /// Tree object ID representing the directory snapshot
    tree_oid: ObjectId,
    /// Parent commit IDs (empty for a root commit, several for merges)
    parents: Vec<ObjectId>,
    /// Remaining headers, opaque and in declaration order
    headers: Vec<(String, String)>,
    /// Commit message
    message: String,
}

impl Commit {
    /// Create a new commit; its id is the hash of its serialized form.
    ///
    /// # Arguments
    ///
    /// * `tree_oid` - Tree object representing the snapshot
    /// * `parents` - Parent commit IDs
    /// * `headers` - Other headers, e.g. `("author", "A U Thor <a@u.thor> 0 +0000")`
    /// * `message` - Commit message
    pub fn new(
        tree_oid: ObjectId,
        parents: Vec<ObjectId>,
        headers: Vec<(String, String)>,
        message: String,
    ) -> Self {
        let mut commit = Commit {
            oid: tree_oid.clone(),
            tree_oid,
            parents,
            headers,
            message,
        };
        commit.oid = commit.object_id();

        commit
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    /// Get the tree object ID
    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// First value of an opaque header such as `author`.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers()
            .find(|(header_key, _)| *header_key == key)
            .map(|(_, value)| value)
    }

    /// Get the full commit message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    fn parse_object_id(oid: &ObjectId, key: &str, value: &str) -> Result<ObjectId, DatabaseError> {
        ObjectId::try_parse(value.to_string()).map_err(|_| {
            DatabaseError::malformed_commit(oid, format!("invalid {key} id {value:?}"))
        })
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Bytes {
        let mut lines = vec![format!("{TREE_HEADER} {}", self.tree_oid)];
        for parent in &self.parents {
            lines.push(format!("{PARENT_HEADER} {parent}"));
        }
        for (key, value) in &self.headers {
            lines.push(format!("{key} {}", value.replace('\n', "\n ")));
        }
        lines.push(String::new());
        lines.push(self.message.clone());

        Bytes::from(lines.join("\n"))
    }
}

impl Unpackable for Commit {
    fn deserialize(object_id: &ObjectId, payload: &[u8]) -> Result<Self, DatabaseError> {
        let content = String::from_utf8_lossy(payload);
        let mut headers: Vec<(String, String)> = Vec::new();
        let mut rest: &str = &content;

        // the header block ends at the first blank line (or the end of the payload)
        loop {
            let (line, remainder) = rest.split_once('\n').unwrap_or((rest, ""));
            rest = remainder;

            if line.is_empty() {
                break;
            }

            if let Some(continuation) = line.strip_prefix(' ') {
                let (_, value) = headers.last_mut().ok_or_else(|| {
                    DatabaseError::malformed_commit(object_id, "continuation line without header")
                })?;
                value.push('\n');
                value.push_str(continuation);
                continue;
            }

            let (key, value) = line.split_once(' ').ok_or_else(|| {
                DatabaseError::malformed_commit(object_id, format!("invalid header line {line:?}"))
            })?;
            headers.push((key.to_string(), value.to_string()));
        }

        let mut tree_oid = None;
        let mut parents = Vec::new();
        let mut others = Vec::new();

        for (key, value) in headers {
            match key.as_str() {
                TREE_HEADER => {
                    if tree_oid.is_some() {
                        return Err(DatabaseError::malformed_commit(
                            object_id,
                            "more than one tree header",
                        ));
                    }
                    tree_oid = Some(Self::parse_object_id(object_id, &key, &value)?);
                }
                PARENT_HEADER => parents.push(Self::parse_object_id(object_id, &key, &value)?),
                _ => others.push((key, value)),
            }
        }

        let tree_oid = tree_oid
            .ok_or_else(|| DatabaseError::malformed_commit(object_id, "missing tree header"))?;

        Ok(Commit {
            oid: object_id.clone(),
            tree_oid,
            parents,
            headers: others,
            message: rest.to_string(),
        })
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        String::from_utf8_lossy(&self.serialize()).into_owned()
    }
}
