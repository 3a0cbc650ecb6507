use crate::areas::database::Database;
use crate::artifacts::database::object_store::ObjectStore;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object_id::ObjectId;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Shortest abbreviated id accepted on the command line
const MIN_PREFIX_LENGTH: usize = 4;

pub struct Repository {
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
}

impl Repository {
    /// Open the repository at `path`, either a work tree holding `.git` or a
    /// bare repository holding `objects` directly.
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let objects_path = Self::locate_objects_dir(path)
            .ok_or_else(|| anyhow::anyhow!("repository not found: {}", path.display()))?;

        tracing::debug!(objects = %objects_path.display(), "opened repository");

        Ok(Repository {
            writer: RefCell::new(writer),
            database: Database::new(objects_path.into_boxed_path()),
        })
    }

    /// Reject objects whose header size disagrees with their payload.
    pub fn with_size_check(mut self, verify_size: bool) -> Self {
        self.database = self.database.with_size_check(verify_size);
        self
    }

    fn locate_objects_dir(path: &Path) -> Option<PathBuf> {
        let git_dir = path.join(".git");
        if git_dir.is_dir() {
            return Some(git_dir.join("objects"));
        }

        let objects_dir = path.join("objects");
        (objects_dir.is_dir() && path.join("HEAD").is_file()).then_some(objects_dir)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Resolve a full or abbreviated object id to exactly one stored object.
    pub fn resolve_object_id(&self, object_sha: &str) -> anyhow::Result<ObjectId> {
        if object_sha.len() == OBJECT_ID_LENGTH {
            return ObjectId::try_parse(object_sha.to_string());
        }

        if object_sha.len() < MIN_PREFIX_LENGTH
            || !object_sha.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(anyhow::anyhow!("Not a valid object name {object_sha}"));
        }

        let mut matches = self.database.find_objects_by_prefix(object_sha)?;
        match matches.len() {
            0 => Err(anyhow::anyhow!("Not a valid object name {object_sha}")),
            1 => Ok(matches.remove(0)),
            _ => {
                let candidates = matches
                    .iter()
                    .map(|oid| format!("  {}", oid.to_short_oid()))
                    .collect::<Vec<_>>()
                    .join("\n");
                Err(anyhow::anyhow!(
                    "short object ID {object_sha} is ambiguous\nhint: The candidates are:\n{candidates}"
                ))
            }
        }
    }
}
