use crate::areas::repository::Repository;
use crate::artifacts::database::object_store::ObjectStore;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatFileMode {
    /// Print the object type
    Type,
    /// Print the payload size in bytes
    Size,
    /// Pretty-print the object content
    Pretty,
}

impl Repository {
    pub fn cat_file(&self, object_sha: &str, mode: CatFileMode) -> anyhow::Result<()> {
        let oid = self.resolve_object_id(object_sha)?;
        let object = self.database().read_object(&oid)?;

        match mode {
            CatFileMode::Type => writeln!(self.writer(), "{}", object.kind)?,
            CatFileMode::Size => writeln!(self.writer(), "{}", object.payload.len())?,
            CatFileMode::Pretty => match object.kind {
                ObjectType::Tree => {
                    let tree = Tree::deserialize(&oid, &object.payload)?;
                    if !tree.is_empty() {
                        writeln!(self.writer(), "{}", tree.display())?;
                    }
                }
                ObjectType::Commit => {
                    let commit = Commit::deserialize(&oid, &object.payload)?;
                    write!(self.writer(), "{}", commit.display())?;
                }
                ObjectType::Blob | ObjectType::Tag => {
                    self.writer().write_all(&object.payload)?;
                }
            },
        }

        Ok(())
    }
}
