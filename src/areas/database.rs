use crate::artifacts::database::database_error::DatabaseError;
use crate::artifacts::database::object_store::ObjectStore;
use crate::artifacts::database::raw_object::RawObject;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use std::ffi::OsStr;
use std::io::{Read, Write};
use std::path::Path;
use walkdir::WalkDir;

/// Loose object database rooted at an `objects` directory.
///
/// Objects are read-only: nothing here writes to the store. The size declared
/// in an object header is informational unless `with_size_check(true)` is set.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
    verify_size: bool,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database {
            path,
            verify_size: false,
        }
    }

    /// Toggle the check of the header's declared size against the payload length.
    pub fn with_size_check(mut self, verify_size: bool) -> Self {
        self.verify_size = verify_size;
        self
    }

    fn read_compressed(&self, object_id: &ObjectId) -> Result<Vec<u8>, DatabaseError> {
        let object_path = self.path.join(object_id.to_path());

        std::fs::read(&object_path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => DatabaseError::NotFound(object_id.clone()),
            _ => DatabaseError::Io {
                path: object_path,
                source,
            },
        })
    }
}

impl ObjectStore for Database {
    fn read_object(&self, object_id: &ObjectId) -> Result<RawObject, DatabaseError> {
        let compressed = self.read_compressed(object_id)?;

        decode_loose_object(object_id, &compressed, self.verify_size)
    }

    fn list_object_ids(&self) -> Result<Vec<ObjectId>, DatabaseError> {
        let mut object_ids = Vec::new();

        if !self.path.is_dir() {
            return Ok(object_ids);
        }

        // objects/<2 hex>/<38 hex>; pack/ and info/ never yield a 40-char id
        for entry in WalkDir::new(&self.path).min_depth(2).max_depth(2) {
            let entry = entry.map_err(|e| DatabaseError::Io {
                path: e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.path.to_path_buf()),
                source: e.into(),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let dir_name = entry
                .path()
                .parent()
                .and_then(Path::file_name)
                .and_then(OsStr::to_str);
            let file_name = entry.file_name().to_str();

            if let (Some(dir_name), Some(file_name)) = (dir_name, file_name)
                && dir_name.len() == 2
            {
                let full_oid = format!("{dir_name}{file_name}");
                if let Ok(oid) = ObjectId::try_parse(full_oid.clone())
                    && oid.as_ref() == full_oid
                {
                    object_ids.push(oid);
                }
            }
        }

        object_ids.sort();
        tracing::debug!(count = object_ids.len(), path = %self.path.display(), "enumerated loose objects");

        Ok(object_ids)
    }
}

/// Inflate a loose object and split it at the first NUL into header and payload.
pub fn decode_loose_object(
    object_id: &ObjectId,
    compressed: &[u8],
    verify_size: bool,
) -> Result<RawObject, DatabaseError> {
    let content = decompress(compressed)
        .map_err(|e| DatabaseError::corrupt(object_id, format!("unable to decompress: {e}")))?;

    let header_end = content
        .iter()
        .position(|&byte| byte == b'\0')
        .ok_or_else(|| DatabaseError::corrupt(object_id, "missing header terminator"))?;

    let (kind, declared) = ObjectType::parse_header(object_id, &content[..header_end])?;
    let payload = content.slice(header_end + 1..);

    if verify_size && payload.len() != declared {
        return Err(DatabaseError::SizeMismatch {
            oid: object_id.clone(),
            declared,
            actual: payload.len(),
        });
    }

    tracing::trace!(%object_id, %kind, size = payload.len(), "read object");

    Ok(RawObject::new(kind, payload))
}

pub fn compress(data: &[u8]) -> std::io::Result<Bytes> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data)?;

    encoder
        .finish()
        .map(|compressed_content| compressed_content.into())
}

pub fn decompress(data: &[u8]) -> std::io::Result<Bytes> {
    let mut decoder = flate2::read::ZlibDecoder::new(data);
    let mut decompressed_content = Vec::new();
    decoder.read_to_end(&mut decompressed_content)?;

    Ok(decompressed_content.into())
}
