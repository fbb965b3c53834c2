use crate::artifacts::objects::error::{ObjectError, ObjectResult, Stage};
use crate::artifacts::objects::object_header::ObjectHeader;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_reader;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Read-only view of the loose object database (`.git/objects`)
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        object_id.locate(&self.path)
    }

    /// Stream the payload of a blob to `writer`
    pub fn cat_object(
        &self,
        object_id: &ObjectId,
        writer: &mut dyn Write,
    ) -> ObjectResult<ObjectHeader> {
        let object_file = self.open_object(object_id)?;

        object_reader::decode(object_file, writer)
    }

    /// Read the type and size of an object without touching its payload
    pub fn read_header(&self, object_id: &ObjectId) -> ObjectResult<ObjectHeader> {
        let object_file = self.open_object(object_id)?;

        object_reader::decode_header(object_file)
    }

    fn open_object(&self, object_id: &ObjectId) -> ObjectResult<File> {
        let object_path = self.object_path(object_id);
        tracing::debug!(oid = %object_id, path = %object_path.display(), "opening loose object");

        match File::open(&object_path) {
            Ok(file) => Ok(file),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ObjectError::ObjectNotFound {
                    oid: object_id.clone(),
                    path: object_path,
                })
            }
            Err(e) => Err(ObjectError::Io {
                stage: Stage::Locate,
                source: e,
            }),
        }
    }
}
