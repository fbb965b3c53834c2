//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings representing SHA-1 hashes.
//! They are only ever used here as lookup keys; nothing in this crate hashes
//! content.
//!
//! ## Storage
//!
//! Objects are stored in `<objects>/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::error::{ObjectError, ObjectResult};
use std::path::{Path, PathBuf};

/// Git object identifier (SHA-1 hash)
///
/// A validated 40-character hexadecimal string. The case of the digits is kept
/// exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Fails with [`ObjectError::InvalidObjectName`] when the string is not
    /// exactly 40 hexadecimal characters.
    pub fn try_parse(id: impl Into<String>) -> ObjectResult<Self> {
        let id = id.into();

        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ObjectError::InvalidObjectName(id));
        }

        Ok(Self(id))
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    /// For example, `abc123...` becomes `ab/c123...`
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// Full path of the loose object under the given objects directory
    pub fn locate(&self, root: &Path) -> PathBuf {
        root.join(self.to_path())
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Map a raw hash string to its loose object path under `root`
///
/// Pure string construction: the filesystem is never touched.
pub fn locate(root: &Path, hash: &str) -> ObjectResult<PathBuf> {
    Ok(ObjectId::try_parse(hash)?.locate(root))
}
