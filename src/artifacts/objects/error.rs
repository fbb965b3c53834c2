//! Errors raised while locating and decoding loose objects
//!
//! Every variant knows which [`Stage`] of the read pipeline produced it, so a
//! caller can tell a bad hash from a corrupt file from a failing output sink
//! without parsing messages.

use crate::artifacts::objects::object_id::ObjectId;
use std::io;
use std::path::PathBuf;

/// Step of the read pipeline that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Locate,
    Decompress,
    ParseKind,
    ParseLength,
    Transfer,
    Close,
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Locate => "locate",
            Stage::Decompress => "decompress",
            Stage::ParseKind => "parse kind",
            Stage::ParseLength => "parse length",
            Stage::Transfer => "transfer",
            Stage::Close => "close",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    /// The name is not 40 hexadecimal characters.
    #[error("locate: not a valid object name: {0}")]
    InvalidObjectName(String),

    /// The name is well formed but no loose object exists for it.
    #[error("locate: not a valid object name: {oid} (no object file at {})", .path.display())]
    ObjectNotFound { oid: ObjectId, path: PathBuf },

    /// The stored bytes are not a valid zlib stream.
    #[error("{stage}: corrupt object")]
    CorruptObject {
        stage: Stage,
        #[source]
        source: io::Error,
    },

    #[error("{stage}: unexpected end of object before {delimiter:?} delimiter")]
    UnexpectedEof { stage: Stage, delimiter: char },

    #[error("parse kind: unsupported object type {0:?}")]
    UnsupportedType(String),

    #[error("parse length: malformed object length {0:?}")]
    MalformedLength(String),

    #[error("transfer: truncated payload, expected {expected} bytes but only {actual} were available")]
    TruncatedPayload { expected: u64, actual: u64 },

    #[error("transfer: unable to write payload to output")]
    SinkWriteError(#[source] io::Error),

    #[error("{stage}: {source}")]
    Io {
        stage: Stage,
        #[source]
        source: io::Error,
    },
}

impl ObjectError {
    /// Classify a failed read from the decompressed stream
    ///
    /// flate2 reports bad or cut-off zlib data as `InvalidInput`, `InvalidData`
    /// or `UnexpectedEof`; anything else came from the underlying file.
    pub fn from_read(stage: Stage, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::InvalidInput
            | io::ErrorKind::InvalidData
            | io::ErrorKind::UnexpectedEof => {
                ObjectError::CorruptObject { stage, source }
            }
            _ => ObjectError::Io { stage, source },
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            ObjectError::InvalidObjectName(_) | ObjectError::ObjectNotFound { .. } => {
                Stage::Locate
            }
            ObjectError::CorruptObject { stage, .. }
            | ObjectError::UnexpectedEof { stage, .. }
            | ObjectError::Io { stage, .. } => *stage,
            ObjectError::UnsupportedType(_) => Stage::ParseKind,
            ObjectError::MalformedLength(_) => Stage::ParseLength,
            ObjectError::TruncatedPayload { .. } | ObjectError::SinkWriteError(_) => {
                Stage::Transfer
            }
        }
    }
}

pub type ObjectResult<T> = Result<T, ObjectError>;
