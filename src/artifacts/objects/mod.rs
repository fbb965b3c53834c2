//! Git loose object types and decoding
//!
//! Every object is stored zlib-compressed in the Git object format:
//! `<type> <size>\0<content>`. Only blobs (raw file content) are readable.
//!
//! - `object_id`: validated 40-char hash and its sharded on-disk path
//! - `object_header`: `<type> <size>\0` parsing
//! - `object_reader`: streaming decompression and payload transfer
//! - `error`: error taxonomy shared by all of the above

pub mod error;
pub mod object_header;
pub mod object_id;
pub mod object_reader;
pub mod object_type;
pub mod token;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
