use flate2::Compression;
use flate2::write::ZlibEncoder;
use std::io::Write;
use std::path::{Path, PathBuf};

/// SHA-1 of `blob 5\0hello`
pub const HELLO_OID: &str = "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0";
/// SHA-1 of `blob 0\0`
pub const EMPTY_BLOB_OID: &str = "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391";

pub fn objects_dir(repository: &Path) -> PathBuf {
    repository.join(".git").join("objects")
}

pub fn blob_bytes(payload: &[u8]) -> Vec<u8> {
    let mut raw = format!("blob {}\0", payload.len()).into_bytes();
    raw.extend_from_slice(payload);
    raw
}

/// Compress `raw` and store it as the loose object `oid` under `objects`
///
/// The name is taken as given, content is never hashed.
pub fn write_loose_object(objects: &Path, oid: &str, raw: &[u8]) -> PathBuf {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(raw).expect("Failed to compress object");
    let compressed = encoder.finish().expect("Failed to finish compression");

    write_raw_object(objects, oid, &compressed)
}

/// Store `bytes` verbatim as the loose object `oid` under `objects`
pub fn write_raw_object(objects: &Path, oid: &str, bytes: &[u8]) -> PathBuf {
    let path = objects.join(&oid[..2]).join(&oid[2..]);
    std::fs::create_dir_all(path.parent().expect("Object path has a parent"))
        .expect("Failed to create object directory");
    std::fs::write(&path, bytes).expect("Failed to write object file");
    path
}
