use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{MetadataError, Result};
use crate::io::read_prefix;
use crate::signatures::{SIGNATURE_PREFIX_LEN, match_signature};
use crate::types::FileType;

/// Classifies an already-read prefix. Never indexes past `prefix.len()`.
pub fn detect_from_bytes(prefix: &[u8]) -> FileType {
    match_signature(prefix)
        .map(|sig| sig.file_type())
        .unwrap_or(FileType::Unknown)
}

/// Reads the leading bytes of `reader` and classifies them.
///
/// Read failures are returned as errors, not as [`FileType::Unknown`].
pub fn detect_from_reader<R: Read>(reader: &mut R) -> Result<FileType> {
    let prefix = read_prefix(reader, SIGNATURE_PREFIX_LEN)?;
    trace!(prefix = ?prefix, "read signature prefix");

    let file_type = detect_from_bytes(&prefix);
    debug!(%file_type, prefix_len = prefix.len(), "detected format");
    Ok(file_type)
}

pub fn detect_format(path: impl AsRef<Path>) -> Result<FileType> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => MetadataError::NotFound(path.to_path_buf()),
        _ => MetadataError::Io(e),
    })?;
    detect_from_reader(&mut file)
}
