//! Metadata assembly
//!
//! Combines the format-independent facts about a file with the fields
//! produced by the header decoder its signature selects.

use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::{debug, instrument};

use crate::detection::detect_from_reader;
use crate::error::{MetadataError, Result};
use crate::formats::Decoder;
use crate::io::{FileSystem, LocalFileSystem};
use crate::types::{FileType, KEY_FILE_NAME, KEY_FILE_SIZE, KEY_FORMAT, MetadataRecord};

/// Builds the `File Name`, `File Size` and `Format` fields. Performs no I/O.
pub fn collect_basic(path: &Path, size: u64, file_type: FileType) -> MetadataRecord {
    let name = path
        .file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy();

    let mut record = MetadataRecord::new();
    record.insert(KEY_FILE_NAME, name);
    record.insert(KEY_FILE_SIZE, size);
    record.insert(KEY_FORMAT, file_type.label());
    record
}

/// Analyzes an open source whose name and total size are already known.
///
/// `path` is only used to derive the `File Name` field.
pub fn analyze_reader<R: Read + Seek>(
    reader: &mut R,
    path: &Path,
    size: u64,
) -> Result<MetadataRecord> {
    reader.seek(SeekFrom::Start(0))?;
    let file_type = detect_from_reader(reader)?;

    // a decode failure fails the whole analysis
    let header_fields = Decoder::for_file_type(file_type).decode_from(reader)?;
    debug!(%file_type, fields = header_fields.len(), "decoded header fields");

    let mut record = collect_basic(path, size, file_type);
    record.merge(header_fields);
    Ok(record)
}

#[instrument(level = "debug", skip(fs))]
pub fn analyze_file_with<F: FileSystem>(fs: &F, path: &Path) -> Result<MetadataRecord> {
    let stat = fs.stat(path)?;
    if !stat.exists {
        return Err(MetadataError::NotFound(path.to_path_buf()));
    }

    let mut reader = fs.open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => MetadataError::NotFound(path.to_path_buf()),
        _ => MetadataError::Io(e),
    })?;

    analyze_reader(&mut reader, path, stat.size)
}

/// Analyzes the file at `path` on the local filesystem.
pub fn analyze_file(path: impl AsRef<Path>) -> Result<MetadataRecord> {
    analyze_file_with(&LocalFileSystem, path.as_ref())
}
