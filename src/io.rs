use std::fs::{self, File};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Existence and size of a path as reported by the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub exists: bool,
    pub size: u64,
}

impl FileStat {
    pub const fn missing() -> Self {
        Self {
            exists: false,
            size: 0,
        }
    }
}

/// Filesystem access needed to analyze a file.
///
/// `LocalFileSystem` is the production adapter. Tests substitute their own
/// to control the reported size or serve bytes from memory.
pub trait FileSystem {
    type Reader: Read + Seek;

    fn stat(&self, path: &Path) -> io::Result<FileStat>;

    fn open(&self, path: &Path) -> io::Result<Self::Reader>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    type Reader = File;

    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        match fs::metadata(path) {
            Ok(meta) => Ok(FileStat {
                exists: true,
                size: meta.len(),
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(FileStat::missing()),
            Err(e) => Err(e),
        }
    }

    fn open(&self, path: &Path) -> io::Result<File> {
        File::open(path)
    }
}

/// Reads up to `len` bytes from the current position.
///
/// Returns fewer bytes only when the source is exhausted. Interrupted reads
/// are retried.
pub fn read_prefix<R: Read>(reader: &mut R, len: usize) -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(len);
    reader.by_ref().take(len as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Reads up to `len` bytes starting at absolute `offset`.
///
/// An offset past the end of the source yields an empty buffer.
pub fn read_window<R: Read + Seek>(reader: &mut R, offset: u64, len: usize) -> io::Result<Vec<u8>> {
    reader.seek(SeekFrom::Start(offset))?;
    read_prefix(reader, len)
}
