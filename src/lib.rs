pub mod analysis;
pub mod detection;
mod error;
pub mod formats;
pub mod io;
pub mod signatures;
pub mod types;

pub use analysis::{analyze_file, analyze_file_with, analyze_reader, collect_basic};
pub use detection::{detect_format, detect_from_bytes, detect_from_reader};
pub use error::{MetadataError, Result};
pub use formats::{Decoder, HeaderDecoder, PngHeader, WavHeader};
pub use io::{FileStat, FileSystem, LocalFileSystem};
pub use types::{FileType, MetadataRecord};
