//! Magic-byte signature table
//!
//! Maps the leading bytes of a file to a [`FileType`]. The table is
//! static data and never mutated.

use crate::types::FileType;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// ASCII `RIFF`.
pub const WAV_SIGNATURE: [u8; 4] = [0x52, 0x49, 0x46, 0x46];

/// Number of leading bytes the detector reads.
pub const SIGNATURE_PREFIX_LEN: usize = 8;

/// A magic-byte prefix identifying one file type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSignature {
    file_type: FileType,
    header: &'static [u8],
}

impl FileSignature {
    pub const fn new(file_type: FileType, header: &'static [u8]) -> Self {
        Self { file_type, header }
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn header(&self) -> &'static [u8] {
        self.header
    }

    /// Checks if `data` starts with this signature's header bytes.
    ///
    /// A prefix shorter than the header is never a match.
    pub fn matches_header(&self, data: &[u8]) -> bool {
        data.len() >= self.header.len() && &data[..self.header.len()] == self.header
    }
}

/// Known signatures. PNG and RIFF diverge in their first byte, so order
/// does not affect the outcome.
pub static SIGNATURES: &[FileSignature] = &[
    FileSignature::new(FileType::Png, &PNG_SIGNATURE),
    FileSignature::new(FileType::Wav, &WAV_SIGNATURE),
];

/// Returns the first signature whose header prefixes `data`.
pub fn match_signature(data: &[u8]) -> Option<&'static FileSignature> {
    SIGNATURES.iter().find(|sig| sig.matches_header(data))
}
