//! Per-format header decoders
//!
//! Each decoder knows the absolute offset and length of the fixed header
//! window it needs, and turns exactly those bytes into metadata fields.
//! Multi-byte fields are converted with an explicit byte order; host
//! endianness is never assumed.

pub mod png;
pub mod wav;

use std::io::{Read, Seek};

use tracing::debug;

use crate::error::{MetadataError, Result};
use crate::io::read_window;
use crate::types::{FileType, MetadataRecord};

pub use png::{PngDecoder, PngHeader};
pub use wav::{WavDecoder, WavHeader};

/// Decodes one format's fixed-layout header window into metadata fields.
pub trait HeaderDecoder {
    fn file_type(&self) -> FileType;

    /// Absolute byte offset of the header window.
    fn header_offset(&self) -> u64;

    /// Exact number of bytes the layout requires.
    fn header_len(&self) -> usize;

    /// Decodes the window. Fails with `TruncatedHeader` when `bytes` is
    /// shorter than [`header_len`](Self::header_len).
    fn decode(&self, bytes: &[u8]) -> Result<MetadataRecord>;
}

/// Seeks to the decoder's window, reads it and decodes it.
pub fn read_header<R, D>(decoder: &D, reader: &mut R) -> Result<MetadataRecord>
where
    R: Read + Seek,
    D: HeaderDecoder + ?Sized,
{
    let bytes = read_window(reader, decoder.header_offset(), decoder.header_len())?;
    decoder.decode(&bytes)
}

/// Decoder selected for a detected [`FileType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoder {
    Png(PngDecoder),
    Wav(WavDecoder),
    /// No format-specific fields; used for unknown and unimplemented tags.
    Generic,
}

impl Decoder {
    pub fn for_file_type(file_type: FileType) -> Self {
        match file_type {
            FileType::Png => Self::Png(PngDecoder),
            FileType::Wav => Self::Wav(WavDecoder),
            FileType::Mp4 | FileType::Txt | FileType::Unknown => Self::Generic,
        }
    }

    pub fn as_header_decoder(&self) -> Option<&dyn HeaderDecoder> {
        match self {
            Self::Png(d) => Some(d as &dyn HeaderDecoder),
            Self::Wav(d) => Some(d as &dyn HeaderDecoder),
            Self::Generic => None,
        }
    }

    /// Produces the format-specific fields for the file behind `reader`.
    ///
    /// The generic decoder reads nothing and returns an empty record.
    pub fn decode_from<R: Read + Seek>(&self, reader: &mut R) -> Result<MetadataRecord> {
        match self.as_header_decoder() {
            Some(decoder) => {
                debug!(
                    format = %decoder.file_type(),
                    offset = decoder.header_offset(),
                    "decoding header"
                );
                read_header(decoder, reader)
            }
            None => Ok(MetadataRecord::new()),
        }
    }
}

pub(crate) fn ensure_len(
    file_type: FileType,
    offset: u64,
    bytes: &[u8],
    expected: usize,
) -> Result<()> {
    if bytes.len() < expected {
        debug!(format = %file_type, offset, expected, actual = bytes.len(), "truncated header");
        return Err(MetadataError::TruncatedHeader {
            format: file_type,
            offset,
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

#[inline]
pub(crate) fn be_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[inline]
pub(crate) fn le_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[inline]
pub(crate) fn le_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}
