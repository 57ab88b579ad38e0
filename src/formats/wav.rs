use std::io::{Read, Seek};

use super::{HeaderDecoder, ensure_len, le_u16, le_u32};
use crate::error::Result;
use crate::io::read_window;
use crate::types::{FileType, MetadataRecord};

/// Start of the `fmt ` chunk fields following the audio format code.
pub const FMT_FIELDS_OFFSET: u64 = 22;
pub const FMT_FIELDS_LEN: usize = 14;

pub const KEY_CHANNELS: &str = "Channels";
pub const KEY_SAMPLE_RATE: &str = "Sample Rate";
/// Holds the byte rate (bytes per second). The label is kept for output
/// compatibility.
pub const KEY_BIT_RATE: &str = "Bit Rate";
pub const KEY_BIT_DEPTH: &str = "Bit Depth";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WavHeader {
    pub channels: u16,
    pub sample_rate: u32,
    /// Bytes per second.
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

impl WavHeader {
    /// Parses the fmt fields from the window starting at [`FMT_FIELDS_OFFSET`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        ensure_len(FileType::Wav, FMT_FIELDS_OFFSET, data, FMT_FIELDS_LEN)?;

        Ok(Self {
            channels: le_u16(data, 0),
            sample_rate: le_u32(data, 2),
            byte_rate: le_u32(data, 6),
            block_align: le_u16(data, 10),
            bits_per_sample: le_u16(data, 12),
        })
    }

    pub fn read_from<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let data = read_window(reader, FMT_FIELDS_OFFSET, FMT_FIELDS_LEN)?;
        Self::from_bytes(&data)
    }

    /// Bits per second derived from the sample layout.
    pub fn bit_rate(&self) -> u64 {
        u64::from(self.sample_rate) * u64::from(self.channels) * u64::from(self.bits_per_sample)
    }

    pub fn to_record(&self) -> MetadataRecord {
        let mut record = MetadataRecord::new();
        record.insert(KEY_CHANNELS, self.channels);
        record.insert(KEY_SAMPLE_RATE, self.sample_rate);
        record.insert(KEY_BIT_RATE, self.byte_rate);
        record.insert(KEY_BIT_DEPTH, self.bits_per_sample);
        record
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WavDecoder;

impl HeaderDecoder for WavDecoder {
    fn file_type(&self) -> FileType {
        FileType::Wav
    }

    fn header_offset(&self) -> u64 {
        FMT_FIELDS_OFFSET
    }

    fn header_len(&self) -> usize {
        FMT_FIELDS_LEN
    }

    fn decode(&self, bytes: &[u8]) -> Result<MetadataRecord> {
        WavHeader::from_bytes(bytes).map(|header| header.to_record())
    }
}
