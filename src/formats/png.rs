use std::io::{Read, Seek};

use super::{HeaderDecoder, be_u32, ensure_len};
use crate::error::Result;
use crate::io::read_window;
use crate::types::{FileType, MetadataRecord};

/// IHDR payload starts after the 8-byte signature and the chunk's
/// 4-byte length and 4-byte type.
pub const IHDR_OFFSET: u64 = 16;
pub const IHDR_FIELDS_LEN: usize = 17;

pub const KEY_WIDTH: &str = "Width";
pub const KEY_HEIGHT: &str = "Height";
pub const KEY_BIT_DEPTH: &str = "Bit Depth";
pub const KEY_COLOUR_TYPE: &str = "Colour Type";
pub const KEY_COMPRESSION_METHOD: &str = "Compression Method";
pub const KEY_FILTER_METHOD: &str = "Filter Method";
pub const KEY_INTERLACE_METHOD: &str = "Interlace Method";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PngHeader {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub colour_type: u8,
    pub compression_method: u8,
    pub filter_method: u8,
    pub interlace_method: u8,
}

impl PngHeader {
    /// Parses the IHDR fields from the window starting at [`IHDR_OFFSET`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        ensure_len(FileType::Png, IHDR_OFFSET, data, IHDR_FIELDS_LEN)?;

        Ok(Self {
            width: be_u32(data, 0),
            height: be_u32(data, 4),
            bit_depth: data[8],
            colour_type: data[9],
            compression_method: data[10],
            filter_method: data[11],
            interlace_method: data[12],
        })
    }

    pub fn read_from<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let data = read_window(reader, IHDR_OFFSET, IHDR_FIELDS_LEN)?;
        Self::from_bytes(&data)
    }

    pub fn to_record(&self) -> MetadataRecord {
        let mut record = MetadataRecord::new();
        record.insert(KEY_WIDTH, self.width);
        record.insert(KEY_HEIGHT, self.height);
        record.insert(KEY_BIT_DEPTH, self.bit_depth);
        record.insert(KEY_COLOUR_TYPE, self.colour_type);
        record.insert(KEY_COMPRESSION_METHOD, self.compression_method);
        record.insert(KEY_FILTER_METHOD, self.filter_method);
        record.insert(KEY_INTERLACE_METHOD, self.interlace_method);
        record
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PngDecoder;

impl HeaderDecoder for PngDecoder {
    fn file_type(&self) -> FileType {
        FileType::Png
    }

    fn header_offset(&self) -> u64 {
        IHDR_OFFSET
    }

    fn header_len(&self) -> usize {
        IHDR_FIELDS_LEN
    }

    fn decode(&self, bytes: &[u8]) -> Result<MetadataRecord> {
        PngHeader::from_bytes(bytes).map(|header| header.to_record())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ihdr_window(width: u32, height: u32, tail: [u8; 5]) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&width.to_be_bytes());
        data.extend_from_slice(&height.to_be_bytes());
        data.extend_from_slice(&tail);
        // CRC bytes follow the 13-byte payload in a real file
        data.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        data
    }

    #[test]
    fn test_from_bytes() {
        let header = PngHeader::from_bytes(&ihdr_window(800, 600, [8, 2, 0, 0, 0])).unwrap();
        assert_eq!(header.width, 800);
        assert_eq!(header.height, 600);
        assert_eq!(header.bit_depth, 8);
        assert_eq!(header.colour_type, 2);
        assert_eq!(header.interlace_method, 0);
    }

    #[test]
    fn test_high_bytes_are_unsigned() {
        let header = PngHeader::from_bytes(&ihdr_window(1, 1, [0xFF, 0x80, 0, 0, 1])).unwrap();
        let record = header.to_record();
        assert_eq!(record.get(KEY_BIT_DEPTH), Some("255"));
        assert_eq!(record.get(KEY_COLOUR_TYPE), Some("128"));
        assert_eq!(record.get(KEY_INTERLACE_METHOD), Some("1"));
    }

    #[test]
    fn test_large_width_not_negative() {
        let header = PngHeader::from_bytes(&ihdr_window(u32::MAX, 0x8000_0000, [8, 6, 0, 0, 0])).unwrap();
        let record = header.to_record();
        assert_eq!(record.get(KEY_WIDTH), Some("4294967295"));
        assert_eq!(record.get(KEY_HEIGHT), Some("2147483648"));
    }

    #[test]
    fn test_short_window_is_truncated() {
        let data = ihdr_window(800, 600, [8, 2, 0, 0, 0]);
        let err = PngHeader::from_bytes(&data[..16]).unwrap_err();
        assert!(err.is_truncated());
    }

    #[test]
    fn test_record_has_seven_fields() {
        let record = PngDecoder.decode(&ihdr_window(16, 16, [8, 2, 0, 0, 0])).unwrap();
        assert_eq!(record.len(), 7);
    }
}
