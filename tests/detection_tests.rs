use std::fs;
use std::io::{self, Cursor, Read};

use filemeta::signatures::{PNG_SIGNATURE, WAV_SIGNATURE};
use filemeta::{FileType, MetadataError, detect_format, detect_from_bytes, detect_from_reader};
use proptest::prelude::*;
use rstest::rstest;
use tempfile::TempDir;

#[rstest]
#[case::png(PNG_SIGNATURE.to_vec(), FileType::Png)]
#[case::png_with_ihdr(b"\x89PNG\r\n\x1a\n\0\0\0\x0dIHDR".to_vec(), FileType::Png)]
#[case::riff(b"RIFF".to_vec(), FileType::Wav)]
#[case::riff_wave(b"RIFF\x24\0\0\0WAVE".to_vec(), FileType::Wav)]
#[case::riff_avi(b"RIFF\0\0\0\0AVI ".to_vec(), FileType::Wav)]
#[case::jpeg(vec![0xFF, 0xD8, 0xFF, 0xE0], FileType::Unknown)]
#[case::lowercase_riff(b"riff\0\0\0\0".to_vec(), FileType::Unknown)]
#[case::empty(Vec::new(), FileType::Unknown)]
fn test_detect_from_bytes(#[case] data: Vec<u8>, #[case] expected: FileType) {
    assert_eq!(detect_from_bytes(&data), expected);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(4)]
#[case(7)]
fn test_short_png_prefix_is_unknown(#[case] len: usize) {
    let mut cursor = Cursor::new(PNG_SIGNATURE[..len].to_vec());
    assert_eq!(detect_from_reader(&mut cursor).unwrap(), FileType::Unknown);
}

#[test]
fn test_detect_reads_at_most_prefix() {
    let mut data = PNG_SIGNATURE.to_vec();
    data.extend_from_slice(&[0u8; 64]);
    let mut cursor = Cursor::new(data);

    detect_from_reader(&mut cursor).unwrap();
    assert_eq!(cursor.position(), 8);
}

/// Hands out one byte per call to exercise short reads.
struct TrickleReader {
    data: Vec<u8>,
    pos: usize,
}

impl Read for TrickleReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.data.len() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.data[self.pos];
        self.pos += 1;
        Ok(1)
    }
}

#[test]
fn test_detect_handles_short_reads() {
    let mut reader = TrickleReader {
        data: PNG_SIGNATURE.to_vec(),
        pos: 0,
    };
    assert_eq!(detect_from_reader(&mut reader).unwrap(), FileType::Png);
}

#[test]
fn test_detect_format_on_disk() {
    let dir = TempDir::new().unwrap();

    let png = dir.path().join("image.dat");
    fs::write(&png, PNG_SIGNATURE).unwrap();
    assert_eq!(detect_format(&png).unwrap(), FileType::Png);

    let wav = dir.path().join("sound.png");
    fs::write(&wav, WAV_SIGNATURE).unwrap();
    assert_eq!(detect_format(&wav).unwrap(), FileType::Wav);

    let tiny = dir.path().join("tiny.wav");
    fs::write(&tiny, b"RI").unwrap();
    assert_eq!(detect_format(&tiny).unwrap(), FileType::Unknown);
}

#[test]
fn test_detect_format_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = detect_format(dir.path().join("absent.png")).unwrap_err();
    assert!(matches!(err, MetadataError::NotFound(_)));
}

#[cfg(unix)]
#[test]
fn test_detect_format_directory_is_error() {
    let dir = TempDir::new().unwrap();
    let err = detect_format(dir.path()).unwrap_err();
    assert!(matches!(err, MetadataError::Io(_)));
}

proptest! {
    #[test]
    fn arbitrary_prefix_never_panics(data in proptest::collection::vec(any::<u8>(), 0..32)) {
        let _ = detect_from_bytes(&data);
    }

    #[test]
    fn png_prefix_always_png(tail in proptest::collection::vec(any::<u8>(), 0..32)) {
        let mut data = PNG_SIGNATURE.to_vec();
        data.extend_from_slice(&tail);
        prop_assert_eq!(detect_from_bytes(&data), FileType::Png);
    }

    #[test]
    fn riff_prefix_always_wav(tail in proptest::collection::vec(any::<u8>(), 0..32)) {
        let mut data = WAV_SIGNATURE.to_vec();
        data.extend_from_slice(&tail);
        prop_assert_eq!(detect_from_bytes(&data), FileType::Wav);
    }

    #[test]
    fn other_first_bytes_are_unknown(
        first in any::<u8>().prop_filter("not a signature lead byte", |b| *b != 0x89 && *b != b'R'),
        tail in proptest::collection::vec(any::<u8>(), 0..16),
    ) {
        let mut data = vec![first];
        data.extend_from_slice(&tail);
        prop_assert_eq!(detect_from_bytes(&data), FileType::Unknown);
    }
}
