use std::path::PathBuf;

use thiserror::Error;

use crate::types::FileType;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("could not find file: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "truncated {format} header: expected {expected} bytes at offset {offset}, got {actual}"
    )]
    TruncatedHeader {
        format: FileType,
        offset: u64,
        expected: usize,
        actual: usize,
    },
}

impl MetadataError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::TruncatedHeader { .. })
    }
}

pub type Result<T> = std::result::Result<T, MetadataError>;
