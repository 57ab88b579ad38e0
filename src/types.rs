use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

pub const KEY_FILE_NAME: &str = "File Name";
pub const KEY_FILE_SIZE: &str = "File Size";
pub const KEY_FORMAT: &str = "Format";

pub const BASIC_KEYS: [&str; 3] = [KEY_FILE_NAME, KEY_FILE_SIZE, KEY_FORMAT];

/// Format classification produced by signature matching.
///
/// `Mp4` and `Txt` are recognized tags without a signature or a header
/// decoder yet. They dispatch to the generic path and are labelled
/// `UNKNOWN` in a [`MetadataRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Png,
    Wav,
    Mp4,
    Txt,
    Unknown,
}

impl FileType {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Wav => "WAV",
            Self::Mp4 => "MP4",
            Self::Txt => "TXT",
            Self::Unknown => "Unknown",
        }
    }

    /// Value written under the `Format` key.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Wav => "WAV",
            Self::Mp4 | Self::Txt | Self::Unknown => "UNKNOWN",
        }
    }

    #[must_use]
    pub const fn is_decodable(&self) -> bool {
        matches!(self, Self::Png | Self::Wav)
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Field name to value mapping describing one analyzed file.
///
/// Keys are unique and iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MetadataRecord {
    fields: BTreeMap<String, String>,
}

impl MetadataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.fields.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merges `other` into `self`; entries from `other` win on collision.
    pub fn merge(&mut self, other: MetadataRecord) {
        self.fields.extend(other.fields);
    }
}

impl IntoIterator for MetadataRecord {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
