//! Persisted dictionary snapshots.
//!
//! A snapshot stores the full word/count mapping so that later runs can skip
//! re-tokenizing the corpus. Two encodings are supported:
//!
//! - [`SnapshotFormat::Binary`]: a 4-byte magic, a little-endian CRC32 of the
//!   payload, then the bincode-encoded [`DictionarySnapshot`].
//! - [`SnapshotFormat::Json`]: the same [`DictionarySnapshot`] as JSON.
//!
//! Entries are written in `(count desc, word desc)` order in both formats.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{KeyspellError, Result};
use crate::spelling::dictionary::FrequencyDictionary;

/// File name used when no snapshot path is configured explicitly.
pub const DEFAULT_SNAPSHOT_NAME: &str = "word_dict.bin";

/// Leading bytes of every binary snapshot.
pub const SNAPSHOT_MAGIC: &[u8; 4] = b"KSPD";

/// Current snapshot layout version.
pub const SNAPSHOT_VERSION: u32 = 1;

const BINARY_HEADER_LEN: usize = SNAPSHOT_MAGIC.len() + 4;

/// On-disk encoding of a snapshot.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotFormat {
    /// Compact bincode encoding with a checksummed header
    Binary,
    /// Human-readable JSON
    Json,
}

impl SnapshotFormat {
    /// Infer the format from a path's extension, if it is a known one.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "bin" | "dict" => Some(SnapshotFormat::Binary),
            "json" => Some(SnapshotFormat::Json),
            _ => None,
        }
    }

    /// Whether `bytes` start like a binary snapshot.
    pub fn is_binary(bytes: &[u8]) -> bool {
        bytes.starts_with(SNAPSHOT_MAGIC)
    }

    /// Guess the format from the leading bytes of a file: the binary magic,
    /// or a JSON object after optional whitespace.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if Self::is_binary(bytes) {
            return Some(SnapshotFormat::Binary);
        }
        match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'{') => Some(SnapshotFormat::Json),
            _ => None,
        }
    }

    /// Pick the format for writing a snapshot to `path`.
    ///
    /// A requested format must agree with a known extension, otherwise the
    /// file could not be read back by extension. Without a request the
    /// extension decides, falling back to binary.
    pub fn resolve(path: &Path, requested: Option<Self>) -> Result<Self> {
        match (requested, Self::from_path(path)) {
            (Some(requested), Some(implied)) if requested != implied => {
                Err(KeyspellError::invalid_input(format!(
                    "{requested:?} snapshot requested for {}, whose extension implies {implied:?}",
                    path.display()
                )))
            }
            (Some(requested), _) => Ok(requested),
            (None, implied) => Ok(implied.unwrap_or(SnapshotFormat::Binary)),
        }
    }
}

/// A single persisted word count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub word: String,
    pub count: u64,
}

/// Serializable form of a full [`FrequencyDictionary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionarySnapshot {
    pub version: u32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    pub total_count: u64,
    pub entries: Vec<SnapshotEntry>,
}

impl DictionarySnapshot {
    /// Capture a dictionary.
    pub fn from_dictionary(dictionary: &FrequencyDictionary) -> Self {
        DictionarySnapshot {
            version: SNAPSHOT_VERSION,
            created_at: Utc::now(),
            total_count: dictionary.total_frequency(),
            entries: dictionary
                .sorted_entries()
                .into_iter()
                .map(|(word, count)| SnapshotEntry {
                    word: word.to_string(),
                    count,
                })
                .collect(),
        }
    }

    /// Rebuild the dictionary, validating the snapshot along the way.
    pub fn into_dictionary(self) -> Result<FrequencyDictionary> {
        if self.version != SNAPSHOT_VERSION {
            return Err(KeyspellError::format(format!(
                "unsupported snapshot version {} (expected {SNAPSHOT_VERSION})",
                self.version
            )));
        }

        let entry_total = self
            .entries
            .iter()
            .try_fold(0u64, |total, entry| total.checked_add(entry.count))
            .ok_or_else(|| KeyspellError::format("snapshot counts overflow"))?;
        if entry_total != self.total_count {
            return Err(KeyspellError::format(format!(
                "snapshot total {} does not match its entries ({entry_total})",
                self.total_count
            )));
        }

        let entry_count = self.entries.len();
        let dictionary = FrequencyDictionary::from_entries(
            self.entries.into_iter().map(|entry| (entry.word, entry.count)),
        );

        if dictionary.len() != entry_count {
            return Err(KeyspellError::format("snapshot contains duplicate words"));
        }

        Ok(dictionary)
    }

    /// Encode the snapshot in the given format.
    pub fn encode(&self, format: SnapshotFormat) -> Result<Vec<u8>> {
        match format {
            SnapshotFormat::Binary => {
                let payload = bincode::serde::encode_to_vec(self, bincode::config::standard())
                    .map_err(|e| KeyspellError::format(format!("failed to encode snapshot: {e}")))?;

                let mut bytes = Vec::with_capacity(BINARY_HEADER_LEN + payload.len());
                bytes.extend_from_slice(SNAPSHOT_MAGIC);
                bytes.extend_from_slice(&crc32fast::hash(&payload).to_le_bytes());
                bytes.extend_from_slice(&payload);
                Ok(bytes)
            }
            SnapshotFormat::Json => Ok(serde_json::to_vec_pretty(self)?),
        }
    }

    /// Decode a snapshot previously produced by [`DictionarySnapshot::encode`].
    pub fn decode(bytes: &[u8], format: SnapshotFormat) -> Result<Self> {
        match format {
            SnapshotFormat::Binary => {
                if bytes.len() < BINARY_HEADER_LEN || !SnapshotFormat::is_binary(bytes) {
                    return Err(KeyspellError::format("missing binary snapshot header"));
                }

                let (header, payload) = bytes.split_at(BINARY_HEADER_LEN);
                let mut checksum = [0u8; 4];
                checksum.copy_from_slice(&header[SNAPSHOT_MAGIC.len()..]);
                if u32::from_le_bytes(checksum) != crc32fast::hash(payload) {
                    return Err(KeyspellError::format("snapshot checksum mismatch"));
                }

                let (snapshot, _) =
                    bincode::serde::decode_from_slice(payload, bincode::config::standard())
                        .map_err(|e| {
                            KeyspellError::format(format!("failed to decode snapshot: {e}"))
                        })?;
                Ok(snapshot)
            }
            SnapshotFormat::Json => serde_json::from_slice(bytes)
                .map_err(|e| KeyspellError::format(format!("failed to parse JSON snapshot: {e}"))),
        }
    }
}

/// Persist `dictionary` to `path`, choosing the format from the extension
/// (binary unless the extension says JSON).
pub fn save_snapshot<P: AsRef<Path>>(dictionary: &FrequencyDictionary, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = SnapshotFormat::resolve(path, None)?;
    save_snapshot_as(dictionary, path, format)
}

/// Persist `dictionary` to `path` in an explicit format.
pub fn save_snapshot_as<P: AsRef<Path>>(
    dictionary: &FrequencyDictionary,
    path: P,
    format: SnapshotFormat,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = DictionarySnapshot::from_dictionary(dictionary).encode(format)?;
    fs::write(path, bytes).map_err(|e| KeyspellError::from_io_at(e, path))?;

    debug!(
        "Saved {:?} snapshot with {} words to {}",
        format,
        dictionary.len(),
        path.display()
    );
    Ok(())
}

/// Load a full dictionary from `path`. The format comes from the extension,
/// or from the file header when the extension is not a known one.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<FrequencyDictionary> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| KeyspellError::from_io_at(e, path))?;

    let format = SnapshotFormat::from_path(path)
        .or_else(|| SnapshotFormat::sniff(&bytes))
        .unwrap_or(SnapshotFormat::Json);
    decode_dictionary(&bytes, format, path)
}

/// Load a full dictionary from `path` in an explicit format.
pub fn load_snapshot_as<P: AsRef<Path>>(path: P, format: SnapshotFormat) -> Result<FrequencyDictionary> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| KeyspellError::from_io_at(e, path))?;
    decode_dictionary(&bytes, format, path)
}

fn decode_dictionary(bytes: &[u8], format: SnapshotFormat, path: &Path) -> Result<FrequencyDictionary> {
    let dictionary = DictionarySnapshot::decode(bytes, format)?.into_dictionary()?;
    debug!(
        "Loaded {:?} snapshot with {} words from {}",
        format,
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}
