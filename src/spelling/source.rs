//! Choosing between a raw corpus and a persisted snapshot.
//!
//! Correction needs a filtered [`FrequencyDictionary`], and either kind of
//! source can supply one. `.txt` files are corpora and `.bin`, `.dict` and
//! `.json` files are snapshots. Anything else is sniffed: a binary snapshot
//! header or a leading JSON object means snapshot, otherwise the file is read
//! as corpus text.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{KeyspellError, Result};
use crate::spelling::dictionary::{DictionaryBuilder, FrequencyDictionary};
use crate::spelling::snapshot::{SnapshotFormat, load_snapshot_as};

/// Bytes read from files of unknown type to tell snapshots from corpora.
const SNIFF_LEN: u64 = 64;

/// What a dictionary source file contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Line-oriented natural-language text
    Corpus,
    /// A persisted full dictionary
    Snapshot(SnapshotFormat),
}

/// A file that can supply a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionarySource {
    path: PathBuf,
    kind: SourceKind,
}

impl DictionarySource {
    /// Open `path` and detect its kind.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(KeyspellError::not_found(path.display().to_string()));
        }

        let kind = Self::detect(path)?;
        debug!("Detected {:?} source at {}", kind, path.display());

        Ok(DictionarySource {
            path: path.to_path_buf(),
            kind,
        })
    }

    /// Use `path` as a source of a known kind, skipping detection.
    pub fn with_kind<P: Into<PathBuf>>(path: P, kind: SourceKind) -> Self {
        DictionarySource {
            path: path.into(),
            kind,
        }
    }

    /// Detect the kind of the file at `path`.
    pub fn detect(path: &Path) -> Result<SourceKind> {
        let is_text = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        if is_text {
            return Ok(SourceKind::Corpus);
        }

        if let Some(format) = SnapshotFormat::from_path(path) {
            return Ok(SourceKind::Snapshot(format));
        }

        let mut header = Vec::with_capacity(SNIFF_LEN as usize);
        File::open(path)
            .map_err(|e| KeyspellError::from_io_at(e, path))?
            .take(SNIFF_LEN)
            .read_to_end(&mut header)?;

        Ok(SnapshotFormat::sniff(&header).map_or(SourceKind::Corpus, SourceKind::Snapshot))
    }

    /// Path of the source file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Detected kind of the source file.
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Load the full, unfiltered dictionary. Corpora are counted without
    /// writing a snapshot.
    pub fn load_full(&self, builder: &DictionaryBuilder) -> Result<FrequencyDictionary> {
        match self.kind {
            SourceKind::Corpus => builder.count_file(&self.path),
            SourceKind::Snapshot(format) => load_snapshot_as(&self.path, format),
        }
    }

    /// Load the filtered dictionary used for correction.
    ///
    /// A corpus is built through `builder`, which also persists its full
    /// counts when a snapshot path is configured. A snapshot is filtered with
    /// the builder's minimum frequency, so both routes agree for the same
    /// corpus.
    pub fn load(&self, builder: &DictionaryBuilder) -> Result<FrequencyDictionary> {
        match self.kind {
            SourceKind::Corpus => builder.build(&self.path),
            SourceKind::Snapshot(format) => {
                let full = load_snapshot_as(&self.path, format)?;
                Ok(full.filtered(builder.config().min_frequency))
            }
        }
    }
}
