//! Word-frequency dictionaries built from raw text.
//!
//! A corpus yields a *full* [`FrequencyDictionary`] holding every observed
//! token. The full map is what gets persisted as a snapshot; correction runs
//! against the *filtered* view, which keeps only words seen at least
//! [`DEFAULT_MIN_FREQUENCY`] times. Rare words are mostly proper nouns,
//! typos and noise, none of which should be offered as corrections.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use ahash::RandomState;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::{CorpusTokenizer, Tokenizer};
use crate::error::{KeyspellError, Result};
use crate::spelling::snapshot::{DEFAULT_SNAPSHOT_NAME, SnapshotFormat, save_snapshot_as};

/// Minimum count for a word to be offered as a correction.
pub const DEFAULT_MIN_FREQUENCY: u64 = 10;

/// Word counts keyed by normalized word.
pub type WordCounts = HashMap<String, u64, RandomState>;

/// A mapping from normalized word to the number of times it was observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyDictionary {
    /// Words and their frequencies
    words: WordCounts,
    /// Sum of all frequencies
    total_count: u64,
}

impl FrequencyDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        FrequencyDictionary {
            words: WordCounts::default(),
            total_count: 0,
        }
    }

    /// Build a dictionary from `(word, count)` pairs. Later duplicates
    /// replace earlier ones.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut dictionary = FrequencyDictionary::new();
        for (word, count) in entries {
            dictionary.set_frequency(word, count);
        }
        dictionary
    }

    /// Set the frequency of a word, replacing any previous count.
    ///
    /// The running total saturates at `u64::MAX` instead of wrapping.
    pub fn set_frequency<S: Into<String>>(&mut self, word: S, frequency: u64) {
        let old = self.words.insert(word.into(), frequency).unwrap_or(0);
        self.total_count = self.total_count.saturating_sub(old).saturating_add(frequency);
    }

    /// Increment the frequency of a word by 1, inserting it if absent.
    pub fn increment(&mut self, word: &str) {
        match self.words.get_mut(word) {
            Some(count) => *count = count.saturating_add(1),
            None => {
                self.words.insert(word.to_string(), 1);
            }
        }
        self.total_count = self.total_count.saturating_add(1);
    }

    /// Check if a word exists in the dictionary, exactly as written.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Get the frequency of a word, or 0 if it was never observed.
    pub fn frequency(&self, word: &str) -> u64 {
        self.words.get(word).copied().unwrap_or(0)
    }

    /// Get all words in the dictionary.
    pub fn words(&self) -> &WordCounts {
        &self.words
    }

    /// Get the total number of unique words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the total frequency count.
    pub fn total_frequency(&self) -> u64 {
        self.total_count
    }

    /// Entries sorted by count descending, then word descending.
    ///
    /// The order only makes output reproducible; correction ignores it.
    pub fn sorted_entries(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .words
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        entries.sort_by(|a, b| compare_entries(a, b));
        entries
    }

    /// Get the most frequent words in the dictionary.
    pub fn most_frequent_words(&self, limit: usize) -> Vec<(String, u64)> {
        let mut top: Vec<(String, u64)> = self
            .sorted_entries()
            .into_iter()
            .map(|(word, count)| (word.to_string(), count))
            .collect();
        top.truncate(limit);
        top
    }

    /// The view of this dictionary holding only words seen at least
    /// `min_frequency` times. Counts are carried over unchanged.
    pub fn filtered(&self, min_frequency: u64) -> FrequencyDictionary {
        FrequencyDictionary::from_entries(
            self.words
                .iter()
                .filter(|&(_, &count)| count >= min_frequency)
                .map(|(word, &count)| (word.clone(), count)),
        )
    }
}

fn compare_entries(a: &(&str, u64), b: &(&str, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| b.0.cmp(a.0))
}

/// Configuration for dictionary building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Minimum frequency for a word to survive filtering.
    pub min_frequency: u64,
    /// Where a freshly counted corpus is persisted, if anywhere.
    pub snapshot_path: Option<PathBuf>,
    /// Encoding of the persisted snapshot. `None` lets the extension of
    /// `snapshot_path` decide, falling back to binary.
    pub snapshot_format: Option<SnapshotFormat>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            min_frequency: DEFAULT_MIN_FREQUENCY,
            snapshot_path: Some(PathBuf::from(DEFAULT_SNAPSHOT_NAME)),
            snapshot_format: None,
        }
    }
}

/// Counts corpus tokens into a [`FrequencyDictionary`].
#[derive(Debug, Clone, Default)]
pub struct DictionaryBuilder {
    tokenizer: CorpusTokenizer,
    config: DictionaryConfig,
}

impl DictionaryBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(DictionaryConfig::default())
    }

    /// Create a builder with a custom configuration.
    pub fn with_config(config: DictionaryConfig) -> Self {
        DictionaryBuilder {
            tokenizer: CorpusTokenizer::new(),
            config,
        }
    }

    /// Get the builder configuration.
    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    /// Count every token in `lines` into a full dictionary.
    pub fn count_lines<I, S>(&self, lines: I) -> FrequencyDictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = FrequencyDictionary::new();
        for line in lines {
            for token in self.tokenizer.tokenize(line.as_ref()) {
                dictionary.increment(&token);
            }
        }
        dictionary
    }

    /// Count every token read from `reader` into a full dictionary.
    pub fn count_reader<R: BufRead>(&self, reader: R) -> Result<FrequencyDictionary> {
        let mut dictionary = FrequencyDictionary::new();
        for line in reader.lines() {
            let line = line?;
            for token in self.tokenizer.tokenize(&line) {
                dictionary.increment(&token);
            }
        }
        Ok(dictionary)
    }

    /// Count every token of the corpus file at `path` into a full dictionary.
    pub fn count_file<P: AsRef<Path>>(&self, path: P) -> Result<FrequencyDictionary> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| KeyspellError::from_io_at(e, path))?;
        let dictionary = self.count_reader(BufReader::new(file))?;

        debug!(
            "Counted {} tokens ({} unique) in {}",
            dictionary.total_frequency(),
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Count the corpus at `path`, persist the full dictionary to the
    /// configured snapshot path, and return the filtered dictionary.
    pub fn build<P: AsRef<Path>>(&self, path: P) -> Result<FrequencyDictionary> {
        let snapshot = match &self.config.snapshot_path {
            Some(snapshot_path) => Some((
                snapshot_path,
                SnapshotFormat::resolve(snapshot_path, self.config.snapshot_format)?,
            )),
            None => None,
        };
        let full = self.count_file(path)?;

        if let Some((snapshot_path, format)) = snapshot {
            save_snapshot_as(&full, snapshot_path, format)?;
            info!(
                "Written dictionary of {} word counts to {}",
                full.len(),
                snapshot_path.display()
            );
        }

        let filtered = full.filtered(self.config.min_frequency);
        info!(
            "Kept {} of {} words seen at least {} times",
            filtered.len(),
            full.len(),
            self.config.min_frequency
        );
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_dictionary_basic_operations() {
        let mut dict = FrequencyDictionary::new();

        assert!(!dict.contains("hello"));
        assert_eq!(dict.frequency("hello"), 0);
        assert!(dict.is_empty());

        dict.set_frequency("hello", 5);
        assert!(dict.contains("hello"));
        assert_eq!(dict.frequency("hello"), 5);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.total_frequency(), 5);

        dict.increment("hello");
        assert_eq!(dict.frequency("hello"), 6);
        assert_eq!(dict.total_frequency(), 6);

        dict.set_frequency("world", 3);
        dict.set_frequency("hello", 1);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.total_frequency(), 4);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let dict = FrequencyDictionary::from_entries([("hello", 3)]);
        assert!(dict.contains("hello"));
        assert!(!dict.contains("Hello"));
    }

    #[test]
    fn test_count_lines() {
        let builder = DictionaryBuilder::new();
        let dict = builder.count_lines(["the cat sat. the cat ran."]);

        assert_eq!(dict.len(), 4);
        assert_eq!(dict.frequency("the"), 2);
        assert_eq!(dict.frequency("cat"), 2);
        assert_eq!(dict.frequency("sat"), 1);
        assert_eq!(dict.frequency("ran"), 1);
        assert_eq!(dict.total_frequency(), 6);
    }

    #[test]
    fn test_count_reader_matches_count_lines() {
        let text = "Dr. Who met Mr. Smith.\nThe Doctor (Dr. Who) left!\n";
        let builder = DictionaryBuilder::new();

        let from_reader = builder.count_reader(Cursor::new(text)).unwrap();
        let from_lines = builder.count_lines(text.lines());

        assert_eq!(from_reader, from_lines);
        assert_eq!(from_reader.frequency("dr."), 2);
        assert_eq!(from_reader.frequency("who"), 2);
        assert_eq!(from_reader.frequency("smith"), 1);
    }

    #[test]
    fn test_sorted_entries() {
        let dict = FrequencyDictionary::from_entries([
            ("apple", 3),
            ("pear", 5),
            ("fig", 3),
            ("kiwi", 1),
        ]);

        assert_eq!(
            dict.sorted_entries(),
            vec![("pear", 5), ("fig", 3), ("apple", 3), ("kiwi", 1)]
        );
    }

    #[test]
    fn test_most_frequent_words() {
        let dict = FrequencyDictionary::from_entries([("common", 100), ("rare", 1), ("medium", 50)]);

        let top_words = dict.most_frequent_words(2);
        assert_eq!(top_words.len(), 2);
        assert_eq!(top_words[0], ("common".to_string(), 100));
        assert_eq!(top_words[1], ("medium".to_string(), 50));
    }

    #[test]
    fn test_filtered_view() {
        let dict = FrequencyDictionary::from_entries([("common", 100), ("rare", 1), ("edge", 10)]);
        let filtered = dict.filtered(DEFAULT_MIN_FREQUENCY);

        assert_eq!(filtered.len(), 2);
        assert!(!filtered.contains("rare"));
        for (word, &count) in filtered.words() {
            assert!(count >= DEFAULT_MIN_FREQUENCY);
            assert_eq!(dict.frequency(word), count);
        }
        assert_eq!(filtered.total_frequency(), 110);
    }

    #[test]
    fn test_count_missing_file() {
        let dir = tempdir().unwrap();
        let result = DictionaryBuilder::new().count_file(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(KeyspellError::NotFound(_))));
    }

    #[test]
    fn test_build_persists_full_and_returns_filtered() {
        let dir = tempdir().unwrap();
        let snapshot_path = dir.path().join("words.bin");

        let mut corpus = NamedTempFile::new().unwrap();
        for _ in 0..10 {
            writeln!(corpus, "spelling is fun.").unwrap();
        }
        writeln!(corpus, "rarely seen").unwrap();
        corpus.flush().unwrap();

        let builder = DictionaryBuilder::with_config(DictionaryConfig {
            min_frequency: 10,
            snapshot_path: Some(snapshot_path.clone()),
            ..Default::default()
        });
        let filtered = builder.build(corpus.path()).unwrap();

        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered.frequency("spelling"), 10);
        assert!(!filtered.contains("rarely"));

        let persisted = crate::spelling::snapshot::load_snapshot(&snapshot_path).unwrap();
        assert_eq!(persisted.len(), 5);
        assert_eq!(persisted.frequency("rarely"), 1);
        assert_eq!(persisted.filtered(10), filtered);
    }

    #[test]
    fn test_build_without_snapshot() {
        let mut corpus = NamedTempFile::new().unwrap();
        writeln!(corpus, "word").unwrap();
        corpus.flush().unwrap();

        let builder = DictionaryBuilder::with_config(DictionaryConfig {
            min_frequency: 1,
            snapshot_path: None,
            ..Default::default()
        });
        let dict = builder.build(corpus.path()).unwrap();
        assert_eq!(dict.frequency("word"), 1);
    }

    #[test]
    fn test_build_honours_snapshot_format() {
        let dir = tempfile::tempdir().unwrap();
        let mut corpus = NamedTempFile::new().unwrap();
        writeln!(corpus, "some words. some more words.").unwrap();
        corpus.flush().unwrap();

        let snapshot_path = dir.path().join("words.dat");
        let builder = DictionaryBuilder::with_config(DictionaryConfig {
            min_frequency: 1,
            snapshot_path: Some(snapshot_path.clone()),
            snapshot_format: Some(SnapshotFormat::Json),
        });
        builder.build(corpus.path()).unwrap();

        let text = std::fs::read_to_string(&snapshot_path).unwrap();
        assert!(text.trim_start().starts_with('{'));
        let persisted = crate::spelling::snapshot::load_snapshot(&snapshot_path).unwrap();
        assert_eq!(persisted.frequency("some"), 2);

        let conflicting = DictionaryBuilder::with_config(DictionaryConfig {
            min_frequency: 1,
            snapshot_path: Some(dir.path().join("words.bin")),
            snapshot_format: Some(SnapshotFormat::Json),
        });
        assert!(matches!(
            conflicting.build(corpus.path()),
            Err(KeyspellError::InvalidInput(_))
        ));
        assert!(!dir.path().join("words.bin").exists());
    }

    #[test]
    fn test_counts_saturate_instead_of_overflowing() {
        let mut dict = FrequencyDictionary::new();
        dict.set_frequency("huge", u64::MAX);
        dict.increment("huge");
        dict.increment("small");

        assert_eq!(dict.frequency("huge"), u64::MAX);
        assert_eq!(dict.frequency("small"), 1);
        assert_eq!(dict.total_frequency(), u64::MAX);
    }
}
