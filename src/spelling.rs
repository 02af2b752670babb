//! Spelling correction for single words.
//!
//! This module builds word-frequency dictionaries from raw text, persists
//! them as snapshots, and ranks dictionary words against a misspelled query
//! with a keyboard-aware edit distance.

pub mod corrector;
pub mod dictionary;
pub mod levenshtein;
pub mod snapshot;
pub mod source;
pub mod typo_patterns;

// Re-export commonly used types
pub use corrector::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use snapshot::*;
pub use source::*;
pub use typo_patterns::*;
