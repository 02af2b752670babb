//! # Keyspell
//!
//! A keyboard-aware spelling corrector for single words.
//!
//! ## Features
//!
//! - Word-frequency dictionaries counted from raw corpus text
//! - Binary and JSON dictionary snapshots
//! - Edit distance that charges less for slips onto neighbouring QWERTY keys
//! - Optional parallel dictionary scans
//!
//! ## Example
//!
//! ```
//! use keyspell::spelling::{DictionaryBuilder, SpellingCorrector};
//!
//! let corpus = "the world is wide. ".repeat(10);
//! let full = DictionaryBuilder::new().count_lines(corpus.lines());
//! let corrector = SpellingCorrector::new(full.filtered(10));
//!
//! let correction = corrector.correct("wprld").unwrap();
//! assert_eq!(correction.word(), "world");
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::config::KeyspellConfig;
    pub use crate::error::{KeyspellError, Result};
    pub use crate::spelling::{
        Correction, CorrectorConfig, DictionaryBuilder, DictionaryConfig, DictionarySource,
        FrequencyDictionary, SpellingCorrector, Suggestion,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
