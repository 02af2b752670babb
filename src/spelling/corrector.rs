//! Single-word spelling correction.
//!
//! A query found verbatim in the dictionary is reported as correct without
//! scoring anything. Otherwise the lowercased query is scored against every
//! dictionary word with [`KeyboardMatcher`], candidates further away than
//! [`CorrectorConfig::max_distance`] are dropped, and the closest one wins.
//! Ties go to the more frequent word, then to the alphabetically smaller one,
//! so serial and parallel scans always agree.

use std::cmp::{Ordering, Reverse};

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{KeyspellError, Result};
use crate::spelling::dictionary::FrequencyDictionary;
use crate::spelling::levenshtein::KeyboardMatcher;

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Maximum edit distance for suggestions, regardless of word length.
    pub max_distance: usize,
    /// Maximum number of suggestions returned by [`SpellingCorrector::suggest`].
    pub max_suggestions: usize,
    /// Whether to scan the dictionary on the rayon thread pool.
    pub parallel: bool,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            max_distance: 2,
            max_suggestions: 5,
            parallel: false,
        }
    }
}

/// A candidate correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Keyboard distance from the query.
    pub distance: usize,
    /// Frequency of the suggested word in the dictionary.
    pub frequency: u64,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, distance: usize, frequency: u64) -> Self {
        Suggestion {
            word,
            distance,
            frequency,
        }
    }
}

// Better suggestions sort first.
impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.distance, Reverse(self.frequency), &self.word).cmp(&(
            other.distance,
            Reverse(other.frequency),
            &other.word,
        ))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Outcome of correcting one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Correction {
    /// The word is in the dictionary as written.
    Correct { word: String },
    /// The closest dictionary word.
    Suggested(Suggestion),
}

impl Correction {
    /// Whether the query was already correct.
    pub fn is_correct(&self) -> bool {
        matches!(self, Correction::Correct { .. })
    }

    /// The suggestion, if a correction was needed.
    pub fn suggestion(&self) -> Option<&Suggestion> {
        match self {
            Correction::Correct { .. } => None,
            Correction::Suggested(suggestion) => Some(suggestion),
        }
    }

    /// The word to use: the query itself when correct, else the suggestion.
    pub fn word(&self) -> &str {
        match self {
            Correction::Correct { word } => word,
            Correction::Suggested(suggestion) => &suggestion.word,
        }
    }
}

/// Main spelling corrector. Owns an immutable dictionary.
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    dictionary: FrequencyDictionary,
    config: CorrectorConfig,
}

impl SpellingCorrector {
    /// Create a new spelling corrector with the default configuration.
    pub fn new(dictionary: FrequencyDictionary) -> Self {
        Self::with_config(dictionary, CorrectorConfig::default())
    }

    /// Create a new spelling corrector with custom configuration.
    pub fn with_config(dictionary: FrequencyDictionary, config: CorrectorConfig) -> Self {
        SpellingCorrector { dictionary, config }
    }

    /// Get the corrector configuration.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Update the corrector configuration.
    pub fn set_config(&mut self, config: CorrectorConfig) {
        self.config = config;
    }

    /// Get the dictionary corrections are drawn from.
    pub fn dictionary(&self) -> &FrequencyDictionary {
        &self.dictionary
    }

    /// Check if a word is correctly spelled, i.e. present exactly as written.
    pub fn is_correct(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Correct a single word.
    ///
    /// Fails with [`KeyspellError::InvalidInput`] for an empty word and with
    /// [`KeyspellError::NoSuggestion`] when nothing is close enough.
    pub fn correct(&self, word: &str) -> Result<Correction> {
        validate_query(word)?;

        if self.is_correct(word) {
            return Ok(Correction::Correct {
                word: word.to_string(),
            });
        }

        let matcher = KeyboardMatcher::new(word.to_lowercase());
        let best = if self.config.parallel {
            self.dictionary
                .words()
                .par_iter()
                .filter_map(|(candidate, &frequency)| self.score(&matcher, candidate, frequency))
                .min()
        } else {
            self.dictionary
                .words()
                .iter()
                .filter_map(|(candidate, &frequency)| self.score(&matcher, candidate, frequency))
                .min()
        };

        match best {
            Some(suggestion) => {
                debug!(
                    "Best correction for {:?}: {:?} (distance {})",
                    word, suggestion.word, suggestion.distance
                );
                Ok(Correction::Suggested(suggestion))
            }
            None => Err(KeyspellError::no_suggestion(format!(
                "no word within distance {} of {:?}",
                self.config.max_distance, word
            ))),
        }
    }

    /// Get up to `max_suggestions` candidates for a word, best first.
    ///
    /// A correctly spelled word yields itself at distance 0. An empty list
    /// means nothing is close enough.
    pub fn suggest(&self, word: &str) -> Result<Vec<Suggestion>> {
        validate_query(word)?;

        if self.is_correct(word) {
            let frequency = self.dictionary.frequency(word);
            return Ok(vec![Suggestion::new(word.to_string(), 0, frequency)]);
        }

        let matcher = KeyboardMatcher::new(word.to_lowercase());
        let mut suggestions: Vec<Suggestion> = if self.config.parallel {
            self.dictionary
                .words()
                .par_iter()
                .filter_map(|(candidate, &frequency)| self.score(&matcher, candidate, frequency))
                .collect()
        } else {
            self.dictionary
                .words()
                .iter()
                .filter_map(|(candidate, &frequency)| self.score(&matcher, candidate, frequency))
                .collect()
        };

        debug!(
            "{} of {} words within distance {} of {:?}",
            suggestions.len(),
            self.dictionary.len(),
            self.config.max_distance,
            word
        );

        suggestions.sort_unstable();
        suggestions.truncate(self.config.max_suggestions);
        Ok(suggestions)
    }

    fn score(&self, matcher: &KeyboardMatcher, candidate: &str, frequency: u64) -> Option<Suggestion> {
        matcher
            .distance_threshold(candidate, self.config.max_distance)
            .map(|distance| Suggestion::new(candidate.to_string(), distance, frequency))
    }
}

fn validate_query(word: &str) -> Result<()> {
    if word.trim().is_empty() {
        return Err(KeyspellError::invalid_input("query word is empty"));
    }
    Ok(())
}
