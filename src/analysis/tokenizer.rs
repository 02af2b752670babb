//! Corpus tokenization.
//!
//! A [`Tokenizer`] turns one line of text into a lazy [`TokenStream`] of
//! normalized words. The stream borrows the line, so calling `tokenize`
//! again on the same input restarts it.
//!
//! # Examples
//!
//! ```
//! use keyspell::analysis::tokenizer::{CorpusTokenizer, Tokenizer};
//!
//! let tokenizer = CorpusTokenizer::new();
//! let tokens: Vec<String> = tokenizer.tokenize("Dr. Smith (and Mr. Jones) left.").collect();
//! assert_eq!(tokens, vec!["dr.", "smith", "and", "mr.", "jones", "left"]);
//! ```

use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::analysis::char_filter::{CharFilter, PunctuationCharFilter};

/// Boxed iterator of normalized word tokens.
pub type TokenStream<'a> = Box<dyn Iterator<Item = String> + 'a>;

lazy_static! {
    /// Abbreviations whose trailing period is part of the word.
    ///
    /// Matching is exact and case-sensitive against the token as written.
    pub static ref ABBREVIATIONS: HashSet<&'static str> = [
        "Co.", "Dr.", "Jan.", "Feb.", "Mr.", "Ms.", "Mrs.", "Inc.", "Mar.", "Apr.", "Aug.",
        "Sept.", "Oct.", "Nov.", "Dec.",
    ]
    .into_iter()
    .collect();
}

/// Trait for tokenizers that convert a line of text into word tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a lazy stream of tokens.
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a>;

    /// Get the name of this tokenizer.
    fn name(&self) -> &'static str;
}

/// Whitespace tokenizer with punctuation stripping, lowercasing and
/// abbreviation-aware period removal.
#[derive(Clone, Debug, Default)]
pub struct CorpusTokenizer {
    char_filter: PunctuationCharFilter,
}

impl CorpusTokenizer {
    /// Create a new corpus tokenizer.
    pub fn new() -> Self {
        CorpusTokenizer {
            char_filter: PunctuationCharFilter::new(),
        }
    }

    /// Normalize a single whitespace-delimited piece.
    ///
    /// Returns `None` when nothing word-like is left, e.g. for `"()"` after
    /// punctuation stripping or `"..."` after period removal.
    pub fn normalize(&self, piece: &str) -> Option<String> {
        let filtered = self.char_filter.filter(piece);
        let trimmed = filtered.trim();

        let word = if ABBREVIATIONS.contains(trimmed) {
            trimmed.to_lowercase()
        } else {
            trimmed.to_lowercase().replace('.', "")
        };

        if word.is_empty() { None } else { Some(word) }
    }
}

impl Tokenizer for CorpusTokenizer {
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        // Stripped punctuation never includes whitespace, so splitting first
        // yields the same pieces as filtering the whole line first.
        Box::new(
            text.split_whitespace()
                .filter_map(move |piece| self.normalize(piece)),
        )
    }

    fn name(&self) -> &'static str {
        "corpus"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        CorpusTokenizer::new().tokenize(text).collect()
    }

    #[test]
    fn test_lowercases_and_splits() {
        assert_eq!(tokens("The  Quick\tBrown\nFox"), vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn test_strips_trailing_periods() {
        assert_eq!(
            tokens("the cat sat. the cat ran."),
            vec!["the", "cat", "sat", "the", "cat", "ran"]
        );
        assert_eq!(tokens("U.S.A."), vec!["usa"]);
    }

    #[test]
    fn test_keeps_abbreviation_periods() {
        assert_eq!(tokens("Dr. Who"), vec!["dr.", "who"]);
        assert_eq!(tokens("Sept. 5th, Acme Inc."), vec!["sept.", "5th", "acme", "inc."]);
    }

    #[test]
    fn test_abbreviations_are_case_sensitive() {
        assert_eq!(tokens("dr. DR."), vec!["dr", "dr"]);
    }

    #[test]
    fn test_abbreviation_behind_stripped_punctuation() {
        assert_eq!(tokens("(Mrs.)"), vec!["mrs."]);
    }

    #[test]
    fn test_keeps_apostrophes_and_symbols() {
        assert_eq!(
            tokens("Don't re-run AT&T's $5 50%!"),
            vec!["don't", "re-run", "at&t's", "$5", "50%"]
        );
    }

    #[test]
    fn test_drops_empty_tokens() {
        assert_eq!(tokens("... -- ( ) ok"), vec!["--", "ok"]);
        assert_eq!(CorpusTokenizer::new().normalize("()"), None);
        assert_eq!(CorpusTokenizer::new().normalize("..."), None);
        assert!(tokens("   ").is_empty());
    }

    #[test]
    fn test_stream_is_restartable() {
        let tokenizer = CorpusTokenizer::new();
        let line = "Hello world.";
        let first: Vec<String> = tokenizer.tokenize(line).collect();
        let second: Vec<String> = tokenizer.tokenize(line).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(CorpusTokenizer::new().name(), "corpus");
    }
}
