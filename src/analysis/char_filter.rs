//! Char filters that pre-process text before it is tokenized.
//!
//! # Examples
//!
//! ```
//! use keyspell::analysis::char_filter::{CharFilter, PunctuationCharFilter};
//!
//! let filter = PunctuationCharFilter::new();
//! assert_eq!(filter.filter("(hello), world!"), "hello world");
//! ```

/// Punctuation that never occurs inside a legitimate word.
///
/// `&`, `$`, `%`, `-`, `'` and `.` are deliberately absent: they are either
/// part of words ("don't", "e-mail", "50%") or handled later by the tokenizer.
pub const STRIPPED_PUNCTUATION: [char; 24] = [
    '#', '"', '(', ')', '{', '}', ',', '=', '+', '|', '<', '>', '[', ']', '_', '!', '@', '^', '*',
    '?', '~', '`', '/', '\\',
];

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// Removes every character in [`STRIPPED_PUNCTUATION`].
#[derive(Clone, Debug, Default)]
pub struct PunctuationCharFilter;

impl PunctuationCharFilter {
    /// Create a new punctuation filter.
    pub fn new() -> Self {
        PunctuationCharFilter
    }

    /// Whether `ch` is removed by this filter.
    pub fn is_stripped(ch: char) -> bool {
        STRIPPED_PUNCTUATION.contains(&ch)
    }
}

impl CharFilter for PunctuationCharFilter {
    fn filter(&self, input: &str) -> String {
        input.chars().filter(|&c| !Self::is_stripped(c)).collect()
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
