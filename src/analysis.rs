//! Text analysis for dictionary building.
//!
//! Raw corpus lines pass through a [`char_filter::PunctuationCharFilter`] and
//! are then split and normalized by a [`tokenizer::CorpusTokenizer`] into the
//! lowercase word tokens counted by the dictionary builder.

pub mod char_filter;
pub mod tokenizer;
