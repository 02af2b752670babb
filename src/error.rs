//! Error types for the Keyspell library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`KeyspellError`] enum. None of these failures are transient, so callers
//! get no retry hints: a missing corpus stays missing and a corrupt snapshot
//! stays corrupt.
//!
//! # Examples
//!
//! ```
//! use keyspell::error::{KeyspellError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(KeyspellError::invalid_input("query word is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::Path;

use thiserror::Error;

/// The main error type for Keyspell operations.
#[derive(Error, Debug)]
pub enum KeyspellError {
    /// I/O errors other than a missing file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A corpus or snapshot path does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A snapshot could not be decoded into a word/count mapping.
    #[error("Format error: {0}")]
    Format(String),

    /// No dictionary word lies within the distance threshold.
    #[error("No suggestion: {0}")]
    NoSuggestion(String),

    /// The caller passed something unusable, such as an empty query word.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with KeyspellError.
pub type Result<T> = std::result::Result<T, KeyspellError>;

impl KeyspellError {
    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        KeyspellError::NotFound(msg.into())
    }

    /// Create a new format error.
    pub fn format<S: Into<String>>(msg: S) -> Self {
        KeyspellError::Format(msg.into())
    }

    /// Create a new no suggestion error.
    pub fn no_suggestion<S: Into<String>>(msg: S) -> Self {
        KeyspellError::NoSuggestion(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        KeyspellError::InvalidInput(msg.into())
    }

    /// Attach the offending path to an I/O error, turning a missing file
    /// into [`KeyspellError::NotFound`].
    pub fn from_io_at(err: io::Error, path: &Path) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            KeyspellError::NotFound(path.display().to_string())
        } else {
            KeyspellError::Io(err)
        }
    }
}
