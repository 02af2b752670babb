//! File-based configuration.
//!
//! Every field is optional in the JSON file; missing ones take their defaults.
//!
//! ```
//! use keyspell::config::KeyspellConfig;
//!
//! let config: KeyspellConfig =
//!     serde_json::from_str(r#"{ "corrector": { "max_distance": 1 } }"#).unwrap();
//! assert_eq!(config.corrector.max_distance, 1);
//! assert_eq!(config.dictionary.min_frequency, 10);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KeyspellError, Result};
use crate::spelling::corrector::CorrectorConfig;
use crate::spelling::dictionary::DictionaryConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyspellConfig {
    pub dictionary: DictionaryConfig,
    pub corrector: CorrectorConfig,
}

impl KeyspellConfig {
    /// Load configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| KeyspellError::from_io_at(e, path))?;
        Ok(serde_json::from_str(&text)?)
    }
}
