//! Configuration types for the utterance cleaner.
//!
//! [`CleanerConfig`] controls the optional steps of [`TextCleaner`](crate::TextCleaner):
//! which stop-word list is loaded, whether the legacy code-page round trip
//! runs, and the minimum token length that survives filtering.
//!
//! # Examples
//!
//! ```rust
//! use cleaner::CleanerConfig;
//!
//! let config = CleanerConfig::default();
//! assert_eq!(config.stop_word_language, "en");
//! assert_eq!(config.min_token_len, 2);
//! assert!(!config.legacy_recode);
//! assert!(!config.normalize_unicode);
//! ```
//!
//! ## Keeping two-letter tokens out of the filter
//!
//! ```rust
//! use cleaner::CleanerConfig;
//!
//! // "ok" and "no" are kept once the threshold drops to 1.
//! let config = CleanerConfig {
//!     min_token_len: 1,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CleanerError;

/// Configuration for [`TextCleaner`](crate::TextCleaner).
///
/// Serializable so it can live in a YAML pipeline config:
///
/// ```yaml
/// stop_word_language: "en"
/// extra_stop_words: ["yeah", "uh"]
/// legacy_recode: false
/// normalize_unicode: false
/// min_token_len: 2
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CleanerConfig {
    /// Built-in stop-word list to load. `"en"` for English, `"none"` for an
    /// empty list.
    pub stop_word_language: String,

    /// Additional stop words merged into the built-in list. Matched after
    /// lowercasing and character filtering, so entries should be lowercase.
    pub extra_stop_words: Vec<String>,

    /// Re-read the lowercased text as ISO-8859-1 bytes decoded through
    /// Windows-1252 before filtering. Inputs that cannot make the round trip
    /// are kept unchanged.
    pub legacy_recode: bool,

    /// Apply Unicode NFKC normalization before lowercasing, so compatibility
    /// forms such as full-width letters or ligatures survive the ASCII filter.
    pub normalize_unicode: bool,

    /// Tokens shorter than this many characters are dropped. The default of 2
    /// removes single characters only.
    pub min_token_len: usize,
}

impl CleanerConfig {
    /// Checks the config for values the cleaner cannot honour.
    pub fn validate(&self) -> Result<(), CleanerError> {
        if self.min_token_len == 0 {
            return Err(CleanerError::InvalidConfig(
                "min_token_len must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            stop_word_language: "en".to_string(),
            extra_stop_words: Vec::new(),
            legacy_recode: false,
            normalize_unicode: false,
            min_token_len: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_min_token_len_rejected() {
        let cfg = CleanerConfig {
            min_token_len: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(CleanerError::InvalidConfig(_))));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: CleanerConfig =
            serde_json::from_str(r#"{"legacy_recode": true}"#).expect("parse");
        assert!(cfg.legacy_recode);
        assert_eq!(cfg.min_token_len, 2);
        assert_eq!(cfg.stop_word_language, "en");
    }
}
