//! The cleaned-utterance type.
//!
//! A [`CleanedText`] can only be produced by
//! [`TextCleaner::clean`](crate::TextCleaner::clean), so holding one means:
//!
//! - it is non-empty
//! - every char is in `[a-z0-9 .,!?-]`
//! - tokens are separated by exactly one ASCII space
//! - no stop word and no token below the configured minimum length remains
//!
//! ```rust
//! use cleaner::{StopWords, TextCleaner};
//!
//! let cleaner = TextCleaner::new(StopWords::english());
//! let text = cleaner.clean("Oh my God, THAT was AMAZING!").unwrap();
//! assert_eq!(text.as_str(), "oh god, amazing!");
//! assert_eq!(text.tokens().count(), 3);
//! ```

use std::fmt;

use serde::Serialize;

/// Non-empty, lowercase, filtered utterance text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CleanedText(String);

impl CleanedText {
    /// Wraps a string that already satisfies the cleaned-text invariants.
    pub(crate) fn new_unchecked(text: String) -> Self {
        debug_assert!(!text.is_empty());
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Whitespace-separated tokens, in order.
    pub fn tokens(&self) -> std::str::SplitWhitespace<'_> {
        self.0.split_whitespace()
    }
}

impl AsRef<str> for CleanedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CleanedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CleanedText> for String {
    fn from(value: CleanedText) -> Self {
        value.0
    }
}
