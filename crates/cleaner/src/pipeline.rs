use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::config::CleanerConfig;
use crate::error::CleanerError;
use crate::recode::latin1_to_cp1252;
use crate::stopwords::StopWords;
use crate::text::CleanedText;

/// Normalizes raw utterances into [`CleanedText`].
///
/// Holds its stop-word set and config; cleaning is a pure function of those
/// and the input, so one cleaner can be shared across threads.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    stop_words: StopWords,
    config: CleanerConfig,
}

impl TextCleaner {
    /// Cleaner with the given stop words and default options.
    pub fn new(stop_words: StopWords) -> Self {
        Self {
            stop_words,
            config: CleanerConfig::default(),
        }
    }

    /// Cleaner with explicit stop words and options.
    pub fn with_config(stop_words: StopWords, config: CleanerConfig) -> Result<Self, CleanerError> {
        config.validate()?;
        Ok(Self { stop_words, config })
    }

    /// Builds the stop-word set named by the config (plus its extras).
    pub fn from_config(config: &CleanerConfig) -> Result<Self, CleanerError> {
        let mut stop_words = StopWords::for_language(&config.stop_word_language)?;
        stop_words.extend(config.extra_stop_words.iter().cloned());
        Self::with_config(stop_words, config.clone())
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Cleans one utterance.
    ///
    /// Returns `None` when nothing survives filtering; callers should drop the
    /// row rather than keep an empty string. Never panics.
    pub fn clean(&self, text: &str) -> Option<CleanedText> {
        // NFKC first so compatibility forms can still lowercase into ASCII.
        let normalized: Cow<str> = if self.config.normalize_unicode {
            Cow::Owned(text.nfkc().collect::<String>())
        } else {
            Cow::Borrowed(text)
        };

        let lowered = normalized.to_lowercase();

        let recoded: Cow<str> = if self.config.legacy_recode {
            latin1_to_cp1252(&lowered)
        } else {
            Cow::Borrowed(lowered.as_str())
        };

        let filtered: String = recoded.chars().filter(|&ch| is_kept_char(ch)).collect();

        let mut cleaned = String::with_capacity(filtered.len());
        for token in filtered.split_whitespace() {
            if token.len() < self.config.min_token_len || self.stop_words.contains(token) {
                continue;
            }
            if !cleaned.is_empty() {
                cleaned.push(' ');
            }
            cleaned.push_str(token);
        }

        if cleaned.is_empty() {
            None
        } else {
            Some(CleanedText::new_unchecked(cleaned))
        }
    }
}

/// Lowercase ASCII letters, digits, whitespace and `.,!?-` survive; everything
/// else is removed before tokenizing.
#[inline]
fn is_kept_char(ch: char) -> bool {
    ch.is_ascii_lowercase()
        || ch.is_ascii_digit()
        || ch.is_whitespace()
        || matches!(ch, '.' | ',' | '!' | '?' | '-')
}
