use thiserror::Error;

/// Errors raised while setting up a cleaner.
///
/// Cleaning itself never fails; an utterance that filters down to nothing is
/// reported as `None` by [`TextCleaner::clean`](crate::TextCleaner::clean).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CleanerError {
    #[error("invalid cleaner configuration: {0}")]
    InvalidConfig(String),
    #[error("no built-in stop-word list for language {0:?}")]
    UnsupportedLanguage(String),
}
