use thiserror::Error;

/// Errors raised when restoring a vocabulary from a snapshot.
///
/// Building and encoding never fail; these only guard deserialized data
/// against ids that would break the reserved-padding invariant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VocabError {
    #[error("vocabulary snapshot must start with the padding token {expected:?}, found {found:?}")]
    MissingPadToken { expected: String, found: Option<String> },
    #[error("vocabulary snapshot repeats token {token:?} (ids {first} and {second})")]
    DuplicateToken {
        token: String,
        first: u32,
        second: u32,
    },
    #[error("vocabulary snapshot fingerprint mismatch: expected {expected}, computed {computed}")]
    FingerprintMismatch { expected: String, computed: String },
    #[error("vocabulary has {0} entries, more than u32 ids can address")]
    TooLarge(usize),
}
