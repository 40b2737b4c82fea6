use std::io;
use thiserror::Error;

/// Errors surfaced while building or loading an [`EmbeddingTable`](crate::EmbeddingTable).
///
/// Lookups and vectorizing never fail; a missing token is simply skipped.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Reading the embedding source failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// A vector component could not be parsed as a float.
    #[error("line {line}: invalid component {value:?} for token {token:?}")]
    Parse {
        line: usize,
        token: String,
        value: String,
    },
    /// A vector did not have the table's dimension.
    #[error("line {line}: token {token:?} has {found} components, expected {expected}")]
    DimensionMismatch {
        line: usize,
        token: String,
        expected: usize,
        found: usize,
    },
    /// The table dimension would be zero.
    #[error("embedding dimension must be >= 1")]
    ZeroDimension,
    /// The source contained no vectors.
    #[error("embedding source contained no vectors")]
    Empty,
}

impl Clone for EmbeddingError {
    fn clone(&self) -> Self {
        match self {
            EmbeddingError::Io(err) => EmbeddingError::Io(io::Error::new(err.kind(), err.to_string())),
            EmbeddingError::Parse { line, token, value } => EmbeddingError::Parse {
                line: *line,
                token: token.clone(),
                value: value.clone(),
            },
            EmbeddingError::DimensionMismatch {
                line,
                token,
                expected,
                found,
            } => EmbeddingError::DimensionMismatch {
                line: *line,
                token: token.clone(),
                expected: *expected,
                found: *found,
            },
            EmbeddingError::ZeroDimension => EmbeddingError::ZeroDimension,
            EmbeddingError::Empty => EmbeddingError::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_message() {
        let err = EmbeddingError::DimensionMismatch {
            line: 3,
            token: "joey".into(),
            expected: 100,
            found: 99,
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("expected 100"));
    }

    #[test]
    fn io_error_clone_keeps_kind() {
        let err: EmbeddingError = io::Error::new(io::ErrorKind::NotFound, "glove.txt").into();
        match err.clone() {
            EmbeddingError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected clone {other:?}"),
        }
    }
}
