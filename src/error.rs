use thiserror::Error;

use cleaner::CleanerError;
use embed::EmbeddingError;
use vocab::VocabError;

use crate::config::ConfigLoadError;

/// Errors that can occur while setting up or running the preparation pipeline.
///
/// Row-level anomalies (filtered text, unknown labels, unknown tokens) are not
/// errors; they show up in [`DropReport`](crate::DropReport) instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("cleaner setup failed: {0}")]
    Cleaner(#[from] CleanerError),
    #[error("embedding table failed: {0}")]
    Embedding(#[from] EmbeddingError),
    #[error("vocabulary failure: {0}")]
    Vocab(#[from] VocabError),
    #[error("configuration failure: {0}")]
    Config(#[from] ConfigLoadError),
    #[error("vectorizer expects dimension {expected}, table has {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("vocabulary tokenizer {vocab:?} differs from vectorizer tokenizer {vectorizer:?}")]
    TokenizerMismatch {
        vocab: &'static str,
        vectorizer: &'static str,
    },
}
