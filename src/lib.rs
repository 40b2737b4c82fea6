//! Text preparation for MELD sentiment classification.
//!
//! This crate stitches the cleaning, vocabulary and embedding stages together
//! so callers can go from raw utterance rows to model inputs through a single
//! [`Preprocessor`]:
//!
//! 1. [`Preprocessor::prepare`] cleans every utterance, maps every sentiment
//!    category, and drops rows that fail either step with a [`DropReport`].
//! 2. [`Preprocessor::build_vocabulary`] freezes a [`Vocabulary`] over the
//!    training split, reused unchanged for dev and test.
//! 3. [`Preprocessor::encode`] yields an [`EncodedDataset`];
//!    [`Preprocessor::vectorize`] yields a [`FeatureMatrix`] from an injected
//!    [`EmbeddingTable`].
//!
//! ```rust
//! use std::sync::Arc;
//! use meld_prep::{EmbeddingTable, Preprocessor, SentenceVectorizer, StopWords, TextCleaner, UtteranceRow};
//!
//! let stop_words: StopWords = ["i", "am", "so"].into_iter().collect();
//! let pre = Preprocessor::new(TextCleaner::new(stop_words));
//!
//! let train = pre.prepare("train", &[UtteranceRow::new("dia0_utt0", "I am SO happy!!", "positive")]);
//! assert_eq!(train.rows[0].text.as_str(), "happy!!");
//! assert_eq!(train.rows[0].label.class_id(), 2);
//!
//! let table = EmbeddingTable::from_pairs(2, [("happy", [0.1f32, 0.2])]).unwrap();
//! let features = pre.vectorize(&train, &SentenceVectorizer::new(Arc::new(table)));
//! assert_eq!(features.rows()[0], vec![0.1, 0.2]);
//! ```

mod config;
mod dataset;
mod error;
mod label;
mod metrics;
mod pipeline;

pub use cleaner::{
    latin1_to_cp1252, CleanedText, CleanerConfig, CleanerError, StopWords, TextCleaner, Tokenizer,
};
pub use embed::{
    EmbeddingError, EmbeddingTable, SentenceVectorizer, VectorizeStats, VectorizerConfig,
};
pub use vocab::{pad_batch, PaddedBatch, VocabError, Vocabulary, VocabularySnapshot, PAD_ID, PAD_TOKEN};

pub use crate::config::{
    ConfigLoadError, EmbeddingsYamlConfig, PipelineYamlConfig, PrepConfig, VocabularyYamlConfig,
};
pub use crate::dataset::{feature_columns, EncodedDataset, FeatureMatrix};
pub use crate::error::PipelineError;
pub use crate::label::{map_label, SentimentLabel};
pub use crate::metrics::{DropReason, PipelineMetrics};
pub use crate::pipeline::{
    ensure_same_tokenizer, DropReport, PreparedRow, PreparedSplit, Preprocessor, RowOutcome,
    UtteranceRow,
};

use std::sync::Arc;

use tracing::{info, warn};

/// Loads the embedding table named in the config and checks its dimension.
pub fn load_embeddings(config: &EmbeddingsYamlConfig) -> Result<Arc<EmbeddingTable>, PipelineError> {
    let table = EmbeddingTable::from_path(&config.path)?;
    if let Some(expected) = config.expected_dim {
        if table.dim() != expected {
            warn!(
                path = %config.path.display(),
                expected,
                found = table.dim(),
                "embedding_dimension_mismatch"
            );
            return Err(PipelineError::DimensionMismatch {
                expected,
                found: table.dim(),
            });
        }
    }
    info!(
        path = %config.path.display(),
        tokens = table.len(),
        dim = table.dim(),
        "embeddings_loaded"
    );
    Ok(Arc::new(table))
}
