//! Row filtering and dataset assembly.
//!
//! [`Preprocessor::prepare`] is the single place where rows leave the dataset.
//! A row is kept only when its utterance cleans to something and its sentiment
//! maps to a known label; everything else is counted in a [`DropReport`].
//! Vocabulary building, encoding and vectorizing then run over the kept rows
//! only, so labels and features can never drift apart.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn, Level};

use cleaner::{CleanedText, TextCleaner, Tokenizer};
use embed::SentenceVectorizer;
use vocab::Vocabulary;

use crate::config::PrepConfig;
use crate::dataset::{EncodedDataset, FeatureMatrix};
use crate::error::PipelineError;
use crate::label::SentimentLabel;
use crate::metrics::{DropReason, PipelineMetrics};

/// One raw input row: an utterance and its sentiment category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtteranceRow {
    /// Pass-through identifier, e.g. `dia3_utt7`.
    pub key: String,
    pub utterance: String,
    pub sentiment: String,
}

impl UtteranceRow {
    pub fn new(
        key: impl Into<String>,
        utterance: impl Into<String>,
        sentiment: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            utterance: utterance.into(),
            sentiment: sentiment.into(),
        }
    }

    /// MELD row key for a dialogue/utterance pair.
    pub fn file_key(dialogue_id: u32, utterance_id: u32) -> String {
        format!("dia{dialogue_id}_utt{utterance_id}")
    }
}

/// A row that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedRow {
    pub key: String,
    pub text: CleanedText,
    pub label: SentimentLabel,
}

/// What happened to a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Kept(PreparedRow),
    /// Cleaning produced no text.
    FilteredOut,
    /// Sentiment category outside the known set.
    UnknownLabel { category: String },
}

impl RowOutcome {
    fn drop_reason(&self) -> Option<DropReason> {
        match self {
            RowOutcome::Kept(_) => None,
            RowOutcome::FilteredOut => Some(DropReason::FilteredOut),
            RowOutcome::UnknownLabel { .. } => Some(DropReason::UnknownLabel),
        }
    }
}

/// Per-split row accounting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DropReport {
    pub total: usize,
    pub kept: usize,
    pub filtered_out: usize,
    pub unknown_label: usize,
}

impl DropReport {
    pub fn dropped(&self) -> usize {
        self.filtered_out + self.unknown_label
    }

    fn count(&mut self, outcome: &RowOutcome) {
        self.total += 1;
        match outcome {
            RowOutcome::Kept(_) => self.kept += 1,
            RowOutcome::FilteredOut => self.filtered_out += 1,
            RowOutcome::UnknownLabel { .. } => self.unknown_label += 1,
        }
    }
}

/// Kept rows of one split, in input order, plus what was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedSplit {
    pub name: String,
    pub rows: Vec<PreparedRow>,
    pub report: DropReport,
}

impl PreparedSplit {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(|row| row.text.as_str())
    }

    fn keys_and_labels(&self) -> (Vec<String>, Vec<u8>) {
        self.rows
            .iter()
            .map(|row| (row.key.clone(), row.label.class_id()))
            .unzip()
    }
}

/// Turns raw rows into cleaned, labelled rows and then into model inputs.
#[derive(Clone)]
pub struct Preprocessor {
    cleaner: TextCleaner,
    use_parallel: bool,
    metrics: Option<Arc<dyn PipelineMetrics>>,
}

impl fmt::Debug for Preprocessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preprocessor")
            .field("cleaner", &self.cleaner)
            .field("use_parallel", &self.use_parallel)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}

impl Preprocessor {
    pub fn new(cleaner: TextCleaner) -> Self {
        Self {
            cleaner,
            use_parallel: false,
            metrics: None,
        }
    }

    /// Builds the cleaner from `config.cleaner` and applies the pipeline options.
    pub fn from_config(config: &PrepConfig) -> Result<Self, PipelineError> {
        let cleaner = TextCleaner::from_config(&config.cleaner)?;
        Ok(Self::new(cleaner).with_parallel(config.pipeline.use_parallel))
    }

    /// Run per-row work on the rayon pool. Output order is unchanged.
    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<dyn PipelineMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn cleaner(&self) -> &TextCleaner {
        &self.cleaner
    }

    pub fn use_parallel(&self) -> bool {
        self.use_parallel
    }

    /// Cleans then labels one row. A row whose text filters out is reported
    /// as [`RowOutcome::FilteredOut`] even when its label is also unknown.
    pub fn prepare_row(&self, row: &UtteranceRow) -> RowOutcome {
        let start = Instant::now();
        let outcome = self.classify(row);
        if let Some(metrics) = &self.metrics {
            let result = match outcome.drop_reason() {
                Some(reason) => Err(reason),
                None => Ok(()),
            };
            metrics.record_row(start.elapsed(), result);
        }
        outcome
    }

    fn classify(&self, row: &UtteranceRow) -> RowOutcome {
        let Some(text) = self.cleaner.clean(&row.utterance) else {
            return RowOutcome::FilteredOut;
        };
        match SentimentLabel::from_category(&row.sentiment) {
            Some(label) => RowOutcome::Kept(PreparedRow {
                key: row.key.clone(),
                text,
                label,
            }),
            None => RowOutcome::UnknownLabel {
                category: row.sentiment.clone(),
            },
        }
    }

    /// Filters a split down to the rows that can be used for training or
    /// evaluation.
    pub fn prepare(&self, split: &str, rows: &[UtteranceRow]) -> PreparedSplit {
        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "pipeline.prepare",
            split = %split,
            rows = rows.len(),
            parallel = self.use_parallel
        );
        let _guard = span.enter();

        let outcomes: Vec<RowOutcome> = if self.use_parallel {
            rows.par_iter().map(|row| self.prepare_row(row)).collect()
        } else {
            rows.iter().map(|row| self.prepare_row(row)).collect()
        };

        let mut report = DropReport::default();
        let mut kept = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            report.count(&outcome);
            match outcome {
                RowOutcome::Kept(row) => kept.push(row),
                RowOutcome::FilteredOut => {}
                RowOutcome::UnknownLabel { category } => {
                    debug!(category = %category, "unknown_label");
                }
            }
        }

        let elapsed = start.elapsed();
        if report.kept == 0 && report.total > 0 {
            warn!(
                total = report.total,
                filtered_out = report.filtered_out,
                unknown_label = report.unknown_label,
                elapsed_micros = elapsed.as_micros(),
                "prepare_empty"
            );
        } else {
            info!(
                total = report.total,
                kept = report.kept,
                filtered_out = report.filtered_out,
                unknown_label = report.unknown_label,
                elapsed_micros = elapsed.as_micros(),
                "prepare_success"
            );
        }
        if let Some(metrics) = &self.metrics {
            metrics.record_split(split, elapsed, report.kept, report.dropped());
        }

        PreparedSplit {
            name: split.to_string(),
            rows: kept,
            report,
        }
    }

    /// Vocabulary over the kept rows of the training split, in row order.
    pub fn build_vocabulary(&self, train: &PreparedSplit, tokenizer: Tokenizer) -> Vocabulary {
        let vocab = Vocabulary::build(train.texts(), tokenizer);
        info!(
            split = %train.name,
            tokens = vocab.len(),
            tokenizer = tokenizer.as_str(),
            fingerprint = %vocab.fingerprint(),
            "vocabulary_built"
        );
        vocab
    }

    /// Id sequences for every kept row. Tokens outside `vocab` encode as 0.
    pub fn encode(&self, split: &PreparedSplit, vocab: &Vocabulary) -> EncodedDataset {
        let sequences: Vec<Vec<u32>> = if self.use_parallel {
            split
                .rows
                .par_iter()
                .map(|row| vocab.encode(row.text.as_str()))
                .collect()
        } else {
            split
                .rows
                .iter()
                .map(|row| vocab.encode(row.text.as_str()))
                .collect()
        };
        let (keys, labels) = split.keys_and_labels();
        EncodedDataset::from_parts(keys, sequences, labels)
    }

    /// Sentence vectors for every kept row, as a named feature matrix.
    pub fn vectorize(&self, split: &PreparedSplit, vectorizer: &SentenceVectorizer) -> FeatureMatrix {
        let start = Instant::now();
        let run = |row: &PreparedRow| {
            let row_start = Instant::now();
            let (vector, stats) = vectorizer.vectorize_with_stats(row.text.as_str());
            if let Some(metrics) = &self.metrics {
                metrics.record_vectorize(row_start.elapsed(), stats);
            }
            (vector, stats.found == 0)
        };
        let results: Vec<(Vec<f32>, bool)> = if self.use_parallel {
            split.rows.par_iter().map(run).collect()
        } else {
            split.rows.iter().map(run).collect()
        };

        let zero_rows = results.iter().filter(|(_, empty)| *empty).count();
        let rows: Vec<Vec<f32>> = results.into_iter().map(|(vector, _)| vector).collect();
        info!(
            split = %split.name,
            rows = rows.len(),
            dim = vectorizer.dim(),
            zero_rows,
            elapsed_micros = start.elapsed().as_micros(),
            "vectorize_success"
        );

        let (keys, labels) = split.keys_and_labels();
        FeatureMatrix::from_parts(vectorizer.dim(), keys, rows, labels)
    }
}

/// Checks that a vectorizer splits text the same way a vocabulary does.
pub fn ensure_same_tokenizer(
    vocab: &Vocabulary,
    vectorizer: &SentenceVectorizer,
) -> Result<(), PipelineError> {
    let vocab_rule = vocab.tokenizer();
    let vectorizer_rule = vectorizer.config().tokenizer;
    if vocab_rule == vectorizer_rule {
        Ok(())
    } else {
        Err(PipelineError::TokenizerMismatch {
            vocab: vocab_rule.as_str(),
            vectorizer: vectorizer_rule.as_str(),
        })
    }
}
