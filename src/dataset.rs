//! Model-ready outputs of the pipeline.
//!
//! Both containers keep row keys, features and labels in separate vectors of
//! equal length. They are only built by the [`Preprocessor`](crate::Preprocessor),
//! which is what keeps the three aligned.

use serde::Serialize;

use vocab::{pad_batch, PaddedBatch};

/// Id sequences paired 1:1 with class ids, for sequence models.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EncodedDataset {
    keys: Vec<String>,
    sequences: Vec<Vec<u32>>,
    labels: Vec<u8>,
}

impl EncodedDataset {
    pub(crate) fn from_parts(keys: Vec<String>, sequences: Vec<Vec<u32>>, labels: Vec<u8>) -> Self {
        debug_assert_eq!(keys.len(), sequences.len());
        debug_assert_eq!(keys.len(), labels.len());
        Self {
            keys,
            sequences,
            labels,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Unpadded id sequences. Lengths vary per row.
    pub fn sequences(&self) -> &[Vec<u32>] {
        &self.sequences
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// `(key, ids, label)` per row, in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u32], u8)> + '_ {
        self.keys
            .iter()
            .zip(&self.sequences)
            .zip(&self.labels)
            .map(|((key, ids), label)| (key.as_str(), ids.as_slice(), *label))
    }

    /// Fixed-size padded batches with their labels. The last batch may be
    /// shorter. A `batch_size` of zero is treated as one.
    pub fn batches(
        &self,
        batch_size: usize,
        max_len: Option<usize>,
    ) -> impl Iterator<Item = (PaddedBatch, &[u8])> + '_ {
        let size = batch_size.max(1);
        self.sequences
            .chunks(size)
            .zip(self.labels.chunks(size))
            .map(move |(sequences, labels)| (pad_batch(sequences, max_len), labels))
    }
}

/// Sentence vectors as a dense table with named columns, for classical models.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureMatrix {
    keys: Vec<String>,
    columns: Vec<String>,
    rows: Vec<Vec<f32>>,
    labels: Vec<u8>,
}

impl FeatureMatrix {
    pub(crate) fn from_parts(
        dim: usize,
        keys: Vec<String>,
        rows: Vec<Vec<f32>>,
        labels: Vec<u8>,
    ) -> Self {
        debug_assert_eq!(keys.len(), rows.len());
        debug_assert_eq!(keys.len(), labels.len());
        Self {
            keys,
            columns: feature_columns(dim),
            rows,
            labels,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Vector dimension `D`, equal to the number of feature columns.
    pub fn dim(&self) -> usize {
        self.columns.len()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// `text_feature_1` through `text_feature_D`.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<f32>] {
        &self.rows
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32], u8)> + '_ {
        self.keys
            .iter()
            .zip(&self.rows)
            .zip(&self.labels)
            .map(|((key, row), label)| (key.as_str(), row.as_slice(), *label))
    }
}

/// Column names for a `dim`-wide feature block, 1-based.
pub fn feature_columns(dim: usize) -> Vec<String> {
    (1..=dim).map(|i| format!("text_feature_{i}")).collect()
}
