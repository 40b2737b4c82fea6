use std::sync::Arc;

use serde::{Deserialize, Serialize};

use cleaner::Tokenizer;

use crate::normalize::{l2_normalize_in_place, mean_in_place};
use crate::table::EmbeddingTable;

/// Options for [`SentenceVectorizer`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VectorizerConfig {
    /// How cleaned text is split before lookup. Should match the rule the
    /// vocabulary was built with.
    pub tokenizer: Tokenizer,
    /// Scale each sentence vector to unit length. Zero vectors stay zero.
    pub l2_normalize: bool,
}

/// How many tokens of one sentence had a vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VectorizeStats {
    pub found: usize,
    pub missing: usize,
}

/// Bag-of-words mean over an injected [`EmbeddingTable`].
///
/// The table is shared, never copied or mutated, so the same vectorizer (or
/// clones of it) can serve train, dev and test and run across threads.
#[derive(Debug, Clone)]
pub struct SentenceVectorizer {
    table: Arc<EmbeddingTable>,
    config: VectorizerConfig,
}

impl SentenceVectorizer {
    pub fn new(table: Arc<EmbeddingTable>) -> Self {
        Self::with_config(table, VectorizerConfig::default())
    }

    pub fn with_config(table: Arc<EmbeddingTable>, config: VectorizerConfig) -> Self {
        Self { table, config }
    }

    /// Output dimension `D`, fixed by the table.
    pub fn dim(&self) -> usize {
        self.table.dim()
    }

    pub fn table(&self) -> &EmbeddingTable {
        &self.table
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    /// Mean of the vectors of every token found in the table.
    ///
    /// Tokens without a vector are skipped. If none is found the result is the
    /// zero vector. The output always has length [`dim`](Self::dim) and does
    /// not depend on token order.
    pub fn vectorize(&self, text: &str) -> Vec<f32> {
        self.vectorize_with_stats(text).0
    }

    /// [`vectorize`](Self::vectorize) plus hit/miss counts.
    pub fn vectorize_with_stats(&self, text: &str) -> (Vec<f32>, VectorizeStats) {
        let mut stats = VectorizeStats::default();
        let mut hits: Vec<(&str, &[f32])> = Vec::new();
        for token in self.config.tokenizer.tokens(text) {
            match self.table.get(token) {
                Some(vector) => hits.push((token, vector)),
                None => stats.missing += 1,
            }
        }
        stats.found = hits.len();

        // Summing in token order keeps the float result independent of word order.
        hits.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut out = vec![0.0f32; self.table.dim()];
        for (_, vector) in &hits {
            for (acc, x) in out.iter_mut().zip(vector.iter()) {
                *acc += *x;
            }
        }
        mean_in_place(&mut out, hits.len());

        if self.config.l2_normalize {
            l2_normalize_in_place(&mut out);
        }

        (out, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Arc<EmbeddingTable> {
        Arc::new(
            EmbeddingTable::from_pairs(
                2,
                [
                    ("happy", [0.1f32, 0.2]),
                    ("birthday", [1.0, -1.0]),
                    ("cake", [0.3, 0.7]),
                ],
            )
            .expect("valid table"),
        )
    }

    #[test]
    fn single_token_returns_its_vector() {
        let v = SentenceVectorizer::new(table());
        assert_eq!(v.vectorize("happy"), vec![0.1, 0.2]);
    }

    #[test]
    fn unknown_tokens_are_skipped() {
        let v = SentenceVectorizer::new(table());
        let (out, stats) = v.vectorize_with_stats("happy monica");
        assert_eq!(out, vec![0.1, 0.2]);
        assert_eq!(stats, VectorizeStats { found: 1, missing: 1 });
    }

    #[test]
    fn nothing_found_is_zero_vector() {
        let v = SentenceVectorizer::new(table());
        assert_eq!(v.vectorize("monica chandler"), vec![0.0, 0.0]);
        assert_eq!(v.vectorize(""), vec![0.0, 0.0]);
    }

    #[test]
    fn mean_of_several_tokens() {
        let v = SentenceVectorizer::new(table());
        let out = v.vectorize("birthday cake");
        assert!((out[0] - 0.65).abs() < 1e-6);
        assert!((out[1] + 0.15).abs() < 1e-6);
    }

    #[test]
    fn order_does_not_matter() {
        let v = SentenceVectorizer::new(table());
        let a = v.vectorize("happy birthday cake happy");
        let b = v.vectorize("cake happy happy birthday");
        assert_eq!(a, b);
    }

    #[test]
    fn repeated_tokens_weigh_more() {
        let v = SentenceVectorizer::new(table());
        let once = v.vectorize("happy birthday");
        let twice = v.vectorize("happy happy birthday");
        assert_ne!(once, twice);
    }

    #[test]
    fn word_tokenizer_detaches_punctuation() {
        let word = SentenceVectorizer::new(table());
        assert_eq!(word.vectorize("happy!!"), vec![0.1, 0.2]);

        let ws = SentenceVectorizer::with_config(
            table(),
            VectorizerConfig {
                tokenizer: Tokenizer::Whitespace,
                ..Default::default()
            },
        );
        assert_eq!(ws.vectorize("happy!!"), vec![0.0, 0.0]);
    }

    #[test]
    fn l2_normalized_output() {
        let v = SentenceVectorizer::with_config(
            table(),
            VectorizerConfig {
                l2_normalize: true,
                ..Default::default()
            },
        );
        let out = v.vectorize("birthday");
        let norm: f32 = out.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
        assert_eq!(v.vectorize("monica"), vec![0.0, 0.0]);
    }

    #[test]
    fn output_length_matches_table() {
        let v = SentenceVectorizer::new(table());
        for text in ["", "happy", "x y z", "cake cake cake"] {
            assert_eq!(v.vectorize(text).len(), v.dim());
        }
    }
}
