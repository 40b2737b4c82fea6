//! Word embeddings and sentence vectors.
//!
//! This crate owns two things: a read-only [`EmbeddingTable`] loaded
//! explicitly by the caller, and a [`SentenceVectorizer`] that turns cleaned
//! text into the mean of its token vectors.
//!
//! ## Contract
//!
//! - The table is injected at construction; there is no global model cache
//!   and no download on first use.
//! - Vectorizing is a pure function of `(text, table, config)`.
//! - Output length is always the table dimension `D`; a sentence with no
//!   known token maps to the zero vector.
//! - Token order does not change the result.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use embed::{EmbeddingTable, SentenceVectorizer};
//!
//! let table = EmbeddingTable::from_pairs(2, [("happy", [0.1f32, 0.2])]).unwrap();
//! let vectorizer = SentenceVectorizer::new(Arc::new(table));
//!
//! assert_eq!(vectorizer.vectorize("happy"), vec![0.1, 0.2]);
//! assert_eq!(vectorizer.vectorize("monica"), vec![0.0, 0.0]);
//! ```

mod error;
mod normalize;
mod table;
mod vectorizer;

pub use crate::error::EmbeddingError;
pub use crate::table::EmbeddingTable;
pub use crate::vectorizer::{SentenceVectorizer, VectorizeStats, VectorizerConfig};
