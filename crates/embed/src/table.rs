//! Read-only embedding tables.
//!
//! [`EmbeddingTable`] maps a token to a fixed-dimension `f32` vector. It is
//! loaded once, explicitly, by the caller and then shared (usually behind an
//! `Arc`) by every vectorizer for the lifetime of a run. Nothing mutates it
//! after construction.
//!
//! # Text format
//!
//! [`EmbeddingTable::from_reader`] accepts the GloVe text layout, one token
//! per line followed by its components:
//!
//! ```text
//! the 0.418 0.24968 -0.41242 ...
//! happy 0.092086 0.2571 -0.58693 ...
//! ```
//!
//! A word2vec-style header line (`<count> <dim>`) is recognised and used to
//! fix the dimension. Blank lines are skipped. When a token repeats, the first
//! vector wins.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fxhash::FxHashMap;
use tracing::debug;

use crate::error::EmbeddingError;

/// Immutable token → vector lookup with a fixed dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingTable {
    dim: usize,
    index: FxHashMap<String, usize>,
    /// Row-major storage; row `i` is `data[i * dim..(i + 1) * dim]`.
    data: Vec<f32>,
}

impl EmbeddingTable {
    /// Builds a table from in-memory `(token, vector)` pairs.
    pub fn from_pairs<I, K, V>(dim: usize, pairs: I) -> Result<Self, EmbeddingError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<[f32]>,
    {
        let mut table = Self::with_dim(dim)?;
        for (line, (token, vector)) in pairs.into_iter().enumerate() {
            let token = token.into();
            let vector = vector.as_ref();
            if vector.len() != dim {
                return Err(EmbeddingError::DimensionMismatch {
                    line: line + 1,
                    token,
                    expected: dim,
                    found: vector.len(),
                });
            }
            table.push(token, vector.iter().copied());
        }
        Ok(table)
    }

    /// Parses a GloVe / word2vec text stream.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, EmbeddingError> {
        let mut table: Option<Self> = None;
        let mut header_dim: Option<usize> = None;
        let mut duplicates = 0usize;
        let mut components: Vec<f32> = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line?;
            let mut fields = line.split_whitespace();
            let Some(token) = fields.next() else {
                continue;
            };

            if table.is_none() && header_dim.is_none() {
                if let Some(dim) = parse_header(&line) {
                    header_dim = Some(dim);
                    continue;
                }
            }

            components.clear();
            for value in fields {
                let parsed = value.parse::<f32>().map_err(|_| EmbeddingError::Parse {
                    line: line_no,
                    token: token.to_string(),
                    value: value.to_string(),
                })?;
                components.push(parsed);
            }

            if table.is_none() {
                table = Some(Self::with_dim(header_dim.unwrap_or(components.len()))?);
            }
            let Some(current) = table.as_mut() else {
                continue;
            };

            if components.len() != current.dim {
                return Err(EmbeddingError::DimensionMismatch {
                    line: line_no,
                    token: token.to_string(),
                    expected: current.dim,
                    found: components.len(),
                });
            }

            if !current.push(token.to_string(), components.iter().copied()) {
                duplicates += 1;
            }
        }

        let table = table.ok_or(EmbeddingError::Empty)?;
        debug!(
            dim = table.dim,
            vectors = table.len(),
            duplicates,
            "embedding_table_loaded"
        );
        Ok(table)
    }

    /// Opens and parses a GloVe / word2vec text file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, EmbeddingError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn with_dim(dim: usize) -> Result<Self, EmbeddingError> {
        if dim == 0 {
            return Err(EmbeddingError::ZeroDimension);
        }
        Ok(Self {
            dim,
            index: FxHashMap::default(),
            data: Vec::new(),
        })
    }

    /// Appends a row unless the token is already present. Returns whether the
    /// row was stored.
    fn push(&mut self, token: String, vector: impl Iterator<Item = f32>) -> bool {
        if self.index.contains_key(&token) {
            return false;
        }
        let row = self.index.len();
        self.index.insert(token, row);
        self.data.extend(vector);
        true
    }

    /// Vector dimension `D`.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of tokens with a vector.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Vector for `token`, if present.
    pub fn get(&self, token: &str) -> Option<&[f32]> {
        let row = *self.index.get(token)?;
        let start = row * self.dim;
        self.data.get(start..start + self.dim)
    }
}

/// `<count> <dim>` with nothing else on the line.
fn parse_header(line: &str) -> Option<usize> {
    let mut fields = line.split_whitespace();
    fields.next()?.parse::<usize>().ok()?;
    let dim = fields.next()?.parse::<usize>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(dim)
}
