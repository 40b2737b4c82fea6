//! Vocabulary and sequence encoding.
//!
//! Builds an insertion-ordered token → id mapping from a cleaned training
//! corpus and encodes text into id sequences with it.
//!
//! ## Invariants worth knowing
//!
//! - Id 0 is `<pad>` and doubles as the unknown-token id
//! - Real tokens get ids 1.. in first-appearance order
//! - Same corpus in the same order = same ids and same fingerprint
//! - The vocabulary remembers its [`Tokenizer`] and encodes with it, so build
//!   and encode cannot disagree on token boundaries
//!
//! ```rust
//! use vocab::{Tokenizer, Vocabulary, PAD_ID};
//!
//! let train = ["happy birthday", "birthday cake"];
//! let vocab = Vocabulary::build(train, Tokenizer::Word);
//!
//! assert_eq!(vocab.encode("happy cake"), vec![1, 3]);
//! assert_eq!(vocab.encode("sad cake"), vec![PAD_ID, 3]);
//! ```

mod batch;
mod error;
mod hash;
mod vocabulary;

pub use crate::batch::{pad_batch, PaddedBatch};
pub use crate::error::VocabError;
pub use crate::vocabulary::{Vocabulary, VocabularySnapshot, PAD_ID, PAD_TOKEN};
pub use cleaner::Tokenizer;
