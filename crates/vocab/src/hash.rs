//! Vocabulary fingerprints.
//!
//! Dev and test splits must be encoded with the exact vocabulary built from
//! the training split. A fingerprint makes that checkable: two vocabularies
//! with the same tokenizer and the same ids in the same order hash equal.
//!
//! # Algorithm
//!
//! ```text
//! SHA-256(tokenizer_name || 0x00 || token_0 || 0x1F || token_1 || 0x1F || ...)
//! ```
//!
//! Tokens are fed in id order, padding token included. `0x1F` (unit
//! separator) cannot appear in cleaned text, so token boundaries are
//! unambiguous.

use sha2::{Digest, Sha256};

use cleaner::Tokenizer;

/// Hex SHA-256 over a tokenizer rule and an id-ordered token list.
pub(crate) fn fingerprint_tokens<S: AsRef<str>>(tokenizer: Tokenizer, tokens: &[S]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(tokenizer.as_str().as_bytes());
    hasher.update([0]);
    for token in tokens {
        hasher.update(token.as_ref().as_bytes());
        hasher.update([0x1F]);
    }
    hex::encode(hasher.finalize())
}
