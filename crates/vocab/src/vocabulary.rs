use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use cleaner::Tokenizer;

use crate::error::VocabError;
use crate::hash::fingerprint_tokens;

/// Token reserved for padding and unknown words.
pub const PAD_TOKEN: &str = "<pad>";

/// Id of [`PAD_TOKEN`]. Never assigned to a real token.
pub const PAD_ID: u32 = 0;

/// Frozen token → id mapping built from a training corpus.
///
/// Ids follow first appearance in the corpus, starting at 1. The tokenizer
/// used to build the vocabulary is stored with it and reused by
/// [`encode`](Self::encode), so training and encoding always agree on token
/// boundaries.
///
/// There is no mutating API: build once from the training split, then reuse
/// the same value (or its serialized snapshot) for dev and test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VocabularySnapshot", into = "VocabularySnapshot")]
pub struct Vocabulary {
    tokenizer: Tokenizer,
    /// Id-ordered tokens; `tokens[0]` is always [`PAD_TOKEN`].
    tokens: Vec<String>,
    index: FxHashMap<String, u32>,
}

impl Vocabulary {
    /// Builds a vocabulary from `corpus`, in iteration order.
    ///
    /// Each entry is lowercased and split with `tokenizer`. Counts are not
    /// kept; only first appearance decides the id. A literal `<pad>` in the
    /// corpus resolves to the padding id instead of getting its own.
    pub fn build<I, S>(corpus: I, tokenizer: Tokenizer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::padding_only(tokenizer);
        for text in corpus {
            let lowered = text.as_ref().to_lowercase();
            for token in tokenizer.tokens(&lowered) {
                if vocab.index.contains_key(token) {
                    continue;
                }
                let id = vocab.tokens.len() as u32;
                vocab.index.insert(token.to_string(), id);
                vocab.tokens.push(token.to_string());
            }
        }
        vocab
    }

    fn padding_only(tokenizer: Tokenizer) -> Self {
        let mut index = FxHashMap::default();
        index.insert(PAD_TOKEN.to_string(), PAD_ID);
        Self {
            tokenizer,
            tokens: vec![PAD_TOKEN.to_string()],
            index,
        }
    }

    /// Encodes `text` into ids; tokens missing from the vocabulary map to
    /// [`PAD_ID`]. No padding or truncation happens here.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        let lowered = text.to_lowercase();
        self.tokenizer
            .tokens(&lowered)
            .map(|token| self.index.get(token).copied().unwrap_or(PAD_ID))
            .collect()
    }

    /// Id of an exact token, if known.
    pub fn id_of(&self, token: &str) -> Option<u32> {
        self.index.get(token).copied()
    }

    /// Token for an id, if assigned.
    pub fn token(&self, id: u32) -> Option<&str> {
        self.tokens.get(id as usize).map(String::as_str)
    }

    /// Number of ids, padding included. This is the embedding-table size a
    /// downstream model needs.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when no real token has been assigned (only padding exists).
    pub fn is_empty(&self) -> bool {
        self.tokens.len() <= 1
    }

    pub fn tokenizer(&self) -> Tokenizer {
        self.tokenizer
    }

    /// `(id, token)` pairs in id order, padding first.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .map(|(id, token)| (id as u32, token.as_str()))
    }

    /// Hex SHA-256 over the tokenizer and the id-ordered tokens.
    pub fn fingerprint(&self) -> String {
        fingerprint_tokens(self.tokenizer, &self.tokens)
    }
}

/// Serialized form of a [`Vocabulary`]: the tokenizer and the id-ordered
/// token list. The lookup map is rebuilt on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularySnapshot {
    pub tokenizer: Tokenizer,
    pub tokens: Vec<String>,
    /// Checked on load when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

impl From<Vocabulary> for VocabularySnapshot {
    fn from(vocab: Vocabulary) -> Self {
        let fingerprint = Some(vocab.fingerprint());
        Self {
            tokenizer: vocab.tokenizer,
            tokens: vocab.tokens,
            fingerprint,
        }
    }
}

impl TryFrom<VocabularySnapshot> for Vocabulary {
    type Error = VocabError;

    fn try_from(snapshot: VocabularySnapshot) -> Result<Self, Self::Error> {
        let VocabularySnapshot {
            tokenizer,
            tokens,
            fingerprint,
        } = snapshot;

        if tokens.len() > u32::MAX as usize {
            return Err(VocabError::TooLarge(tokens.len()));
        }
        if tokens.first().map(String::as_str) != Some(PAD_TOKEN) {
            return Err(VocabError::MissingPadToken {
                expected: PAD_TOKEN.to_string(),
                found: tokens.first().cloned(),
            });
        }

        let mut index = FxHashMap::default();
        index.reserve(tokens.len());
        for (id, token) in tokens.iter().enumerate() {
            let id = id as u32;
            if let Some(first) = index.insert(token.clone(), id) {
                return Err(VocabError::DuplicateToken {
                    token: token.clone(),
                    first,
                    second: id,
                });
            }
        }

        if let Some(expected) = fingerprint {
            let computed = fingerprint_tokens(tokenizer, &tokens);
            if computed != expected {
                return Err(VocabError::FingerprintMismatch { expected, computed });
            }
        }

        Ok(Self {
            tokenizer,
            tokens,
            index,
        })
    }
}
