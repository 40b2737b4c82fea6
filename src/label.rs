//! Sentiment label mapping.
//!
//! MELD annotates each utterance with one of three sentiment categories. The
//! mapping to class ids is a closed set; anything else is a missing label and
//! comes back as `None` so the pipeline can drop the row explicitly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three MELD sentiment classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl SentimentLabel {
    /// All labels in class-id order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
        SentimentLabel::Positive,
    ];

    /// Exact-match lookup of a category string. No trimming or case folding:
    /// `"Positive"` is not a known category.
    pub fn from_category(category: &str) -> Option<Self> {
        match category {
            "negative" => Some(SentimentLabel::Negative),
            "neutral" => Some(SentimentLabel::Neutral),
            "positive" => Some(SentimentLabel::Positive),
            _ => None,
        }
    }

    /// Class id used by downstream classifiers: 0, 1 or 2.
    pub fn class_id(self) -> u8 {
        match self {
            SentimentLabel::Negative => 0,
            SentimentLabel::Neutral => 1,
            SentimentLabel::Positive => 2,
        }
    }

    pub fn from_class_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Positive => "positive",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a category string straight to its class id, `None` when unknown.
pub fn map_label(category: &str) -> Option<u8> {
    SentimentLabel::from_category(category).map(SentimentLabel::class_id)
}
