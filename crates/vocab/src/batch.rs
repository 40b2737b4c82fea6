//! Padding helper for batching variable-length id sequences.
//!
//! Encoding leaves sequences at their natural length. Batch collation for a
//! model that wants a rectangular input is a downstream concern; this is the
//! small piece of it that only needs [`PAD_ID`].

use crate::vocabulary::PAD_ID;

/// A rectangular batch: every row has `width` ids, with a mask marking the
/// positions that hold real ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedBatch {
    pub ids: Vec<Vec<u32>>,
    pub mask: Vec<Vec<bool>>,
    pub width: usize,
}

/// Right-pads `sequences` with [`PAD_ID`] to the longest length, capped at
/// `max_len` when given. Longer sequences are truncated.
pub fn pad_batch<S: AsRef<[u32]>>(sequences: &[S], max_len: Option<usize>) -> PaddedBatch {
    let longest = sequences
        .iter()
        .map(|seq| seq.as_ref().len())
        .max()
        .unwrap_or(0);
    let width = max_len.map_or(longest, |cap| longest.min(cap));

    let mut ids = Vec::with_capacity(sequences.len());
    let mut mask = Vec::with_capacity(sequences.len());
    for seq in sequences {
        let seq = seq.as_ref();
        let keep = seq.len().min(width);
        let mut row = Vec::with_capacity(width);
        row.extend_from_slice(&seq[..keep]);
        row.resize(width, PAD_ID);
        let mut row_mask = vec![true; keep];
        row_mask.resize(width, false);
        ids.push(row);
        mask.push(row_mask);
    }

    PaddedBatch { ids, mask, width }
}
