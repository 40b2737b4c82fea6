//! Observer hook for pipeline outcomes.
//!
//! The stage crates never count or log dropped rows themselves. The
//! [`Preprocessor`](crate::Preprocessor) reports every per-row outcome to an
//! optional [`PipelineMetrics`] implementation handed to it at construction.

use std::time::Duration;

use embed::VectorizeStats;

/// Why a row left the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// Cleaning left nothing.
    FilteredOut,
    /// The sentiment category was outside the closed label set.
    UnknownLabel,
}

impl DropReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DropReason::FilteredOut => "filtered_out",
            DropReason::UnknownLabel => "unknown_label",
        }
    }
}

/// Metrics observer for pipeline stages.
pub trait PipelineMetrics: Send + Sync {
    /// One row went through cleaning and labelling. `Err` carries the drop reason.
    fn record_row(&self, latency: Duration, result: Result<(), DropReason>);
    /// One kept row was vectorized.
    fn record_vectorize(&self, latency: Duration, stats: VectorizeStats);
    /// A whole split finished preparing.
    fn record_split(&self, split: &str, latency: Duration, kept: usize, dropped: usize);
}
