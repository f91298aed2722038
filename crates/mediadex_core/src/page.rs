//! Merged search result page.

use crate::Media;
use serde::{Deserialize, Serialize};

/// One page of a fan-out search.
///
/// `results` is the concatenation of each shard's page in shard order;
/// ordering is newest-first within a shard only. `next_offset` is `None`
/// once `total_results` does not exceed the end of this page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct SearchPage {
    /// Records from every shard, concatenated in shard order
    results: Vec<Media>,
    /// Offset for the following page, if any
    next_offset: Option<usize>,
    /// Sum of per-shard match counts
    total_results: u64,
}

impl SearchPage {
    /// Create a page.
    pub fn new(results: Vec<Media>, next_offset: Option<usize>, total_results: u64) -> Self {
        Self {
            results,
            next_offset,
            total_results,
        }
    }

    /// A page with no results and no continuation.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Split into `(results, next_offset, total_results)`.
    pub fn into_parts(self) -> (Vec<Media>, Option<usize>, u64) {
        (self.results, self.next_offset, self.total_results)
    }
}
