//! Shard collection trait.

use mediadex_core::{Media, MediaFilter};
use mediadex_error::MediadexResult;

/// One shard's document collection.
///
/// Implementations enforce uniqueness of `file_id` within the collection
/// only. They never consult other shards.
#[async_trait::async_trait]
pub trait MediaCollection: Send + Sync {
    /// Insert a record, rejecting an existing `file_id`.
    ///
    /// # Errors
    ///
    /// A key collision returns a `StoreError` of kind `DuplicateKey`; any
    /// other error means the shard could not be written.
    async fn insert(&self, media: &Media) -> MediadexResult<()>;

    /// Count records matching `filter`.
    async fn count(&self, filter: &MediaFilter) -> MediadexResult<u64>;

    /// Fetch up to `limit` matches after skipping `skip`, most recently
    /// inserted first.
    async fn find(
        &self,
        filter: &MediaFilter,
        skip: usize,
        limit: usize,
    ) -> MediadexResult<Vec<Media>>;

    /// Total number of records in the shard.
    async fn len(&self) -> MediadexResult<u64>;

    /// Whether the shard holds no records.
    async fn is_empty(&self) -> MediadexResult<bool> {
        Ok(self.len().await? == 0)
    }

    /// Short backend label for logs and stats.
    fn backend_name(&self) -> &'static str;
}
