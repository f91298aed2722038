//! In-memory shard collection.

use crate::MediaCollection;
use async_trait::async_trait;
use mediadex_core::{Media, MediaFilter};
use mediadex_error::{MediadexResult, StoreError, StoreErrorKind};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory shard collection.
///
/// Records are kept in insertion order next to a key set, behind an RwLock.
/// All data is lost when the last clone is dropped.
///
/// # Example
/// ```
/// use mediadex_core::MediaBuilder;
/// use mediadex_store::{InMemoryCollection, MediaCollection};
///
/// # #[tokio::main]
/// # async fn main() {
/// let shard = InMemoryCollection::new();
/// let media = MediaBuilder::default()
///     .file_id("AgADBAAD")
///     .file_name("song.mp3")
///     .file_size(10_i64)
///     .build()
///     .unwrap();
///
/// shard.insert(&media).await.unwrap();
/// assert!(shard.insert(&media).await.unwrap_err().is_duplicate_key());
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCollection {
    inner: Arc<RwLock<Records>>,
}

#[derive(Debug, Default)]
struct Records {
    /// Insertion order, oldest first
    records: Vec<Media>,
    keys: HashSet<String>,
}

impl InMemoryCollection {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every record (for testing).
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.records.clear();
        inner.keys.clear();
    }
}

#[async_trait]
impl MediaCollection for InMemoryCollection {
    async fn insert(&self, media: &Media) -> MediadexResult<()> {
        let mut inner = self.inner.write().await;

        if !inner.keys.insert(media.file_id().clone()) {
            let kind = StoreErrorKind::DuplicateKey(media.file_id().clone());
            return Err(StoreError::new(kind).into());
        }

        inner.records.push(media.clone());
        Ok(())
    }

    async fn count(&self, filter: &MediaFilter) -> MediadexResult<u64> {
        let inner = self.inner.read().await;
        Ok(inner.records.iter().filter(|m| filter.matches(m)).count() as u64)
    }

    async fn find(
        &self,
        filter: &MediaFilter,
        skip: usize,
        limit: usize,
    ) -> MediadexResult<Vec<Media>> {
        let inner = self.inner.read().await;
        Ok(inner
            .records
            .iter()
            .rev()
            .filter(|m| filter.matches(m))
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn len(&self) -> MediadexResult<u64> {
        Ok(self.inner.read().await.records.len() as u64)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
