//! Fixed set of shards with round-robin write placement.

use mediadex_error::{MediadexResult, StoreError, StoreErrorKind};
use mediadex_store::{InMemoryCollection, MediaCollection};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One shard: a named, independently stored collection.
#[derive(Clone)]
pub struct Shard {
    name: String,
    index: usize,
    collection: Arc<dyn MediaCollection>,
}

impl std::fmt::Debug for Shard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shard")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("backend", &self.collection.backend_name())
            .finish()
    }
}

impl Shard {
    /// Name a collection. The pool assigns the index.
    pub fn new(name: impl Into<String>, collection: Arc<dyn MediaCollection>) -> Self {
        Self {
            name: name.into(),
            index: 0,
            collection,
        }
    }

    /// Shard name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position in the pool.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The shard's collection.
    pub fn collection(&self) -> &dyn MediaCollection {
        self.collection.as_ref()
    }
}

/// The process-wide set of shards.
///
/// The shard list is fixed at construction. Writes are placed by a cursor
/// advanced with a single atomic increment, so sequential callers visit
/// every shard once per cycle in index order. Concurrent callers each get a
/// distinct position; which caller gets which shard is unspecified, but over
/// any run of calls no shard receives more than one write above another.
///
/// # Example
///
/// ```
/// use mediadex_index::ShardPool;
///
/// let pool = ShardPool::in_memory(3).unwrap();
/// let order: Vec<usize> = (0..6).map(|_| pool.next_write_target().index()).collect();
/// assert_eq!(order, vec![0, 1, 2, 0, 1, 2]);
/// ```
#[derive(Debug)]
pub struct ShardPool {
    shards: Vec<Shard>,
    cursor: AtomicUsize,
}

impl ShardPool {
    /// Build a pool over `shards`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` of kind `InvalidConfig` if `shards` is empty.
    pub fn new(shards: Vec<Shard>) -> MediadexResult<Self> {
        if shards.is_empty() {
            return Err(StoreError::new(StoreErrorKind::InvalidConfig(
                "A shard pool needs at least one shard".to_string(),
            ))
            .into());
        }

        let shards = shards
            .into_iter()
            .enumerate()
            .map(|(index, shard)| Shard { index, ..shard })
            .collect();

        Ok(Self {
            shards,
            cursor: AtomicUsize::new(0),
        })
    }

    /// A pool of `count` in-memory shards named `shard-0`, `shard-1`, ...
    ///
    /// # Errors
    ///
    /// Returns error if `count` is zero.
    pub fn in_memory(count: usize) -> MediadexResult<Self> {
        Self::new(
            (0..count)
                .map(|i| Shard::new(format!("shard-{i}"), Arc::new(InMemoryCollection::new())))
                .collect(),
        )
    }

    /// The shard that receives the next write. Advances the cursor.
    pub fn next_write_target(&self) -> &Shard {
        let ticket = self.cursor.fetch_add(1, Ordering::Relaxed);
        &self.shards[ticket % self.shards.len()]
    }

    /// Every shard, in stable order.
    pub fn all_shards(&self) -> &[Shard] {
        &self.shards
    }

    /// Number of shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Shard at `index`, if any.
    pub fn shard(&self, index: usize) -> Option<&Shard> {
        self.shards.get(index)
    }
}
