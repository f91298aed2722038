//! The media index facade.

use crate::{
    MediadexConfig, REDUCED_PAGE_SIZE, RecordStore, SearchEngine, Shard, ShardBackend, ShardPool,
};
use futures::future::join_all;
use mediadex_core::{IncomingMedia, SaveOutcome, SearchPage};
use mediadex_database::PostgresCollection;
use mediadex_error::{
    BuilderError, BuilderErrorKind, ConfigError, MediadexResult, StoreError, StoreErrorKind,
};
use mediadex_store::{InMemoryCollection, InMemorySettings, MediaCollection, SettingsLookup};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Parameters of one search call.
///
/// # Example
///
/// ```
/// use mediadex_index::SearchRequestBuilder;
///
/// let request = SearchRequestBuilder::default()
///     .query("the matrix")
///     .chat_id(-1001234_i64)
///     .offset(10_usize)
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.max_results(), 10);
/// assert!(request.use_caption().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct SearchRequest {
    /// Chat whose settings choose the page size
    #[builder(default, setter(into, strip_option))]
    chat_id: Option<i64>,
    /// Free-text query
    query: String,
    /// Restrict to one file type
    #[builder(default, setter(into, strip_option))]
    file_type: Option<String>,
    /// Page size when no chat is given
    #[builder(default = 10)]
    max_results: usize,
    /// Per-shard offset
    #[builder(default)]
    offset: usize,
    /// Search captions as well as file names.
    ///
    /// When unset, the configured `use_caption_filter` decides. That flag is
    /// `false` unless a config source turns it on, so an unset request
    /// searches file names only.
    #[builder(default, setter(into, strip_option))]
    use_caption: Option<bool>,
}

impl SearchRequestBuilder {
    /// Build a search request.
    ///
    /// # Errors
    ///
    /// Returns error if `query` was not set.
    #[track_caller]
    pub fn build(&self) -> Result<SearchRequest, BuilderError> {
        self.build_internal().map_err(|e| match e {
            SearchRequestBuilderError::UninitializedField(field) => {
                BuilderError::new(BuilderErrorKind::MissingField(field.to_string()))
            }
            other => BuilderError::from(other.to_string()),
        })
    }
}

/// Record count of one shard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ShardStats {
    /// Shard name
    name: String,
    /// Storage backend label
    backend: String,
    /// Records stored in the shard
    records: u64,
}

/// Sharded media index: save path, search engine and settings lookup.
///
/// Construct once per process and share by reference.
#[derive(Clone)]
pub struct MediaIndex {
    pool: Arc<ShardPool>,
    records: RecordStore,
    engine: SearchEngine,
    settings: Arc<dyn SettingsLookup>,
    config: MediadexConfig,
}

impl std::fmt::Debug for MediaIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaIndex")
            .field("pool", &self.pool)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MediaIndex {
    /// Assemble an index from its parts.
    pub fn new(
        pool: ShardPool,
        config: MediadexConfig,
        settings: Arc<dyn SettingsLookup>,
    ) -> Self {
        let pool = Arc::new(pool);
        Self {
            records: RecordStore::new(Arc::clone(&pool)),
            engine: SearchEngine::new(Arc::clone(&pool), config.search_timeout()),
            pool,
            settings,
            config,
        }
    }

    /// An index over `pool` with default configuration and no chat settings.
    pub fn in_memory(pool: ShardPool) -> Self {
        Self::new(
            pool,
            MediadexConfig::default(),
            Arc::new(InMemorySettings::new()),
        )
    }

    /// Open every configured shard and build the index.
    ///
    /// PostgreSQL shards connect and create their table named
    /// `collection_name` if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or a shard cannot be
    /// opened.
    #[instrument(skip_all, fields(shards = config.shards().len()))]
    pub async fn from_config(
        config: MediadexConfig,
        settings: Arc<dyn SettingsLookup>,
    ) -> MediadexResult<Self> {
        config.validate()?;

        let mut shards = Vec::with_capacity(config.shards().len());
        for shard in config.shards() {
            let collection: Arc<dyn MediaCollection> = match shard.backend() {
                ShardBackend::Memory => Arc::new(InMemoryCollection::new()),
                ShardBackend::Postgres => {
                    let url = shard.url().as_deref().ok_or_else(|| {
                        ConfigError::new(format!("Shard '{}' has no url", shard.name()))
                    })?;
                    Arc::new(PostgresCollection::connect(url, config.collection_name()).await?)
                }
            };
            info!(shard = %shard.name(), backend = %shard.backend(), "Opened shard");
            shards.push(Shard::new(shard.name().clone(), collection));
        }

        Ok(Self::new(ShardPool::new(shards)?, config, settings))
    }

    /// Save a new file into the next shard.
    ///
    /// # Errors
    ///
    /// Returns error only if the chosen shard could not be written.
    pub async fn save_file(&self, incoming: &IncomingMedia) -> MediadexResult<SaveOutcome> {
        self.records.save(incoming).await
    }

    /// Search every shard and merge one page.
    ///
    /// With a `chat_id`, the page size comes from that chat's settings:
    /// [`REDUCED_PAGE_SIZE`] if it asks for the reduced page, otherwise the
    /// configured `max_buttons`. Without one, `max_results` is used.
    ///
    /// # Errors
    ///
    /// Returns error if a shard fails or the search deadline passes.
    #[instrument(skip(self, request), fields(query = %request.query(), offset = request.offset()))]
    pub async fn get_search_results(&self, request: SearchRequest) -> MediadexResult<SearchPage> {
        let max_results = match request.chat_id {
            Some(chat_id) => self.page_size_for(chat_id).await,
            None => request.max_results,
        };
        let use_caption = request
            .use_caption
            .unwrap_or(*self.config.use_caption_filter());

        self.engine
            .search(
                &request.query,
                request.file_type.as_deref(),
                max_results,
                request.offset,
                use_caption,
            )
            .await
    }

    async fn page_size_for(&self, chat_id: i64) -> usize {
        match self.settings.get_settings(chat_id).await {
            Ok(settings) if settings.max_btn => REDUCED_PAGE_SIZE,
            Ok(_) => *self.config.max_buttons(),
            Err(e) => {
                warn!(chat_id, error = %e, "Settings lookup failed, using configured page size");
                *self.config.max_buttons()
            }
        }
    }

    /// Record counts for every shard, in pool order.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` naming the first shard that failed.
    pub async fn shard_stats(&self) -> MediadexResult<Vec<ShardStats>> {
        let counts = join_all(
            self.pool
                .all_shards()
                .iter()
                .map(|shard| shard.collection().len()),
        )
        .await;

        self.pool
            .all_shards()
            .iter()
            .zip(counts)
            .map(|(shard, count)| -> MediadexResult<ShardStats> {
                let records = count.map_err(|e| {
                    StoreError::new(StoreErrorKind::Unavailable(format!(
                        "{}: {}",
                        shard.name(),
                        e
                    )))
                })?;
                Ok(ShardStats {
                    name: shard.name().to_string(),
                    backend: shard.collection().backend_name().to_string(),
                    records,
                })
            })
            .collect()
    }

    /// The shard pool.
    pub fn pool(&self) -> &ShardPool {
        &self.pool
    }

    /// The active configuration.
    pub fn config(&self) -> &MediadexConfig {
        &self.config
    }
}
