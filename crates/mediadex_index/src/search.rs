//! Fan-out search across every shard.

use crate::{Shard, ShardPool, compile_query};
use futures::future::join_all;
use mediadex_core::{Media, MediaFilter, SearchPage};
use mediadex_error::{MediadexResult, SearchError, SearchErrorKind};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Page size used when a chat's settings ask for the reduced page.
pub const REDUCED_PAGE_SIZE: usize = 10;

/// Runs one logical query against all shards and merges the answers.
///
/// Every shard is asked for its match count and for one page, using the
/// same `offset` and `max_results` on each shard. The shards run
/// concurrently; results are concatenated in shard order once all of them
/// have answered. Ordering is newest-first within each shard only, and
/// paging is approximate when shards hold uneven numbers of matches.
///
/// A failing shard fails the whole search, as does missing the deadline.
/// No partial page is returned.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    pool: Arc<ShardPool>,
    timeout: Option<Duration>,
}

impl SearchEngine {
    /// Create an engine over `pool`, with an optional fan-out deadline.
    pub fn new(pool: Arc<ShardPool>, timeout: Option<Duration>) -> Self {
        Self { pool, timeout }
    }

    /// Search every shard.
    ///
    /// `next_offset` on the returned page is `offset + max_results` while
    /// more matches remain, `None` on the last page. A query that does not
    /// compile yields an empty page.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] if any shard fails or the deadline passes.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        query: &str,
        file_type: Option<&str>,
        max_results: usize,
        offset: usize,
        use_caption: bool,
    ) -> MediadexResult<SearchPage> {
        let pattern = match compile_query(query) {
            Ok(pattern) => pattern,
            Err(e) => {
                warn!(query, error = %e, "Search pattern does not compile, returning no results");
                return Ok(SearchPage::empty());
            }
        };
        let filter = MediaFilter::new(pattern, use_caption, file_type.map(str::to_string));

        let fan_out = join_all(
            self.pool
                .all_shards()
                .iter()
                .map(|shard| search_shard(shard, &filter, offset, max_results)),
        );

        let answers = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, fan_out).await.map_err(|_| {
                let millis = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
                error!(query, timeout_ms = millis, "Search deadline exceeded");
                SearchError::new(SearchErrorKind::DeadlineExceeded(millis))
            })?,
            None => fan_out.await,
        };

        let mut results = Vec::new();
        let mut total_results = 0u64;
        for answer in answers {
            let (count, page) = answer?;
            total_results += count;
            results.extend(page);
        }

        let end = offset.saturating_add(max_results);
        let next_offset = (max_results > 0 && total_results > end as u64).then_some(end);

        debug!(
            total_results,
            returned = results.len(),
            next_offset = ?next_offset,
            "Search complete"
        );

        Ok(SearchPage::new(results, next_offset, total_results))
    }
}

async fn search_shard(
    shard: &Shard,
    filter: &MediaFilter,
    offset: usize,
    limit: usize,
) -> Result<(u64, Vec<Media>), SearchError> {
    let collection = shard.collection();

    futures::try_join!(
        collection.count(filter),
        collection.find(filter, offset, limit)
    )
    .map_err(|e| {
        error!(
            shard = %shard.name(),
            query = %filter.pattern().query(),
            error = %e,
            "Shard search failed"
        );
        SearchError::new(SearchErrorKind::ShardFailed {
            shard: shard.name().to_string(),
            reason: e.to_string(),
        })
    })
}
