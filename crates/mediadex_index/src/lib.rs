//! Shard pool, record store and fan-out search engine for Mediadex.
//!
//! [`MediaIndex`] is the entry point. It owns a [`ShardPool`] built once per
//! process, writes each new record to the next shard in round-robin order,
//! and answers searches by querying every shard and merging the pages.
//!
//! # Example
//!
//! ```rust
//! use mediadex_core::IncomingMedia;
//! use mediadex_index::{MediaIndex, SearchRequestBuilder, ShardPool};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let index = MediaIndex::in_memory(ShardPool::in_memory(2)?);
//!
//! let handle = mediadex_codec::encode_file_handle(&mediadex_codec::FileDescriptor::new(
//!     mediadex_codec::FileType::Video, 2, 1001, 77, Vec::new(),
//! ));
//! let incoming = IncomingMedia {
//!     file_id: handle,
//!     file_name: Some("The.Matrix.1999.mkv".to_string()),
//!     file_size: Some(1_500_000_000),
//!     ..Default::default()
//! };
//! assert!(index.save_file(&incoming).await?.accepted());
//!
//! let page = index
//!     .get_search_results(SearchRequestBuilder::default().query("the matrix").build()?)
//!     .await?;
//! assert_eq!(*page.total_results(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod index;
mod pattern;
mod pool;
mod records;
mod search;

pub use config::{MediadexConfig, MediadexConfigBuilder, ShardBackend, ShardConfig};
pub use index::{MediaIndex, SearchRequest, SearchRequestBuilder, ShardStats};
pub use pattern::compile_query;
pub use pool::{Shard, ShardPool};
pub use records::RecordStore;
pub use search::{REDUCED_PAGE_SIZE, SearchEngine};
