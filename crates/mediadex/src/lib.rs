//! Mediadex: a sharded media file index.
//!
//! Records contributed by a chat platform are spread across several
//! independent shards in round-robin order and searched by name or caption
//! with one logical query that fans out to every shard.
//!
//! # Architecture
//!
//! Mediadex is organized as a workspace with focused crates:
//!
//! - `mediadex_error` - Error types
//! - `mediadex_core` - Records, filters, outcomes and pages
//! - `mediadex_codec` - Platform file handle decoding and compact identifiers
//! - `mediadex_store` - Shard collection trait and in-memory backend
//! - `mediadex_database` - PostgreSQL shard backend
//! - `mediadex_index` - Shard pool, save path, search engine and configuration
//!
//! This crate (`mediadex`) re-exports everything for convenience.
//!
//! # Quick Start
//!
//! ```rust
//! use mediadex::{IncomingMedia, MediaIndex, SearchRequestBuilder, ShardPool};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let index = MediaIndex::in_memory(ShardPool::in_memory(2)?);
//!
//! let handle = mediadex::encode_file_handle(&mediadex::FileDescriptor::new(
//!     mediadex::FileType::Audio, 1, 42, 4242, vec![9, 9],
//! ));
//! let outcome = index
//!     .save_file(&IncomingMedia {
//!         file_id: handle,
//!         file_name: Some("my_cat_song.mp3".to_string()),
//!         file_size: Some(3_000_000),
//!         ..Default::default()
//!     })
//!     .await?;
//! assert_eq!(outcome.as_tuple(), (true, 1));
//!
//! let page = index
//!     .get_search_results(SearchRequestBuilder::default().query("cat").build()?)
//!     .await?;
//! assert_eq!(page.results()[0].file_name(), "my cat song mp3");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use mediadex_codec::*;
pub use mediadex_core::*;
pub use mediadex_database::*;
pub use mediadex_error::*;
pub use mediadex_index::*;
pub use mediadex_store::*;
