//! Core data types for the Mediadex sharded media index.
//!
//! This crate provides the record, descriptor and search types shared by the
//! codec, the shard collections and the search engine.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod descriptor;
mod file_type;
mod filter;
mod media;
mod outcome;
mod page;
mod settings;
mod telemetry;

pub use descriptor::FileDescriptor;
pub use file_type::FileType;
pub use filter::{MediaFilter, SearchPattern};
pub use media::{IncomingMedia, Media, MediaBuilder, normalize_file_name};
pub use outcome::SaveOutcome;
pub use page::SearchPage;
pub use settings::ChatSettings;
pub use telemetry::init_tracing;
