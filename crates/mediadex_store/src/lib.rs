//! Per-shard media collection contract for Mediadex.
//!
//! A shard is one independent document collection. The search engine and the
//! save path talk to shards only through [`MediaCollection`], so backends are
//! interchangeable: this crate ships [`InMemoryCollection`], and
//! `mediadex_database` provides a PostgreSQL one.
//!
//! Chat settings are an external collaborator reached through
//! [`SettingsLookup`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod collection;
mod memory;
mod settings;

pub use collection::MediaCollection;
pub use memory::InMemoryCollection;
pub use settings::{InMemorySettings, SettingsLookup};
