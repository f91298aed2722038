//! PostgreSQL shard collection backend for Mediadex.
//!
//! Each shard is one table in its own database. Rows carry a `seq BIGSERIAL`
//! column so `find` can return most recently inserted records first, and
//! `file_id` is the primary key, which gives shard-local uniqueness.
//!
//! Diesel is synchronous; every call is moved onto the blocking pool with
//! `tokio::task::spawn_blocking` and runs on an r2d2 pooled connection.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod collection;
mod schema;

pub use collection::{PgPool, PostgresCollection};
pub use schema::{ensure_schema, validate_table_name};
