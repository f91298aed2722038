//! Error types for the Mediadex sharded media index.
//!
//! This crate provides the foundation error types used throughout the Mediadex workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use mediadex_error::{MediadexResult, PatternError};
//!
//! fn compile() -> MediadexResult<()> {
//!     Err(PatternError::new("unclosed group"))?
//! }
//!
//! match compile() {
//!     Ok(()) => println!("compiled"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod decode;
mod error;
mod pattern;
mod search;
mod store;
mod validation;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use decode::{DecodeError, DecodeErrorKind};
pub use error::{MediadexError, MediadexErrorKind, MediadexResult};
pub use pattern::PatternError;
pub use search::{SearchError, SearchErrorKind};
pub use store::{StoreError, StoreErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
