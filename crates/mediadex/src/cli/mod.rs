//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the mediadex binary.

mod commands;
mod handlers;

pub use commands::{Cli, Commands, OutputFormat};
pub use handlers::{decode_handle, import_file, save_file, search, shard_stats};
