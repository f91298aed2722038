//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Mediadex - sharded media file index with fan-out search
#[derive(Parser, Debug)]
#[command(name = "mediadex")]
#[command(about = "Sharded media file index with fan-out search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file layered over the default sources
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a platform file handle and print its identifiers
    Decode {
        /// Opaque platform file handle
        handle: String,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Save one file into the next shard
    Save {
        /// Opaque platform file handle
        #[arg(long)]
        handle: String,

        /// File name
        #[arg(long)]
        name: String,

        /// Size in bytes
        #[arg(long)]
        size: i64,

        /// File type (document, video, audio, ...)
        #[arg(long)]
        file_type: Option<String>,

        /// MIME type
        #[arg(long)]
        mime_type: Option<String>,

        /// Caption markup
        #[arg(long)]
        caption: Option<String>,
    },

    /// Save every record in a JSON lines file
    Import {
        /// File with one JSON object per line
        path: PathBuf,
    },

    /// Search every shard
    Search {
        /// Free-text query
        query: String,

        /// Restrict to one file type
        #[arg(long)]
        file_type: Option<String>,

        /// Per-shard offset
        #[arg(long, default_value = "0")]
        offset: usize,

        /// Page size when no chat is given
        #[arg(long, default_value = "10")]
        max_results: usize,

        /// Chat whose settings choose the page size
        #[arg(long, allow_hyphen_values = true)]
        chat_id: Option<i64>,

        /// Search captions as well as file names
        #[arg(long, conflicts_with = "names_only")]
        captions: bool,

        /// Search file names only, even if caption search is enabled
        #[arg(long)]
        names_only: bool,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show record counts per shard
    Stats {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
