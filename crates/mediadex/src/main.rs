//! Mediadex CLI binary.
//!
//! This binary provides command-line access to the media index:
//! - Decode platform file handles
//! - Save records into the shard pool
//! - Search every shard and show per-shard stats

use clap::Parser;
use mediadex::{IncomingMedia, InMemorySettings, MediaIndex, MediadexConfig, init_tracing};
use std::sync::Arc;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use cli::{Cli, Commands, decode_handle, import_file, save_file, search, shard_stats};

    // Pick up DATABASE_URL-style overrides from .env
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json)?;

    // Decoding needs no shards
    if let Commands::Decode { handle, format } = &cli.command {
        decode_handle(handle, *format)?;
        return Ok(());
    }

    let config = MediadexConfig::load_with(cli.config.as_deref())?;
    let index = MediaIndex::from_config(config, Arc::new(InMemorySettings::new())).await?;

    match cli.command {
        Commands::Decode { .. } => {}

        Commands::Save {
            handle,
            name,
            size,
            file_type,
            mime_type,
            caption,
        } => {
            let incoming = IncomingMedia {
                file_id: handle,
                file_name: Some(name),
                file_size: Some(size),
                file_type,
                mime_type,
                caption,
            };
            save_file(&index, incoming).await?;
        }

        Commands::Import { path } => {
            import_file(&index, &path).await?;
        }

        Commands::Search {
            query,
            file_type,
            offset,
            max_results,
            chat_id,
            captions,
            names_only,
            format,
        } => {
            search(
                &index,
                query,
                file_type,
                offset,
                max_results,
                chat_id,
                captions,
                names_only,
                format,
            )
            .await?;
        }

        Commands::Stats { format } => {
            shard_stats(&index, format).await?;
        }
    }

    Ok(())
}
