//! Command handlers.

use super::OutputFormat;
use mediadex::{
    IncomingMedia, MediaIndex, MediadexResult, SaveOutcome, SearchRequestBuilder, StoreError,
    StoreErrorKind, decode_file_handle, encode_file_id, encode_file_ref,
};
use std::path::Path;
use tracing::error;

fn to_json(value: &impl serde::Serialize) -> MediadexResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| StoreError::new(StoreErrorKind::Serialization(e.to_string())).into())
}

/// Decode a platform handle and print the descriptor and derived identifiers.
pub fn decode_handle(handle: &str, format: OutputFormat) -> MediadexResult<()> {
    let descriptor = decode_file_handle(handle)?;
    let file_id = encode_file_id(&descriptor);
    let file_ref = encode_file_ref(descriptor.file_reference());

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "file_type": descriptor.file_type().to_string(),
                "dc_id": descriptor.dc_id(),
                "media_id": descriptor.media_id(),
                "access_hash": descriptor.access_hash(),
                "file_id": file_id,
                "file_ref": file_ref,
            });
            println!("{}", to_json(&value)?);
        }
        OutputFormat::Human => {
            println!("File type:   {}", descriptor.file_type());
            println!("DC:          {}", descriptor.dc_id());
            println!("Media id:    {}", descriptor.media_id());
            println!("Access hash: {}", descriptor.access_hash());
            println!("file_id:     {}", file_id);
            println!("file_ref:    {}", file_ref);
        }
    }

    Ok(())
}

/// Save one record and print its outcome.
pub async fn save_file(index: &MediaIndex, incoming: IncomingMedia) -> MediadexResult<()> {
    let outcome = index.save_file(&incoming).await?;
    let (accepted, code) = outcome.as_tuple();
    println!("{} (accepted={}, code={})", outcome, accepted, code);
    Ok(())
}

/// Save every record in a JSON lines file and print a tally.
pub async fn import_file(index: &MediaIndex, path: &Path) -> MediadexResult<()> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        StoreError::new(StoreErrorKind::Unavailable(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    let (mut accepted, mut duplicate, mut invalid) = (0usize, 0usize, 0usize);
    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let incoming: IncomingMedia = match serde_json::from_str(line) {
            Ok(incoming) => incoming,
            Err(e) => {
                error!(line = number + 1, error = %e, "Skipping unparseable record");
                invalid += 1;
                continue;
            }
        };

        match index.save_file(&incoming).await? {
            SaveOutcome::Accepted => accepted += 1,
            SaveOutcome::Duplicate => duplicate += 1,
            SaveOutcome::Invalid => invalid += 1,
        }
    }

    println!(
        "Imported {}: {} accepted, {} duplicate, {} invalid",
        path.display(),
        accepted,
        duplicate,
        invalid
    );
    Ok(())
}

/// Run one search and print the page.
#[allow(clippy::too_many_arguments)]
pub async fn search(
    index: &MediaIndex,
    query: String,
    file_type: Option<String>,
    offset: usize,
    max_results: usize,
    chat_id: Option<i64>,
    captions: bool,
    names_only: bool,
    format: OutputFormat,
) -> MediadexResult<()> {
    let mut builder = SearchRequestBuilder::default();
    builder.query(query).offset(offset).max_results(max_results);
    if let Some(file_type) = file_type {
        builder.file_type(file_type);
    }
    if let Some(chat_id) = chat_id {
        builder.chat_id(chat_id);
    }
    if captions {
        builder.use_caption(true);
    } else if names_only {
        builder.use_caption(false);
    }

    let page = index.get_search_results(builder.build()?).await?;

    match format {
        OutputFormat::Json => println!("{}", to_json(&page)?),
        OutputFormat::Human => {
            println!("{:-<80}", "");
            for media in page.results() {
                println!(
                    "{}  [{} bytes]  {}",
                    media.file_name(),
                    media.file_size(),
                    media.file_id()
                );
            }
            println!("{:-<80}", "");
            match page.next_offset() {
                Some(next) => println!(
                    "Total: {} matches, next offset {}",
                    page.total_results(),
                    next
                ),
                None => println!("Total: {} matches", page.total_results()),
            }
        }
    }

    Ok(())
}

/// Print per-shard record counts.
pub async fn shard_stats(index: &MediaIndex, format: OutputFormat) -> MediadexResult<()> {
    let stats = index.shard_stats().await?;

    match format {
        OutputFormat::Json => println!("{}", to_json(&stats)?),
        OutputFormat::Human => {
            for shard in &stats {
                println!(
                    "{:<20} {:<10} {:>10}",
                    shard.name(),
                    shard.backend(),
                    shard.records()
                );
            }
            let total: u64 = stats.iter().map(|s| *s.records()).sum();
            println!("Total: {} records in {} shards", total, stats.len());
        }
    }

    Ok(())
}
