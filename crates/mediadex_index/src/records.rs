//! Save path: identifier derivation, validation and shard insert.

use crate::{Shard, ShardPool};
use mediadex_codec::unpack_new_file_id;
use mediadex_core::{IncomingMedia, Media, MediaBuilder, SaveOutcome};
use mediadex_error::{MediadexResult, ValidationError, ValidationErrorKind};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Writes new records into the shard pool.
///
/// Uniqueness of `file_id` is checked only inside the shard a record lands
/// on. The same file saved twice may be accepted twice if the two saves are
/// placed on different shards.
#[derive(Debug, Clone)]
pub struct RecordStore {
    pool: Arc<ShardPool>,
}

impl RecordStore {
    /// Create a record store over `pool`.
    pub fn new(pool: Arc<ShardPool>) -> Self {
        Self { pool }
    }

    /// Save a record into the next shard in round-robin order.
    ///
    /// # Errors
    ///
    /// Returns error only if the shard could not be written. Duplicates and
    /// invalid records are reported through [`SaveOutcome`].
    pub async fn save(&self, incoming: &IncomingMedia) -> MediadexResult<SaveOutcome> {
        let shard = self.pool.next_write_target();
        Self::save_to(shard, incoming).await
    }

    /// Save a record into `shard`.
    ///
    /// # Errors
    ///
    /// Returns error only if the shard could not be written.
    #[instrument(
        skip(shard, incoming),
        fields(shard = %shard.name(), file_name = ?incoming.file_name)
    )]
    pub async fn save_to(shard: &Shard, incoming: &IncomingMedia) -> MediadexResult<SaveOutcome> {
        let media = match build_media(incoming) {
            Ok(media) => media,
            Err(e) => {
                error!(error = %e, "Rejected file: validation failed");
                return Ok(SaveOutcome::Invalid);
            }
        };

        match shard.collection().insert(&media).await {
            Ok(()) => {
                info!(file_id = %media.file_id(), file_name = %media.file_name(), "Saved file");
                Ok(SaveOutcome::Accepted)
            }
            Err(e) if e.is_duplicate_key() => {
                warn!(
                    file_id = %media.file_id(),
                    file_name = %media.file_name(),
                    "File already saved in this shard"
                );
                Ok(SaveOutcome::Duplicate)
            }
            Err(e) => {
                error!(file_id = %media.file_id(), error = %e, "Shard insert failed");
                Err(e)
            }
        }
    }
}

fn build_media(incoming: &IncomingMedia) -> Result<Media, ValidationError> {
    let (file_id, file_ref) = unpack_new_file_id(&incoming.file_id).map_err(|e| {
        ValidationError::new(ValidationErrorKind::UnresolvableIdentifier(e.to_string()))
    })?;

    let mut builder = MediaBuilder::default();
    builder
        .file_id(file_id)
        .file_ref(file_ref)
        .file_type(incoming.file_type.clone())
        .mime_type(incoming.mime_type.clone())
        .caption(incoming.caption.clone());

    if let Some(name) = &incoming.file_name {
        builder.file_name(name.as_str());
    }
    if let Some(size) = incoming.file_size {
        builder.file_size(size);
    }

    builder.build()
}
