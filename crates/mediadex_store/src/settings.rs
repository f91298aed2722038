//! Chat settings lookup.

use async_trait::async_trait;
use mediadex_core::ChatSettings;
use mediadex_error::MediadexResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Source of per-chat settings.
#[async_trait]
pub trait SettingsLookup: Send + Sync {
    /// Settings for `chat_id`; chats without stored settings get defaults.
    async fn get_settings(&self, chat_id: i64) -> MediadexResult<ChatSettings>;
}

/// Settings held in memory, defaulting for unknown chats.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettings {
    chats: Arc<RwLock<HashMap<i64, ChatSettings>>>,
}

impl InMemorySettings {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store settings for one chat.
    pub async fn set(&self, chat_id: i64, settings: ChatSettings) {
        tracing::debug!(chat_id, max_btn = settings.max_btn, "Updating chat settings");
        self.chats.write().await.insert(chat_id, settings);
    }
}

#[async_trait]
impl SettingsLookup for InMemorySettings {
    async fn get_settings(&self, chat_id: i64) -> MediadexResult<ChatSettings> {
        Ok(self
            .chats
            .read()
            .await
            .get(&chat_id)
            .copied()
            .unwrap_or_default())
    }
}
