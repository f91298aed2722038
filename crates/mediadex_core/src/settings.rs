//! Per-chat settings consumed by the search engine.

use serde::{Deserialize, Serialize};

/// Chat settings relevant to search.
///
/// Only `max_btn` is read by the core; it selects the fixed reduced page
/// size instead of the configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatSettings {
    /// Use the fixed reduced page size
    #[serde(default)]
    pub max_btn: bool,
}
