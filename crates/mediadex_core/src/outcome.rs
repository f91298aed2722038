//! Save outcome.

use serde::{Deserialize, Serialize};

/// Result of saving one record into its shard.
///
/// The three outcomes are the complete contract of a save: no partial
/// success exists.
///
/// # Examples
///
/// ```
/// use mediadex_core::SaveOutcome;
///
/// assert_eq!(SaveOutcome::Accepted.code(), 1);
/// assert!(!SaveOutcome::Duplicate.accepted());
/// assert_eq!(SaveOutcome::Invalid.as_tuple(), (false, 2));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    /// A record with the same key already exists in the chosen shard
    #[display("duplicate")]
    Duplicate,
    /// The record was inserted
    #[display("accepted")]
    Accepted,
    /// The record could not be built from the incoming data
    #[display("invalid")]
    Invalid,
}

impl SaveOutcome {
    /// Whether the record was stored.
    pub fn accepted(self) -> bool {
        matches!(self, SaveOutcome::Accepted)
    }

    /// Numeric outcome code: 0 duplicate, 1 accepted, 2 validation error.
    pub fn code(self) -> u8 {
        match self {
            SaveOutcome::Duplicate => 0,
            SaveOutcome::Accepted => 1,
            SaveOutcome::Invalid => 2,
        }
    }

    /// `(accepted, code)` pair as consumed by the command layer.
    pub fn as_tuple(self) -> (bool, u8) {
        (self.accepted(), self.code())
    }
}
