//! Fan-out search errors.

/// Conditions that abort a whole fan-out search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SearchErrorKind {
    /// One shard failed its count or find; the search is abandoned
    #[display("Shard '{}' failed: {}", shard, reason)]
    ShardFailed {
        /// Name of the failing shard
        shard: String,
        /// Underlying store error message
        reason: String,
    },
    /// The fan-out did not finish before the configured deadline
    #[display("Search exceeded deadline of {}ms", _0)]
    DeadlineExceeded(u64),
}

/// Search error with location tracking.
///
/// # Examples
///
/// ```
/// use mediadex_error::{SearchError, SearchErrorKind};
///
/// let err = SearchError::new(SearchErrorKind::DeadlineExceeded(250));
/// assert!(format!("{}", err).contains("250ms"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Search Error: {} at line {} in {}", kind, line, file)]
pub struct SearchError {
    /// The kind of error that occurred
    pub kind: SearchErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SearchError {
    /// Create a new search error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SearchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SearchErrorKind {
        &self.kind
    }
}
