//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, DecodeError, PatternError, SearchError, StoreError,
    ValidationError,
};

/// Every error condition a Mediadex crate can surface.
///
/// # Examples
///
/// ```
/// use mediadex_error::{ConfigError, MediadexError};
///
/// let config_err = ConfigError::new("no shards configured");
/// let err: MediadexError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MediadexErrorKind {
    /// Platform file handle could not be decoded
    #[from(DecodeError)]
    Decode(DecodeError),
    /// Record failed validation
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Shard collection error (including duplicate keys)
    #[from(StoreError)]
    Store(StoreError),
    /// Search query could not be compiled
    #[from(PatternError)]
    Pattern(PatternError),
    /// Fan-out search failed
    #[from(SearchError)]
    Search(SearchError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Mediadex error with kind discrimination.
///
/// # Examples
///
/// ```
/// use mediadex_error::{MediadexErrorKind, MediadexResult, StoreError, StoreErrorKind};
///
/// fn insert() -> MediadexResult<()> {
///     Err(StoreError::new(StoreErrorKind::DuplicateKey("BAADAgAD".to_string())))?
/// }
///
/// let err = insert().unwrap_err();
/// assert!(err.is_duplicate_key());
/// assert!(matches!(err.kind(), MediadexErrorKind::Store(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Mediadex Error: {}", _0)]
pub struct MediadexError(Box<MediadexErrorKind>);

impl MediadexError {
    /// Create a new error from a kind.
    pub fn new(kind: MediadexErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MediadexErrorKind {
        &self.0
    }

    /// Whether this error is a shard-local primary key collision.
    pub fn is_duplicate_key(&self) -> bool {
        matches!(
            self.kind(),
            MediadexErrorKind::Store(StoreError {
                kind: crate::StoreErrorKind::DuplicateKey(_),
                ..
            })
        )
    }
}

// Generic From implementation for any type that converts to MediadexErrorKind
impl<T> From<T> for MediadexError
where
    T: Into<MediadexErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Mediadex operations.
pub type MediadexResult<T> = std::result::Result<T, MediadexError>;
