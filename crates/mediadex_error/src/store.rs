//! Shard collection error types.

/// Kinds of shard collection errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// A record with this key already exists in the shard
    #[display("Duplicate key: {}", _0)]
    DuplicateKey(String),
    /// Could not reach the shard's backing store
    #[display("Shard connection error: {}", _0)]
    Connection(String),
    /// Query execution failed
    #[display("Shard query error: {}", _0)]
    Query(String),
    /// Row could not be converted to or from a record
    #[display("Serialization error: {}", _0)]
    Serialization(String),
    /// Backing store is unavailable
    #[display("Shard unavailable: {}", _0)]
    Unavailable(String),
    /// Invalid shard configuration
    #[display("Invalid shard configuration: {}", _0)]
    InvalidConfig(String),
}

/// Shard collection error with location tracking.
///
/// # Examples
///
/// ```
/// use mediadex_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::Unavailable("shard-2".to_string()));
/// assert!(format!("{}", err).contains("unavailable"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new store error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoreErrorKind {
        &self.kind
    }
}

// Diesel error conversions (only available with database feature)
#[cfg(feature = "database")]
impl From<diesel::result::Error> for StoreError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        match err {
            Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                StoreError::new(StoreErrorKind::DuplicateKey(info.message().to_string()))
            }
            Error::DeserializationError(e) => {
                StoreError::new(StoreErrorKind::Serialization(e.to_string()))
            }
            _ => StoreError::new(StoreErrorKind::Query(err.to_string())),
        }
    }
}

#[cfg(feature = "database")]
impl From<diesel::ConnectionError> for StoreError {
    #[track_caller]
    fn from(err: diesel::ConnectionError) -> Self {
        StoreError::new(StoreErrorKind::Connection(err.to_string()))
    }
}

#[cfg(feature = "database")]
impl From<diesel::r2d2::PoolError> for StoreError {
    #[track_caller]
    fn from(err: diesel::r2d2::PoolError) -> Self {
        StoreError::new(StoreErrorKind::Connection(err.to_string()))
    }
}
