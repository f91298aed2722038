//! Record validation errors.

/// Validation failure conditions for a media record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Required field absent
    #[display("Missing required field: {}", _0)]
    MissingField(String),
    /// File name is blank once separators are normalised
    #[display("File name is empty after normalisation")]
    EmptyFileName,
    /// File size below zero
    #[display("File size must be non-negative, got {}", _0)]
    NegativeFileSize(i64),
    /// Platform handle could not be turned into an identifier
    #[display("Unresolvable file identifier: {}", _0)]
    UnresolvableIdentifier(String),
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use mediadex_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::MissingField("file_size".to_string()));
/// assert!(format!("{}", err).contains("file_size"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}
