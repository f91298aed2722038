//! Search pattern compilation errors.

/// Search query could not be compiled into a match pattern.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pattern Error: {} at line {} in {}", message, line, file)]
pub struct PatternError {
    /// Compiler message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl PatternError {
    /// Create a new PatternError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediadex_error::PatternError;
    ///
    /// let err = PatternError::new("unclosed character class");
    /// assert!(err.message.contains("unclosed"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
