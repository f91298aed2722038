//! Platform file handle decode errors.

/// Kinds of decode failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DecodeErrorKind {
    /// Handle is not valid URL-safe base64
    #[display("Invalid base64: {}", _0)]
    InvalidBase64(String),
    /// Payload ended before a field could be read
    #[display("Truncated payload: needed {} bytes at offset {}, {} available", needed, offset, available)]
    Truncated {
        /// Bytes required by the field being read
        needed: usize,
        /// Offset the read started at
        offset: usize,
        /// Total payload length
        available: usize,
    },
    /// Handle major version is not supported
    #[display("Unsupported handle version: {}", _0)]
    UnsupportedVersion(u8),
    /// Handle points at a web location rather than stored media
    #[display("Web location handles cannot be indexed")]
    WebLocation,
    /// File type id outside the known range
    #[display("Unknown file type id: {}", _0)]
    UnknownFileType(i32),
    /// A zero-run marker was the final byte, with no count following it
    #[display("Zero-run marker without a count byte")]
    DanglingZeroRun,
    /// Encoded identifier does not end with the expected trailer
    #[display("Unexpected identifier trailer: {:?}", _0)]
    BadTrailer(Vec<u8>),
}

/// Decode error with location tracking.
///
/// # Examples
///
/// ```
/// use mediadex_error::{DecodeError, DecodeErrorKind};
///
/// let err = DecodeError::new(DecodeErrorKind::UnsupportedVersion(2));
/// assert!(format!("{}", err).contains("Unsupported handle version: 2"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Decode Error: {} at line {} in {}", kind, line, file)]
pub struct DecodeError {
    /// The kind of error that occurred
    pub kind: DecodeErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DecodeError {
    /// Create a new decode error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DecodeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }
}
