//! Compact identifier codec for platform file handles.
//!
//! A platform handle is a URL-safe base64 string wrapping a zero-run encoded
//! binary descriptor. This crate decodes handles into [`FileDescriptor`]s and
//! derives the two strings the index stores:
//!
//! - **file_id**: the fixed 24-byte `(type, dc, media_id, access_hash)` layout
//!   plus a two byte trailer, zero-run encoded and base64'd. Stable for the
//!   lifetime of the underlying file.
//! - **file_ref**: the raw reference token, base64'd. May change whenever the
//!   platform reissues the handle.
//!
//! # Example
//!
//! ```rust
//! use mediadex_codec::{decode_file_id, encode_file_handle, unpack_new_file_id};
//! use mediadex_core::{FileDescriptor, FileType};
//!
//! let descriptor = FileDescriptor::new(FileType::Document, 2, 5_000_000_001, 99, vec![7; 20]);
//! let handle = encode_file_handle(&descriptor);
//!
//! let (file_id, file_ref) = unpack_new_file_id(&handle).unwrap();
//! assert!(!file_id.contains('='));
//! assert!(file_ref.is_some());
//!
//! let packed = decode_file_id(&file_id).unwrap();
//! assert_eq!(*packed.media_id(), 5_000_000_001);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod file_id;
mod handle;
mod reader;
mod zero_run;

pub use file_id::{
    FILE_ID_TRAILER, PackedFileId, decode_file_id, decode_file_ref, encode_file_id,
    encode_file_ref, unpack_new_file_id,
};
pub use handle::{
    FILE_REFERENCE_FLAG, HANDLE_MAJOR_VERSION, HANDLE_MINOR_VERSION, WEB_LOCATION_FLAG,
    decode_file_handle, encode_file_handle,
};
pub use zero_run::{zero_run_decode, zero_run_encode};

pub use mediadex_core::{FileDescriptor, FileType};
pub use mediadex_error::{DecodeError, DecodeErrorKind};
