//! Decoded platform file descriptor.

use crate::FileType;

/// Fields recovered from an opaque platform file handle.
///
/// `file_type`, `dc_id`, `media_id` and `access_hash` identify the stored
/// content and feed the primary key. `file_reference` is a mutable token the
/// platform may reissue for the same file.
///
/// # Examples
///
/// ```
/// use mediadex_core::{FileDescriptor, FileType};
///
/// let descriptor = FileDescriptor::new(FileType::Document, 4, 5_432_109_876, -77, vec![1, 2, 3]);
/// assert_eq!(*descriptor.dc_id(), 4);
/// assert_eq!(descriptor.file_reference(), &vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct FileDescriptor {
    /// Class of file
    file_type: FileType,
    /// Datacenter holding the file
    dc_id: i32,
    /// Platform media id
    media_id: i64,
    /// Access hash paired with the media id
    access_hash: i64,
    /// Raw file reference bytes (may be empty)
    file_reference: Vec<u8>,
}

impl FileDescriptor {
    /// Create a descriptor from its parts.
    pub fn new(
        file_type: FileType,
        dc_id: i32,
        media_id: i64,
        access_hash: i64,
        file_reference: Vec<u8>,
    ) -> Self {
        Self {
            file_type,
            dc_id,
            media_id,
            access_hash,
            file_reference,
        }
    }
}
