//! Compact file id and file reference strings.

use crate::handle::{decode_base64, decode_file_handle};
use crate::zero_run::{zero_run_decode, zero_run_encode};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use mediadex_core::{FileDescriptor, FileType};
use mediadex_error::{DecodeError, DecodeErrorKind};

/// Two bytes appended to the packed layout before zero-run encoding.
pub const FILE_ID_TRAILER: [u8; 2] = [22, 4];

const PACKED_LEN: usize = 24;

/// The fixed-layout fields a compact file id carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct PackedFileId {
    /// Class of file
    file_type: FileType,
    /// Datacenter holding the file
    dc_id: i32,
    /// Platform media id
    media_id: i64,
    /// Access hash paired with the media id
    access_hash: i64,
}

/// Pack a descriptor into its compact file id.
///
/// The layout is little-endian `type_id: i32, dc_id: i32, media_id: i64,
/// access_hash: i64` with the flag bits cleared from `type_id`, followed by
/// [`FILE_ID_TRAILER`], zero-run encoded and base64'd without padding.
/// Descriptors that differ only in their file reference yield the same id.
pub fn encode_file_id(descriptor: &FileDescriptor) -> String {
    let mut packed = Vec::with_capacity(PACKED_LEN + FILE_ID_TRAILER.len());
    packed.extend_from_slice(&descriptor.file_type().id().to_le_bytes());
    packed.extend_from_slice(&descriptor.dc_id().to_le_bytes());
    packed.extend_from_slice(&descriptor.media_id().to_le_bytes());
    packed.extend_from_slice(&descriptor.access_hash().to_le_bytes());
    packed.extend_from_slice(&FILE_ID_TRAILER);

    URL_SAFE_NO_PAD.encode(zero_run_encode(&packed))
}

/// Unpack a compact file id produced by [`encode_file_id`].
///
/// # Errors
///
/// Returns a [`DecodeError`] if the string is not base64, the trailer is
/// wrong, the body is not 24 bytes or the type id is unknown.
pub fn decode_file_id(file_id: &str) -> Result<PackedFileId, DecodeError> {
    let decoded = zero_run_decode(&decode_base64(file_id)?)?;

    let Some(body) = decoded.strip_suffix(&FILE_ID_TRAILER) else {
        let tail = decoded[decoded.len().saturating_sub(2)..].to_vec();
        return Err(DecodeError::new(DecodeErrorKind::BadTrailer(tail)));
    };

    if body.len() != PACKED_LEN {
        return Err(DecodeError::new(DecodeErrorKind::Truncated {
            needed: PACKED_LEN,
            offset: 0,
            available: body.len(),
        }));
    }

    let (type_bytes, rest) = body.split_at(4);
    let (dc_bytes, rest) = rest.split_at(4);
    let (media_bytes, hash_bytes) = rest.split_at(8);

    let file_type = FileType::try_from(i32::from_le_bytes(le_array(type_bytes)))?;

    Ok(PackedFileId {
        file_type,
        dc_id: i32::from_le_bytes(le_array(dc_bytes)),
        media_id: i64::from_le_bytes(le_array(media_bytes)),
        access_hash: i64::from_le_bytes(le_array(hash_bytes)),
    })
}

fn le_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut buf = [0u8; N];
    buf.copy_from_slice(bytes);
    buf
}

/// Encode raw file reference bytes as unpadded URL-safe base64.
pub fn encode_file_ref(file_reference: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(file_reference)
}

/// Decode a string produced by [`encode_file_ref`].
///
/// # Errors
///
/// Returns [`DecodeErrorKind::InvalidBase64`] for malformed input.
pub fn decode_file_ref(file_ref: &str) -> Result<Vec<u8>, DecodeError> {
    decode_base64(file_ref)
}

/// Derive the stored `(file_id, file_ref)` pair from a platform handle.
///
/// `file_ref` is `None` when the handle carries no reference bytes.
///
/// # Errors
///
/// Propagates any [`DecodeError`] from [`decode_file_handle`].
///
/// # Examples
///
/// ```
/// use mediadex_codec::{FileDescriptor, FileType, encode_file_handle, unpack_new_file_id};
///
/// let bare = FileDescriptor::new(FileType::Audio, 1, 10, 20, Vec::new());
/// let (_, file_ref) = unpack_new_file_id(&encode_file_handle(&bare)).unwrap();
/// assert!(file_ref.is_none());
///
/// assert!(unpack_new_file_id("not*base64").is_err());
/// ```
pub fn unpack_new_file_id(handle: &str) -> Result<(String, Option<String>), DecodeError> {
    let descriptor = decode_file_handle(handle)?;
    let file_id = encode_file_id(&descriptor);
    let file_ref = if descriptor.file_reference().is_empty() {
        None
    } else {
        Some(encode_file_ref(descriptor.file_reference()))
    };

    Ok((file_id, file_ref))
}
