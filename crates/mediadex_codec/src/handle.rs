//! Platform file handle decoding.

use crate::reader::{PayloadReader, write_tl_bytes};
use crate::zero_run::{zero_run_decode, zero_run_encode};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use mediadex_core::{FileDescriptor, FileType};
use mediadex_error::{DecodeError, DecodeErrorKind};

/// Type-id flag: the payload carries a file reference.
pub const FILE_REFERENCE_FLAG: i32 = 1 << 25;

/// Type-id flag: the handle points at a web location.
pub const WEB_LOCATION_FLAG: i32 = 1 << 24;

/// Major handle version written by [`encode_file_handle`].
pub const HANDLE_MAJOR_VERSION: u8 = 4;

/// Minor handle version written by [`encode_file_handle`].
pub const HANDLE_MINOR_VERSION: u8 = 30;

/// Decode URL-safe base64 with or without `=` padding.
pub(crate) fn decode_base64(text: &str) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_NO_PAD
        .decode(text.trim_end_matches('='))
        .map_err(|e| DecodeError::new(DecodeErrorKind::InvalidBase64(e.to_string())))
}

/// Decode an opaque platform file handle.
///
/// Layout after base64 and zero-run decoding: payload, then (for major
/// version 4) a minor version byte, then the major version byte. Versions 2
/// and 3 carry no minor byte. The payload starts with little-endian
/// `type_id: i32` and `dc_id: i32`; if the reference flag is set a TL byte
/// string follows; then `media_id: i64` and `access_hash: i64`. Anything
/// after that (photo size metadata) is ignored.
///
/// # Errors
///
/// Returns a [`DecodeError`] for bad base64, unsupported versions, web
/// location handles, unknown file types or truncated payloads.
#[tracing::instrument(level = "debug", skip(handle), fields(len = handle.len()))]
pub fn decode_file_handle(handle: &str) -> Result<FileDescriptor, DecodeError> {
    let decoded = zero_run_decode(&decode_base64(handle)?)?;

    let Some((&major, rest)) = decoded.split_last() else {
        return Err(DecodeError::new(DecodeErrorKind::Truncated {
            needed: 1,
            offset: 0,
            available: 0,
        }));
    };

    let payload = match major {
        2 | 3 => rest,
        4 => match rest.split_last() {
            Some((_minor, payload)) => payload,
            None => {
                return Err(DecodeError::new(DecodeErrorKind::Truncated {
                    needed: 1,
                    offset: 0,
                    available: 0,
                }));
            }
        },
        other => return Err(DecodeError::new(DecodeErrorKind::UnsupportedVersion(other))),
    };

    let mut reader = PayloadReader::new(payload);
    let type_id = reader.read_i32()?;
    let dc_id = reader.read_i32()?;

    if type_id & WEB_LOCATION_FLAG != 0 {
        return Err(DecodeError::new(DecodeErrorKind::WebLocation));
    }

    let has_reference = type_id & FILE_REFERENCE_FLAG != 0;
    let file_type = FileType::try_from(type_id & !(FILE_REFERENCE_FLAG | WEB_LOCATION_FLAG))?;

    let file_reference = if has_reference {
        reader.read_tl_bytes()?
    } else {
        Vec::new()
    };

    let media_id = reader.read_i64()?;
    let access_hash = reader.read_i64()?;

    tracing::trace!(
        file_type = %file_type,
        dc_id,
        ignored = reader.remaining(),
        "Decoded file handle"
    );

    Ok(FileDescriptor::new(
        file_type,
        dc_id,
        media_id,
        access_hash,
        file_reference,
    ))
}

/// Encode a descriptor as a version 4 platform handle.
///
/// Writes the document-style layout (no photo size metadata). The reference
/// flag is set only when the descriptor carries reference bytes.
/// [`decode_file_handle`] inverts this.
pub fn encode_file_handle(descriptor: &FileDescriptor) -> String {
    let mut type_id = descriptor.file_type().id();
    if !descriptor.file_reference().is_empty() {
        type_id |= FILE_REFERENCE_FLAG;
    }

    let mut payload = Vec::with_capacity(32 + descriptor.file_reference().len());
    payload.extend_from_slice(&type_id.to_le_bytes());
    payload.extend_from_slice(&descriptor.dc_id().to_le_bytes());
    if !descriptor.file_reference().is_empty() {
        write_tl_bytes(&mut payload, descriptor.file_reference());
    }
    payload.extend_from_slice(&descriptor.media_id().to_le_bytes());
    payload.extend_from_slice(&descriptor.access_hash().to_le_bytes());
    payload.push(HANDLE_MINOR_VERSION);
    payload.push(HANDLE_MAJOR_VERSION);

    URL_SAFE_NO_PAD.encode(zero_run_encode(&payload))
}
