//! Tests for the identifier codec.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use mediadex_codec::{
    DecodeErrorKind, FILE_REFERENCE_FLAG, FileDescriptor, FileType, WEB_LOCATION_FLAG,
    decode_file_handle, decode_file_id, decode_file_ref, encode_file_handle, encode_file_id,
    encode_file_ref, unpack_new_file_id, zero_run_decode, zero_run_encode,
};

fn descriptor(reference: Vec<u8>) -> FileDescriptor {
    FileDescriptor::new(FileType::Video, 4, 5_812_339_004_112, -8_004_551_223, reference)
}

/// Build a handle by hand: payload fields, then version bytes.
fn raw_handle(payload: &[u8], version: &[u8]) -> String {
    let mut bytes = payload.to_vec();
    bytes.extend_from_slice(version);
    URL_SAFE_NO_PAD.encode(zero_run_encode(&bytes))
}

fn payload(type_id: i32, dc_id: i32, media_id: i64, access_hash: i64) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&type_id.to_le_bytes());
    out.extend_from_slice(&dc_id.to_le_bytes());
    out.extend_from_slice(&media_id.to_le_bytes());
    out.extend_from_slice(&access_hash.to_le_bytes());
    out
}

#[test]
fn test_encode_file_id_is_deterministic_and_unpadded() {
    let first = encode_file_id(&descriptor(vec![1, 2, 3]));
    let second = encode_file_id(&descriptor(vec![1, 2, 3]));

    assert_eq!(first, second);
    assert!(!first.contains('='));
    assert!(
        first
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
}

#[test]
fn test_file_id_ignores_file_reference() {
    let a = encode_file_id(&descriptor(vec![1, 2, 3]));
    let b = encode_file_id(&descriptor(vec![9; 40]));
    assert_eq!(a, b);
}

#[test]
fn test_file_id_decodes_to_packed_fields() {
    let source = descriptor(Vec::new());
    let packed = decode_file_id(&encode_file_id(&source)).unwrap();

    assert_eq!(*packed.file_type(), FileType::Video);
    assert_eq!(*packed.dc_id(), 4);
    assert_eq!(*packed.media_id(), 5_812_339_004_112);
    assert_eq!(*packed.access_hash(), -8_004_551_223);
}

#[test]
fn test_file_id_rejects_wrong_trailer() {
    let mut bytes = payload(5, 1, 2, 3);
    bytes.extend_from_slice(&[22, 5]);
    let forged = URL_SAFE_NO_PAD.encode(zero_run_encode(&bytes));

    let err = decode_file_id(&forged).unwrap_err();
    assert_eq!(err.kind(), &DecodeErrorKind::BadTrailer(vec![22, 5]));
}

#[test]
fn test_zero_run_short_runs_become_single_pair() {
    for k in 1..=255usize {
        let mut blob = vec![0xAB];
        blob.extend(std::iter::repeat_n(0u8, k));
        blob.push(0xCD);

        assert_eq!(zero_run_encode(&blob), vec![0xAB, 0, k as u8, 0xCD], "run of {k}");
    }
}

#[test]
fn test_zero_run_without_zeros_is_identity() {
    let blob = vec![1, 2, 3, 250, 255];
    assert_eq!(zero_run_encode(&blob), blob);
}

#[test]
fn test_zero_run_splits_long_runs() {
    let blob = vec![0u8; 300];
    let encoded = zero_run_encode(&blob);

    assert_eq!(encoded, vec![0, 255, 0, 45]);
    assert_eq!(zero_run_decode(&encoded).unwrap(), blob);
}

#[test]
fn test_zero_run_flushes_trailing_run() {
    assert_eq!(zero_run_encode(&[5, 0, 0]), vec![5, 0, 2]);
}

#[test]
fn test_zero_run_dangling_marker_is_error() {
    let err = zero_run_decode(&[1, 0]).unwrap_err();
    assert_eq!(err.kind(), &DecodeErrorKind::DanglingZeroRun);
}

#[test]
fn test_handle_round_trip_with_reference() {
    let source = descriptor((0u8..37).collect());
    let decoded = decode_file_handle(&encode_file_handle(&source)).unwrap();
    assert_eq!(decoded, source);
}

#[test]
fn test_handle_round_trip_with_long_reference() {
    let source = descriptor(vec![0x5A; 300]);
    let decoded = decode_file_handle(&encode_file_handle(&source)).unwrap();
    assert_eq!(decoded.file_reference().len(), 300);
    assert_eq!(decoded, source);
}

#[test]
fn test_handle_accepts_padded_base64() {
    let handle = encode_file_handle(&descriptor(vec![7, 7]));
    let padding = (4 - handle.len() % 4) % 4;
    let padded = format!("{handle}{}", "=".repeat(padding));

    assert!(decode_file_handle(&padded).is_ok());
}

#[test]
fn test_handle_version_three_has_no_minor_byte() {
    let handle = raw_handle(&payload(FileType::Document.id(), 2, 77, 88), &[3]);
    let decoded = decode_file_handle(&handle).unwrap();

    assert_eq!(*decoded.file_type(), FileType::Document);
    assert_eq!(*decoded.media_id(), 77);
    assert!(decoded.file_reference().is_empty());
}

#[test]
fn test_handle_ignores_trailing_photo_size() {
    let mut body = payload(FileType::Photo.id(), 1, 11, 22);
    body.extend_from_slice(&[1, 0, 0, 0, 120, 0, 0, 0]);
    let decoded = decode_file_handle(&raw_handle(&body, &[30, 4])).unwrap();

    assert_eq!(*decoded.file_type(), FileType::Photo);
    assert_eq!(*decoded.access_hash(), 22);
}

#[test]
fn test_handle_unsupported_version() {
    let handle = raw_handle(&payload(5, 1, 1, 1), &[30, 9]);
    let err = decode_file_handle(&handle).unwrap_err();
    assert_eq!(err.kind(), &DecodeErrorKind::UnsupportedVersion(9));
}

#[test]
fn test_handle_web_location_rejected() {
    let handle = raw_handle(&payload(5 | WEB_LOCATION_FLAG, 1, 1, 1), &[30, 4]);
    let err = decode_file_handle(&handle).unwrap_err();
    assert_eq!(err.kind(), &DecodeErrorKind::WebLocation);
}

#[test]
fn test_handle_unknown_type_rejected() {
    let handle = raw_handle(&payload(99, 1, 1, 1), &[30, 4]);
    let err = decode_file_handle(&handle).unwrap_err();
    assert_eq!(err.kind(), &DecodeErrorKind::UnknownFileType(99));
}

#[test]
fn test_handle_truncated_payload() {
    let body = payload(5 | FILE_REFERENCE_FLAG, 1, 1, 1);
    let handle = raw_handle(&body[..10], &[30, 4]);
    let err = decode_file_handle(&handle).unwrap_err();
    assert!(matches!(err.kind(), DecodeErrorKind::Truncated { .. }));
}

#[test]
fn test_handle_bad_base64() {
    let err = decode_file_handle("abc$def").unwrap_err();
    assert!(matches!(err.kind(), DecodeErrorKind::InvalidBase64(_)));
}

#[test]
fn test_unpack_new_file_id_pairs() {
    let with_ref = descriptor(vec![4, 5, 6]);
    let (file_id, file_ref) = unpack_new_file_id(&encode_file_handle(&with_ref)).unwrap();

    assert_eq!(file_id, encode_file_id(&with_ref));
    let file_ref = file_ref.unwrap();
    assert_eq!(file_ref, encode_file_ref(&[4, 5, 6]));
    assert_eq!(decode_file_ref(&file_ref).unwrap(), vec![4, 5, 6]);
}

/// Document handle laid out as the platform issues it (v4.30, 28-byte
/// reference), with `file_id` and `file_ref` as produced by the reference
/// encoder. None of these strings come from this crate.
const DOCUMENT_HANDLE: &str =
    "BQACAgQAAxwCAAIOi2XzosEABJwdfk9aa3yNng8aKzxNXgADL0Sv72lHqUhWFEQzQseX1B4E";
const DOCUMENT_FILE_ID: &str = "BQADBAADL0Sv72lHqUhWFEQzQseX1BYE";
const DOCUMENT_FILE_REF: &str = "AgAADotl86LBAAAAAJwdfk9aa3yNng8aKzxNXg";

#[test]
fn test_fixed_document_handle_decodes_to_known_fields() {
    let descriptor = decode_file_handle(DOCUMENT_HANDLE).unwrap();

    assert_eq!(*descriptor.file_type(), FileType::Document);
    assert_eq!(*descriptor.dc_id(), 4);
    assert_eq!(*descriptor.media_id(), 5_235_794_562_113_291_311);
    assert_eq!(*descriptor.access_hash(), -3_127_812_329_043_651_498);
    assert_eq!(descriptor.file_reference().len(), 28);
}

#[test]
fn test_fixed_document_handle_yields_known_identifiers() {
    let (file_id, file_ref) = unpack_new_file_id(DOCUMENT_HANDLE).unwrap();

    assert_eq!(file_id, DOCUMENT_FILE_ID);
    assert_eq!(file_ref.as_deref(), Some(DOCUMENT_FILE_REF));

    let descriptor = decode_file_handle(DOCUMENT_HANDLE).unwrap();
    assert_eq!(encode_file_handle(&descriptor), DOCUMENT_HANDLE);
}
