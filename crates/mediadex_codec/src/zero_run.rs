//! Zero-run byte transform.
//!
//! Every run of `0x00` bytes is replaced by the pair `(0x00, run_length)`.
//! Non-zero bytes pass through unchanged. A run longer than 255 bytes is
//! written as several pairs.

use mediadex_error::{DecodeError, DecodeErrorKind};

/// Collapse zero runs into `(0x00, len)` pairs.
///
/// # Examples
///
/// ```
/// use mediadex_codec::zero_run_encode;
///
/// assert_eq!(zero_run_encode(&[7, 0, 0, 0, 9]), vec![7, 0, 3, 9]);
/// assert_eq!(zero_run_encode(&[1, 2]), vec![1, 2]);
/// ```
pub fn zero_run_encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut run: u8 = 0;

    for &byte in data {
        if byte == 0 {
            if run == u8::MAX {
                out.extend_from_slice(&[0, run]);
                run = 0;
            }
            run += 1;
        } else {
            if run > 0 {
                out.extend_from_slice(&[0, run]);
                run = 0;
            }
            out.push(byte);
        }
    }

    if run > 0 {
        out.extend_from_slice(&[0, run]);
    }

    out
}

/// Expand `(0x00, len)` pairs back into zero runs.
///
/// # Errors
///
/// Returns [`DecodeErrorKind::DanglingZeroRun`] if the input ends with a
/// marker byte that has no count.
///
/// # Examples
///
/// ```
/// use mediadex_codec::zero_run_decode;
///
/// assert_eq!(zero_run_decode(&[7, 0, 3, 9]).unwrap(), vec![7, 0, 0, 0, 9]);
/// assert!(zero_run_decode(&[7, 0]).is_err());
/// ```
pub fn zero_run_decode(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(data.len() * 2);
    let mut bytes = data.iter();

    while let Some(&byte) = bytes.next() {
        if byte == 0 {
            let &run = bytes
                .next()
                .ok_or_else(|| DecodeError::new(DecodeErrorKind::DanglingZeroRun))?;
            out.resize(out.len() + usize::from(run), 0);
        } else {
            out.push(byte);
        }
    }

    Ok(out)
}
