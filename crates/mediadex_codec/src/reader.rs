//! Little-endian payload reader.

use mediadex_error::{DecodeError, DecodeErrorKind};

/// Cursor over a decoded handle payload.
pub(crate) struct PayloadReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> PayloadReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    #[track_caller]
    fn take(&mut self, needed: usize) -> Result<&'a [u8], DecodeError> {
        let end = self.offset.checked_add(needed).filter(|end| *end <= self.data.len());
        let Some(end) = end else {
            return Err(DecodeError::new(DecodeErrorKind::Truncated {
                needed,
                offset: self.offset,
                available: self.data.len(),
            }));
        };

        let slice = &self.data[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.take(N)?);
        Ok(buf)
    }

    pub(crate) fn read_i32(&mut self) -> Result<i32, DecodeError> {
        Ok(i32::from_le_bytes(self.take_array()?))
    }

    pub(crate) fn read_i64(&mut self) -> Result<i64, DecodeError> {
        Ok(i64::from_le_bytes(self.take_array()?))
    }

    /// Read a TL-serialised byte string.
    ///
    /// Short form: one length byte (≤ 253), data, zero padding so that
    /// length byte plus data is a multiple of four. Long form: `254`, a
    /// three byte little-endian length, data, padding on the data alone.
    pub(crate) fn read_tl_bytes(&mut self) -> Result<Vec<u8>, DecodeError> {
        let [first] = self.take_array::<1>()?;

        let (length, header) = if first <= 253 {
            (usize::from(first), 1)
        } else {
            let [a, b, c] = self.take_array::<3>()?;
            (u32::from_le_bytes([a, b, c, 0]) as usize, 4)
        };

        let bytes = self.take(length)?.to_vec();
        let padding = (4 - (header + length) % 4) % 4;
        self.take(padding)?;

        Ok(bytes)
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }
}

/// Serialise bytes in TL form, inverse of [`PayloadReader::read_tl_bytes`].
pub(crate) fn write_tl_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    let header = if bytes.len() <= 253 {
        out.push(bytes.len() as u8);
        1
    } else {
        out.push(254);
        let len = (bytes.len() as u32).to_le_bytes();
        out.extend_from_slice(&len[..3]);
        4
    };

    out.extend_from_slice(bytes);
    let padding = (4 - (header + bytes.len()) % 4) % 4;
    out.extend(std::iter::repeat_n(0u8, padding));
}
