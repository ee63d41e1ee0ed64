//! src/decryptor/read.rs
//! Bounds-checked reading over an in-memory container.
//!
//! Every read either returns the requested bytes or a [`KdbxError::Format`] naming
//! what was being read; nothing in the pipeline indexes a buffer directly.

use crate::error::KdbxError;
use std::io::Read;

/// Read exactly `N` bytes from a reader into a stack-allocated `[u8; N]`.
#[inline(always)]
pub fn read_exact_span<R, const N: usize>(reader: &mut R) -> Result<[u8; N], KdbxError>
where
    R: Read,
{
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(KdbxError::Io)?;
    Ok(buf)
}

/// Forward-only cursor over a byte slice.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Current offset from the start of the underlying slice.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Everything not yet consumed.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        self.data.get(self.position..).unwrap_or_default()
    }

    /// Consume `len` bytes, or fail without moving if fewer remain.
    pub fn take(&mut self, len: usize, what: &str) -> Result<&'a [u8], KdbxError> {
        let start = self.position;
        let slice = start
            .checked_add(len)
            .and_then(|end| self.data.get(start..end))
            .ok_or_else(|| {
                KdbxError::Format(format!(
                    "truncated {what}: need {len} bytes at offset {start}, {} available",
                    self.remaining()
                ))
            })?;
        self.position += len;
        Ok(slice)
    }

    /// Skip `len` bytes with the same bounds rules as [`take`](Self::take).
    pub fn skip(&mut self, len: usize, what: &str) -> Result<(), KdbxError> {
        self.take(len, what).map(|_| ())
    }

    #[inline]
    pub fn read_span<const N: usize>(&mut self, what: &str) -> Result<[u8; N], KdbxError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.take(N, what)?);
        Ok(buf)
    }

    #[inline]
    pub fn read_u8(&mut self, what: &str) -> Result<u8, KdbxError> {
        Ok(self.read_span::<1>(what)?[0])
    }

    #[inline]
    pub fn read_u16_le(&mut self, what: &str) -> Result<u16, KdbxError> {
        self.read_span(what).map(u16::from_le_bytes)
    }

    #[inline]
    pub fn read_u32_le(&mut self, what: &str) -> Result<u32, KdbxError> {
        self.read_span(what).map(u32::from_le_bytes)
    }

    #[inline]
    pub fn read_u64_le(&mut self, what: &str) -> Result<u64, KdbxError> {
        self.read_span(what).map(u64::from_le_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_integers_in_order() {
        let data = [0x01, 0x02, 0x00, 0x03, 0x00, 0x00, 0x00, 0xff];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_u8("a").unwrap(), 1);
        assert_eq!(cursor.read_u16_le("b").unwrap(), 2);
        assert_eq!(cursor.read_u32_le("c").unwrap(), 3);
        assert_eq!(cursor.position(), 7);
        assert_eq!(cursor.rest(), &[0xff]);
    }

    #[test]
    fn overrun_is_format_error_and_does_not_advance() {
        let data = [0u8; 3];
        let mut cursor = ByteCursor::new(&data);
        let err = cursor.read_u32_le("block length").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Format error: truncated block length: need 4 bytes at offset 0, 3 available"
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn huge_take_does_not_overflow() {
        let data = [0u8; 8];
        let mut cursor = ByteCursor::new(&data);
        cursor.skip(4, "pad").unwrap();
        assert!(cursor.take(usize::MAX, "block data").is_err());
        assert_eq!(cursor.remaining(), 4);
    }

    #[test]
    fn read_exact_span_from_reader() {
        let mut reader = std::io::Cursor::new(vec![9u8, 8, 7]);
        let span: [u8; 2] = read_exact_span(&mut reader).unwrap();
        assert_eq!(span, [9, 8]);
        assert!(read_exact_span::<_, 2>(&mut reader).is_err());
    }
}
