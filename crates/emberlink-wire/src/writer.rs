//! Append-only writer for Big Endian wire fields.

use bytes::BufMut;
use zeroize::Zeroize;

use crate::errors::{Result, WireError};

/// Width of the length prefix in front of a variable-length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixSize {
    /// One-byte prefix, values up to 255 bytes
    U8,
    /// Two-byte prefix, values up to 65535 bytes
    U16,
    /// Three-byte prefix, values up to 16777215 bytes
    U24,
}

impl PrefixSize {
    /// Largest value length this prefix can express.
    pub const fn max_len(self) -> usize {
        match self {
            Self::U8 => 0xFF,
            Self::U16 => 0xFFFF,
            Self::U24 => 0x00FF_FFFF,
        }
    }

    /// Width of the prefix itself in bytes.
    pub const fn width(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U24 => 3,
        }
    }
}

/// Append-only buffer writer producing Big Endian wire format.
///
/// Two modes:
/// - [`WireWriter::new`] for ordinary protocol fields
/// - [`WireWriter::secret`] for buffers carrying key material; the internal
///   buffer is zeroized when the writer is dropped, so a half-built secret
///   never survives an abandoned encode
///
/// [`WireWriter::finish`] hands the buffer to the caller, who then owns its
/// lifecycle.
pub struct WireWriter {
    buf: Vec<u8>,
    scrub: bool,
}

impl WireWriter {
    /// Create a writer for ordinary (non-secret) data.
    #[must_use]
    pub fn new() -> Self {
        Self { buf: Vec::new(), scrub: false }
    }

    /// Create a writer with preallocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: Vec::with_capacity(capacity), scrub: false }
    }

    /// Create a writer for secret data.
    ///
    /// The internal buffer is zeroized on drop. The capacity should cover the
    /// full encoding so the buffer never reallocates and leaves stale copies
    /// behind.
    #[must_use]
    pub fn secret(capacity: usize) -> Self {
        Self { buf: Vec::with_capacity(capacity), scrub: true }
    }

    /// Append a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    /// Append a 16-bit Big Endian integer.
    pub fn write_u16(&mut self, value: u16) {
        self.buf.put_u16(value);
    }

    /// Append a 24-bit Big Endian integer (low three bytes of `value`).
    pub fn write_u24(&mut self, value: u32) {
        debug_assert!(value <= PrefixSize::U24.max_len() as u32);
        self.buf.put_uint(u64::from(value), 3);
    }

    /// Append raw bytes with no framing.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    /// Append `length prefix || bytes` with the given prefix width.
    ///
    /// # Errors
    ///
    /// `WireError::ValueTooLarge` if `bytes` is longer than the prefix can
    /// express. Nothing is written in that case.
    pub fn write_var_bytes(&mut self, bytes: &[u8], prefix: PrefixSize) -> Result<()> {
        if bytes.len() > prefix.max_len() {
            return Err(WireError::ValueTooLarge { actual: bytes.len(), max: prefix.max_len() });
        }
        match prefix {
            PrefixSize::U8 => self.buf.put_u8(bytes.len() as u8),
            PrefixSize::U16 => self.buf.put_u16(bytes.len() as u16),
            PrefixSize::U24 => self.buf.put_uint(bytes.len() as u64, 3),
        }
        self.buf.put_slice(bytes);
        Ok(())
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the writer and return the encoded bytes.
    ///
    /// For a secret-mode writer, ownership of the bytes (and responsibility
    /// for their erasure) transfers to the caller.
    #[must_use]
    pub fn finish(mut self) -> Vec<u8> {
        core::mem::take(&mut self.buf)
    }
}

impl Default for WireWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for WireWriter {
    fn drop(&mut self) {
        if self.scrub {
            self.buf.zeroize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u16_is_big_endian() {
        let mut writer = WireWriter::new();
        writer.write_u16(0x1234);
        assert_eq!(writer.finish(), vec![0x12, 0x34]);
    }

    #[test]
    fn u24_writes_three_bytes() {
        let mut writer = WireWriter::new();
        writer.write_u24(0x0001_0203);
        assert_eq!(writer.finish(), vec![0x01, 0x02, 0x03]);
    }

    #[test]
    fn var_bytes_u16_layout() {
        let mut writer = WireWriter::new();
        writer.write_var_bytes(&[0xAA, 0xBB, 0xCC], PrefixSize::U16).unwrap();
        assert_eq!(writer.finish(), vec![0x00, 0x03, 0xAA, 0xBB, 0xCC]);
    }

    #[test]
    fn var_bytes_empty_value() {
        let mut writer = WireWriter::new();
        writer.write_var_bytes(&[], PrefixSize::U16).unwrap();
        assert_eq!(writer.finish(), vec![0x00, 0x00]);
    }

    #[test]
    fn var_bytes_u8_rejects_oversized() {
        let mut writer = WireWriter::new();
        let result = writer.write_var_bytes(&[0u8; 256], PrefixSize::U8);
        assert_eq!(result, Err(WireError::ValueTooLarge { actual: 256, max: 255 }));
        assert!(writer.is_empty(), "rejected write must not leave partial output");
    }

    #[test]
    fn var_bytes_u16_rejects_oversized() {
        let bytes = vec![0u8; 65536];
        let mut writer = WireWriter::new();
        let result = writer.write_var_bytes(&bytes, PrefixSize::U16);
        assert_eq!(result, Err(WireError::ValueTooLarge { actual: 65536, max: 65535 }));
    }

    #[test]
    fn var_bytes_u16_accepts_max() {
        let bytes = vec![0x55u8; 65535];
        let mut writer = WireWriter::new();
        writer.write_var_bytes(&bytes, PrefixSize::U16).unwrap();
        let out = writer.finish();
        assert_eq!(out.len(), 65537);
        assert_eq!(&out[..2], &[0xFF, 0xFF]);
    }

    #[test]
    fn secret_writer_finish_hands_over_bytes() {
        let mut writer = WireWriter::secret(8);
        writer.write_var_bytes(&[1, 2, 3], PrefixSize::U16).unwrap();
        assert_eq!(writer.finish(), vec![0x00, 0x03, 1, 2, 3]);
    }

    #[test]
    fn mixed_fields_concatenate() {
        let mut writer = WireWriter::with_capacity(16);
        writer.write_u8(0x16);
        writer.write_u16(0xFEFD);
        writer.write_bytes(&[0xDE, 0xAD]);
        assert_eq!(writer.len(), 5);
        assert_eq!(writer.finish(), vec![0x16, 0xFE, 0xFD, 0xDE, 0xAD]);
    }
}
