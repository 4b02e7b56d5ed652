//! Cursor-style reader for Big Endian wire fields.

use crate::errors::{Result, WireError};
use crate::writer::PrefixSize;

/// Borrowing reader over a wire-encoded byte slice.
///
/// Reads never copy; variable-length fields come back as sub-slices of the
/// input. Every read is bounds-checked and fails with
/// [`WireError::UnexpectedEnd`] on truncated input.
#[derive(Debug)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    /// Create a reader over `buf`, positioned at its start.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Whether the input has been fully consumed.
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Read one byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let bytes = self.take(1)?;
        Ok(bytes[0])
    }

    /// Read a 16-bit Big Endian integer.
    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Read a 24-bit Big Endian integer into the low bytes of a `u32`.
    pub fn read_u24(&mut self) -> Result<u32> {
        let bytes = self.take(3)?;
        Ok(u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]]))
    }

    /// Read exactly `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.take(len)
    }

    /// Read `length prefix || bytes` written with the given prefix width.
    pub fn read_var_bytes(&mut self, prefix: PrefixSize) -> Result<&'a [u8]> {
        let len = match prefix {
            PrefixSize::U8 => usize::from(self.read_u8()?),
            PrefixSize::U16 => usize::from(self.read_u16()?),
            PrefixSize::U24 => self.read_u24()? as usize,
        };
        self.take(len)
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(WireError::UnexpectedEnd { needed: len, remaining: self.remaining() });
        }
        let start = self.pos;
        self.pos += len;
        Ok(&self.buf[start..self.pos])
    }
}
