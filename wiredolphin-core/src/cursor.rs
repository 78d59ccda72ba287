//! Bounds-checked reading over the captured bytes of a frame.
//!
//! Decoders never index into the frame directly. They read through a
//! [`Cursor`], which refuses any read that would cross the captured length
//! and reports it as [`DecodeError::Truncated`].

use crate::error::{DecodeError, Result};

/// A read position within the captured bytes of a frame.
///
/// Integers are read in network byte order.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor over the first `captured_length` bytes of `data`.
    ///
    /// `data` may hold more than was captured; bytes past `captured_length`
    /// are never exposed. A `captured_length` larger than `data` is clamped.
    pub fn new(data: &'a [u8], captured_length: usize) -> Self {
        Self {
            data,
            offset: 0,
            end: captured_length.min(data.len()),
        }
    }

    /// Offset of the next byte to read, from the start of the frame.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes left before the end of the captured data.
    pub fn remaining(&self) -> usize {
        self.end - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn check(&self, needed: usize) -> Result<()> {
        if needed > self.remaining() {
            return Err(DecodeError::Truncated {
                offset: self.offset,
                needed,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    /// Return the next `n` bytes and advance past them.
    pub fn read(&mut self, n: usize) -> Result<&'a [u8]> {
        self.check(n)?;
        let bytes = &self.data[self.offset..self.offset + n];
        self.offset += n;
        Ok(bytes)
    }

    /// Return the next `N` bytes as an array and advance past them.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read(N)?);
        Ok(out)
    }

    /// Advance past `n` bytes without looking at them.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.read(n).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let value = self.peek_u8()?;
        self.offset += 1;
        Ok(value)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let value = self.peek_u16()?;
        self.offset += 2;
        Ok(value)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let value = self.peek_u32()?;
        self.offset += 4;
        Ok(value)
    }

    pub fn peek_u8(&self) -> Result<u8> {
        self.check(1)?;
        Ok(self.data[self.offset])
    }

    pub fn peek_u16(&self) -> Result<u16> {
        self.check(2)?;
        let b = &self.data[self.offset..self.offset + 2];
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn peek_u32(&self) -> Result<u32> {
        self.check(4)?;
        let b = &self.data[self.offset..self.offset + 4];
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Split off a cursor over the next `n` bytes and advance past them.
    ///
    /// The returned cursor keeps frame-relative offsets but ends after `n`
    /// bytes, so a sub-decoder cannot read into what follows.
    pub fn take(&mut self, n: usize) -> Result<Cursor<'a>> {
        self.check(n)?;
        let sub = Cursor {
            data: self.data,
            offset: self.offset,
            end: self.offset + n,
        };
        self.offset += n;
        Ok(sub)
    }

    /// The rest of the captured bytes, without advancing.
    pub fn slice_to_end(&self) -> &'a [u8] {
        &self.data[self.offset..self.end]
    }
}
