//! Structured field encoding and decoding.
//!
//! Accessory payloads are flat sequences of fixed-width integer fields. The
//! [`Encoder`] and [`Decoder`] here read and write those fields with an
//! explicit byte order: a protocol family picks its order once and uses it
//! for every message. Both are pure computations over in-memory buffers;
//! neither performs I/O.

use bytes::BufMut;

use crate::error::WireError;

/// Byte order for multi-byte fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

/// Append-only writer for structured payload fields.
#[derive(Debug)]
pub struct Encoder {
    buf: Vec<u8>,
    endian: Endian,
}

impl Encoder {
    /// Create an encoder with the given byte order.
    pub fn with_endian(endian: Endian) -> Self {
        Encoder {
            buf: Vec::new(),
            endian,
        }
    }

    /// Create a big-endian encoder.
    pub fn big_endian() -> Self {
        Self::with_endian(Endian::Big)
    }

    /// Append a single byte.
    pub fn put_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    /// Append a single signed byte.
    pub fn put_i8(&mut self, value: i8) {
        self.buf.put_i8(value);
    }

    /// Append a 16-bit unsigned field.
    pub fn put_u16(&mut self, value: u16) {
        match self.endian {
            Endian::Big => self.buf.put_u16(value),
            Endian::Little => self.buf.put_u16_le(value),
        }
    }

    /// Append a 16-bit signed field.
    pub fn put_i16(&mut self, value: i16) {
        match self.endian {
            Endian::Big => self.buf.put_i16(value),
            Endian::Little => self.buf.put_i16_le(value),
        }
    }

    /// Append a 32-bit unsigned field.
    pub fn put_u32(&mut self, value: u32) {
        match self.endian {
            Endian::Big => self.buf.put_u32(value),
            Endian::Little => self.buf.put_u32_le(value),
        }
    }

    /// Append a 32-bit signed field.
    pub fn put_i32(&mut self, value: i32) {
        match self.endian {
            Endian::Big => self.buf.put_i32(value),
            Endian::Little => self.buf.put_i32_le(value),
        }
    }

    /// Append raw bytes as-is.
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the encoder and return the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Bounds-checked cursor over a received payload.
///
/// Every read fails with [`WireError::Truncated`] rather than panicking when
/// the input is shorter than the field being read.
#[derive(Debug)]
pub struct Decoder<'a> {
    input: &'a [u8],
    offset: usize,
    endian: Endian,
}

impl<'a> Decoder<'a> {
    /// Create a decoder with the given byte order.
    pub fn with_endian(endian: Endian, input: &'a [u8]) -> Self {
        Decoder {
            input,
            offset: 0,
            endian,
        }
    }

    /// Create a big-endian decoder.
    pub fn big_endian(input: &'a [u8]) -> Self {
        Self::with_endian(Endian::Big, input)
    }

    fn advance(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        let end = self.offset + len;
        if self.input.len() < end {
            return Err(WireError::Truncated {
                expected: end,
                actual: self.input.len(),
            });
        }
        let bytes = &self.input[self.offset..end];
        self.offset = end;
        Ok(bytes)
    }

    /// Read a single byte.
    pub fn u8(&mut self) -> Result<u8, WireError> {
        Ok(self.advance(1)?[0])
    }

    /// Read a single signed byte.
    pub fn i8(&mut self) -> Result<i8, WireError> {
        Ok(self.advance(1)?[0] as i8)
    }

    /// Read a 16-bit unsigned field.
    pub fn u16(&mut self) -> Result<u16, WireError> {
        let b = self.advance(2)?;
        let raw = [b[0], b[1]];
        Ok(match self.endian {
            Endian::Big => u16::from_be_bytes(raw),
            Endian::Little => u16::from_le_bytes(raw),
        })
    }

    /// Read a 16-bit signed field.
    pub fn i16(&mut self) -> Result<i16, WireError> {
        let b = self.advance(2)?;
        let raw = [b[0], b[1]];
        Ok(match self.endian {
            Endian::Big => i16::from_be_bytes(raw),
            Endian::Little => i16::from_le_bytes(raw),
        })
    }

    /// Read a 32-bit unsigned field.
    pub fn u32(&mut self) -> Result<u32, WireError> {
        let b = self.advance(4)?;
        let raw = [b[0], b[1], b[2], b[3]];
        Ok(match self.endian {
            Endian::Big => u32::from_be_bytes(raw),
            Endian::Little => u32::from_le_bytes(raw),
        })
    }

    /// Read a 32-bit signed field.
    pub fn i32(&mut self) -> Result<i32, WireError> {
        let b = self.advance(4)?;
        let raw = [b[0], b[1], b[2], b[3]];
        Ok(match self.endian {
            Endian::Big => i32::from_be_bytes(raw),
            Endian::Little => i32::from_le_bytes(raw),
        })
    }

    /// Read `len` raw bytes.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        self.advance(len)
    }

    /// Bytes not yet consumed.
    ///
    /// Payload decoders leave transport trailer bytes here rather than
    /// rejecting them.
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.offset..]
    }
}

/// A payload that writes its fields in wire order.
pub trait Encode {
    /// Append this value's wire fields to the encoder.
    fn encode(&self, enc: &mut Encoder);
}

/// A payload that reads its fields in wire order.
pub trait Decode: Sized {
    /// Read this value's wire fields from the decoder.
    fn decode(dec: &mut Decoder<'_>) -> Result<Self, WireError>;
}
