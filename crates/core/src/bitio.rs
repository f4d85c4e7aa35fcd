//! Bit-level I/O for the encoded body.
//!
//! The codec talks to bit streams only through two small traits:
//! [`BitSink`] (`write_bit`) and [`BitSource`] (`read_bit` / `eof`).
//! [`BitWriter`] and [`BitReader`] implement them over byte buffers,
//! most significant bit first. The last byte of a body is zero-padded; the
//! reader hands padding out like any other bit, and the decoder never asks
//! for it because the end-of-stream code comes first.
//!
//! # Example
//! ```
//! use huffpack_core::bitio::{BitReader, BitSink, BitSource, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! for bit in [true, false, true, true, true] {
//!     writer.write_bit(bit);
//! }
//! let bytes = writer.finish();
//! assert_eq!(bytes, vec![0b1011_1000]);
//!
//! let mut reader = BitReader::new(&bytes);
//! assert!(reader.read_bit().unwrap());
//! assert!(!reader.read_bit().unwrap());
//! ```

use crate::error::{BitIoError, Result};

/// Destination for single bits, in emission order.
pub trait BitSink {
    fn write_bit(&mut self, bit: bool);
}

/// Origin of single bits, in stream order.
pub trait BitSource {
    /// Read the next bit.
    ///
    /// # Errors
    /// Returns `BitIoError::UnexpectedEof` once [`BitSource::eof`] is true.
    fn read_bit(&mut self) -> Result<bool>;

    /// True when no bits remain.
    fn eof(&self) -> bool;
}

impl<S: BitSink + ?Sized> BitSink for &mut S {
    fn write_bit(&mut self, bit: bool) {
        (**self).write_bit(bit);
    }
}

/// Packs bits into bytes, MSB-first.
///
/// # Invariants
/// - `pending` holds fewer than 8 bits, left-aligned
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    /// Partial byte under construction
    pending: u8,
    /// Bits used in `pending` (0-7)
    pending_bits: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the partial byte (zero-padded) and return the buffer.
    pub fn finish(mut self) -> Vec<u8> {
        if self.pending_bits > 0 {
            self.bytes.push(self.pending);
        }
        self.bytes
    }

    /// Bits written so far, padding excluded.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.pending_bits as usize
    }
}

impl BitSink for BitWriter {
    fn write_bit(&mut self, bit: bool) {
        if bit {
            self.pending |= 0x80 >> self.pending_bits;
        }
        self.pending_bits += 1;

        if self.pending_bits == 8 {
            self.bytes.push(self.pending);
            self.pending = 0;
            self.pending_bits = 0;
        }
    }
}

/// Sink that only counts what it is given. Backs dry-run size estimation.
#[derive(Debug, Default, Clone, Copy)]
pub struct BitCounter {
    bits: usize,
}

impl BitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bit_len(&self) -> usize {
        self.bits
    }
}

impl BitSink for BitCounter {
    fn write_bit(&mut self, _bit: bool) {
        self.bits += 1;
    }
}

/// Reads bits MSB-first from a byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Next bit to read; 0 is the MSB of `data[0]`
    cursor: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, cursor: 0 }
    }

    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.cursor
    }

    /// Bits consumed so far.
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl BitSource for BitReader<'_> {
    fn read_bit(&mut self) -> Result<bool> {
        let byte = self
            .data
            .get(self.cursor / 8)
            .ok_or(BitIoError::UnexpectedEof)?;
        let bit = byte & (0x80 >> (self.cursor % 8)) != 0;
        self.cursor += 1;
        Ok(bit)
    }

    fn eof(&self) -> bool {
        self.cursor >= self.data.len() * 8
    }
}
