// src/stream/slice_reader.rs

//! Memory-backed bit reader over a borrowed byte slice.

use log::debug;

use super::bitstream::{BitRead, BitStreamError};

/// Reads individual bits from a byte buffer it does not own.
///
/// `pos` indexes the next unread byte and `mask` selects the next bit within
/// it, starting at `0x80`. When the mask shifts past the lowest bit the cursor
/// moves to the next byte and the mask resets, so `pos == end` exactly when
/// every bit has been consumed.
#[derive(Debug, Clone)]
pub struct SliceBitReader<'a> {
    buf: &'a [u8],
    end: usize,
    pos: usize,
    mask: u8,
    total_bits: usize,
}

impl<'a> SliceBitReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            end: buf.len(),
            pos: 0,
            mask: 0x80,
            total_bits: 0,
        }
    }

    /// Total bits returned by `read_bit` so far. Skipped padding is not
    /// counted.
    pub fn total_bits(&self) -> usize {
        self.total_bits
    }

    /// Index of the byte holding the next bit.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet touched, excluding a partially read one.
    pub fn remaining_bytes(&self) -> usize {
        self.end - self.in_bytes()
    }
}

impl BitRead for SliceBitReader<'_> {
    #[inline]
    fn read_bit(&mut self) -> Result<bool, BitStreamError> {
        if self.pos >= self.end {
            return Err(BitStreamError::Exhausted {
                bits_read: self.total_bits,
            });
        }
        let bit = self.buf[self.pos] & self.mask != 0;
        self.mask >>= 1;
        if self.mask == 0 {
            self.pos += 1;
            self.mask = 0x80;
        }
        self.total_bits += 1;
        Ok(bit)
    }

    fn good(&self) -> bool {
        self.pos < self.end
    }

    fn in_bytes(&self) -> usize {
        if self.mask == 0x80 { self.pos } else { self.pos + 1 }
    }

    fn next_byte(&mut self) {
        if self.mask != 0x80 {
            debug!("skipping to byte boundary after byte {}", self.pos);
            self.pos += 1;
            self.mask = 0x80;
        }
    }
}
