// src/stream/bitstream.rs

//! Bit-granular stream protocol.
//!
//! Bits are packed most-significant-bit first within each byte. Readers and
//! writers only agree on byte alignment at explicit `next_byte()` calls.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitStreamError {
    #[error("bit stream exhausted after {bits_read} bits")]
    Exhausted { bits_read: usize },
    #[error("cannot move {requested} bits through a 64-bit value")]
    TooManyBits { requested: u32 },
}

/// Reading side of the protocol.
pub trait BitRead {
    /// Returns the next bit.
    ///
    /// # Errors
    ///
    /// [`BitStreamError::Exhausted`] when called while `good()` is false.
    fn read_bit(&mut self) -> Result<bool, BitStreamError>;

    /// True while unread bits remain.
    fn good(&self) -> bool;

    /// Number of bytes touched so far, counting a partially read byte.
    fn in_bytes(&self) -> usize;

    /// Discards the rest of the current byte. No-op on a byte boundary.
    fn next_byte(&mut self);

    /// Reads `count` bits (at most 64) as an unsigned value, first bit most
    /// significant.
    fn read_bits(&mut self, count: u32) -> Result<u64, BitStreamError> {
        if count > 64 {
            return Err(BitStreamError::TooManyBits { requested: count });
        }
        let mut value = 0u64;
        for _ in 0..count {
            value = (value << 1) | self.read_bit()? as u64;
        }
        Ok(value)
    }
}

/// Writing side of the protocol.
pub trait BitWrite {
    fn write_bit(&mut self, bit: bool);

    /// Number of bytes started so far, counting a partially written byte.
    fn out_bytes(&self) -> usize;

    /// Pads the current byte with zero bits. No-op on a byte boundary.
    fn next_byte(&mut self);

    /// Writes the low `count` bits of `value` (at most 64), most significant
    /// first.
    fn write_bits(&mut self, value: u64, count: u32) -> Result<(), BitStreamError> {
        if count > 64 {
            return Err(BitStreamError::TooManyBits { requested: count });
        }
        for shift in (0..count).rev() {
            self.write_bit((value >> shift) & 1 == 1);
        }
        Ok(())
    }
}
