// src/codec/varint.rs

//! Variable-length unsigned integer codec.
//!
//! Wire format (unsigned LEB128): the value is cut into 7-bit groups, least
//! significant group first. Each group travels in one 8-bit unit whose top bit
//! is set when another unit follows and clear on the last one. Values below
//! 128 take one unit, a `u64` takes at most ten.
//!
//! The same units can go through a [`BitRead`]/[`BitWrite`] stream (8 bits
//! each, MSB first, no alignment required) or a byte stream.

use std::io::{self, Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt};
use thiserror::Error;

use crate::stream::{BitRead, BitStreamError, BitWrite};

/// Largest number of units a `u64` can need.
pub const MAX_UNITS: usize = 10;

const UNIT_BITS: u32 = 8;
const PAYLOAD_BITS: u32 = 7;
const PAYLOAD_MASK: u8 = 0x7f;
const CONTINUE: u8 = 0x80;

#[derive(Error, Debug)]
pub enum VarIntError {
    #[error("stream ended before the terminating unit")]
    Truncated,
    #[error("encoded value does not fit in 64 bits")]
    Overflow,
    #[error("bit stream error: {0}")]
    Stream(BitStreamError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<BitStreamError> for VarIntError {
    fn from(err: BitStreamError) -> Self {
        match err {
            BitStreamError::Exhausted { .. } => VarIntError::Truncated,
            other => VarIntError::Stream(other),
        }
    }
}

/// Units of `value`, in wire order.
struct Units {
    value: u64,
    done: bool,
}

impl Iterator for Units {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.done {
            return None;
        }
        let payload = (self.value & PAYLOAD_MASK as u64) as u8;
        self.value >>= PAYLOAD_BITS;
        if self.value == 0 {
            self.done = true;
            Some(payload)
        } else {
            Some(payload | CONTINUE)
        }
    }
}

fn units(value: u64) -> Units {
    Units { value, done: false }
}

/// Reassembles a value from units fed one at a time.
#[derive(Default)]
struct Accumulator {
    value: u64,
    shift: u32,
}

impl Accumulator {
    /// Returns the value once the terminating unit arrives.
    fn push(&mut self, unit: u8) -> Result<Option<u64>, VarIntError> {
        let payload = (unit & PAYLOAD_MASK) as u64;
        // Only one bit of the tenth unit still fits in a u64.
        if self.shift == 63 && payload > 1 {
            return Err(VarIntError::Overflow);
        }
        self.value |= payload << self.shift;
        if unit & CONTINUE == 0 {
            return Ok(Some(self.value));
        }
        self.shift += PAYLOAD_BITS;
        if self.shift > 63 {
            return Err(VarIntError::Overflow);
        }
        Ok(None)
    }
}

/// Number of units `encode` emits for `value`.
pub fn encoded_len(value: u64) -> usize {
    let significant = (u64::BITS - value.leading_zeros()).max(1);
    significant.div_ceil(PAYLOAD_BITS) as usize
}

/// Writes `value` to a bit stream and returns the number of units written.
pub fn encode<W: BitWrite + ?Sized>(value: u64, stream: &mut W) -> usize {
    let mut count = 0;
    for unit in units(value) {
        for shift in (0..UNIT_BITS).rev() {
            stream.write_bit((unit >> shift) & 1 == 1);
        }
        count += 1;
    }
    count
}

/// Reads one value written by [`encode`].
///
/// # Errors
///
/// [`VarIntError::Truncated`] if the stream ends before the last unit,
/// [`VarIntError::Overflow`] if the units describe more than 64 bits.
pub fn decode<R: BitRead + ?Sized>(stream: &mut R) -> Result<u64, VarIntError> {
    let mut acc = Accumulator::default();
    loop {
        let unit = stream.read_bits(UNIT_BITS)? as u8;
        if let Some(value) = acc.push(unit)? {
            return Ok(value);
        }
    }
}

/// Writes `value` to a byte stream and returns the number of bytes written.
pub fn write_vl<W: Write + ?Sized>(writer: &mut W, value: u64) -> Result<usize, VarIntError> {
    let mut count = 0;
    for unit in units(value) {
        writer.write_u8(unit)?;
        count += 1;
    }
    Ok(count)
}

/// Reads one value written by [`write_vl`].
pub fn read_vl<R: Read + ?Sized>(reader: &mut R) -> Result<u64, VarIntError> {
    let mut acc = Accumulator::default();
    loop {
        let unit = match reader.read_u8() {
            Ok(unit) => unit,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(VarIntError::Truncated);
            }
            Err(e) => return Err(e.into()),
        };
        if let Some(value) = acc.push(unit)? {
            return Ok(value);
        }
    }
}
