// src/stream/vec_writer.rs

//! Growable in-memory bit writer, the counterpart of
//! [`super::slice_reader::SliceBitReader`].

use bitvec::prelude::*;

use super::bitstream::BitWrite;

/// Accumulates bits MSB-first into bytes.
#[derive(Debug, Clone, Default)]
pub struct VecBitWriter {
    bits: BitVec<u8, Msb0>,
}

impl VecBitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total bits written, including any padding added by `next_byte`.
    pub fn total_bits(&self) -> usize {
        self.bits.len()
    }

    /// Pads to a byte boundary and returns the bytes.
    pub fn finish(mut self) -> Vec<u8> {
        BitWrite::next_byte(&mut self);
        self.bits.into_vec()
    }
}

impl BitWrite for VecBitWriter {
    #[inline]
    fn write_bit(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    fn out_bytes(&self) -> usize {
        self.bits.len().div_ceil(8)
    }

    fn next_byte(&mut self) {
        while self.bits.len() % 8 != 0 {
            self.bits.push(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_msb_first() {
        let mut writer = VecBitWriter::new();
        for bit in [true, false, true, false, false, false, false, true] {
            writer.write_bit(bit);
        }
        assert_eq!(writer.out_bytes(), 1);
        assert_eq!(writer.finish(), vec![0b1010_0001]);
    }

    #[test]
    fn test_partial_byte_is_zero_padded() {
        let mut writer = VecBitWriter::new();
        writer.write_bits(0b101, 3).unwrap();
        assert_eq!(writer.out_bytes(), 1);
        assert_eq!(writer.total_bits(), 3);

        writer.next_byte();
        assert_eq!(writer.total_bits(), 8);
        writer.next_byte();
        assert_eq!(writer.total_bits(), 8);

        writer.write_bits(0xabcd, 16).unwrap();
        assert_eq!(writer.finish(), vec![0b1010_0000, 0xab, 0xcd]);
    }

    #[test]
    fn test_empty_writer() {
        let writer = VecBitWriter::new();
        assert_eq!(writer.out_bytes(), 0);
        assert!(writer.finish().is_empty());
    }
}
