use std::io::{BufReader, BufWriter, Cursor, Seek, SeekFrom, Write};

use wavepack::codec::varint::{self, VarIntError, encoded_len, read_vl, write_vl};
use wavepack::stream::BitStreamError;
use wavepack::{BitRead, BitWrite, SliceBitReader, VecBitWriter, WaveError};

/// Reads every bit of `bytes` and packs them back into bytes, MSB first.
fn reassemble(bytes: &[u8]) -> Vec<u8> {
    let mut reader = SliceBitReader::new(bytes);
    let mut out = Vec::new();
    for _ in 0..bytes.len() {
        let mut byte = 0u8;
        for _ in 0..8 {
            assert!(reader.good());
            byte = (byte << 1) | reader.read_bit().unwrap() as u8;
        }
        out.push(byte);
    }
    assert!(!reader.good(), "stream should be exhausted after the last bit");
    assert_eq!(reader.total_bits(), bytes.len() * 8);
    out
}

#[test]
fn test_bit_stream_round_trip() {
    let all_bytes: Vec<u8> = (0..=255).collect();
    assert_eq!(reassemble(&all_bytes), all_bytes);

    let patterns = [vec![], vec![0x00], vec![0xff], vec![0x80, 0x01, 0x55, 0xaa]];
    for bytes in &patterns {
        assert_eq!(&reassemble(bytes), bytes);
    }
}

#[test]
fn test_good_flips_exactly_at_the_end() {
    let bytes = [0x12u8, 0x34, 0x56];
    let mut reader = SliceBitReader::new(&bytes);
    for i in 0..24 {
        assert!(reader.good(), "bit {}", i);
        reader.read_bit().unwrap();
    }
    assert!(!reader.good());
    assert!(matches!(
        reader.read_bit(),
        Err(BitStreamError::Exhausted { bits_read: 24 })
    ));
}

#[test]
fn test_writer_reader_agree_on_bit_order() {
    let mut writer = VecBitWriter::new();
    let fields: [(u64, u32); 5] = [(1, 1), (0b10, 2), (0x5a, 7), (0xdead_beef, 32), (0, 3)];
    for &(value, bits) in &fields {
        writer.write_bits(value, bits).unwrap();
    }
    let bytes = writer.finish();
    assert_eq!(bytes.len(), 6); // 45 bits

    let mut reader = SliceBitReader::new(&bytes);
    for &(value, bits) in &fields {
        assert_eq!(reader.read_bits(bits).unwrap(), value);
    }
}

#[test]
fn test_mixed_bit_packed_and_byte_aligned_fields() {
    let mut writer = VecBitWriter::new();
    writer.write_bits(0b1011, 4).unwrap();
    writer.next_byte();
    varint::encode(300, &mut writer);
    writer.write_bit(true);
    writer.next_byte();
    writer.write_bits(0x7e, 8).unwrap();
    let bytes = writer.finish();
    assert_eq!(bytes, [0b1011_0000, 0xac, 0x02, 0x80, 0x7e]);

    let mut reader = SliceBitReader::new(&bytes);
    assert_eq!(reader.read_bits(4).unwrap(), 0b1011);
    reader.next_byte();
    assert_eq!(reader.in_bytes(), 1);
    assert_eq!(varint::decode(&mut reader).unwrap(), 300);
    assert!(reader.read_bit().unwrap());
    reader.next_byte();
    assert_eq!(reader.in_bytes(), 4);
    assert_eq!(reader.read_bits(8).unwrap(), 0x7e);
    assert!(!reader.good());
}

#[test]
fn test_varint_regression_set() {
    let values = (0..1_048_576u64).step_by(17);
    for v in values {
        let mut bytes = Vec::new();
        write_vl(&mut bytes, v).unwrap();
        assert_eq!(read_vl(&mut Cursor::new(&bytes)).unwrap(), v);

        let mut writer = VecBitWriter::new();
        varint::encode(v, &mut writer);
        let bits = writer.finish();
        assert_eq!(bits, bytes);
        assert_eq!(varint::decode(&mut SliceBitReader::new(&bits)).unwrap(), v);
    }
}

#[test]
fn test_varint_encoding_boundaries() {
    let cases = [(0u64, 1usize), (127, 1), (128, 2), (16383, 2), (16384, 3)];
    for (value, units) in cases {
        let mut writer = VecBitWriter::new();
        assert_eq!(varint::encode(value, &mut writer), units, "value {}", value);
        let bytes = writer.finish();
        assert_eq!(bytes.len(), units);

        let mut reader = SliceBitReader::new(&bytes);
        assert_eq!(varint::decode(&mut reader).unwrap(), value);
        assert!(!reader.good());
    }
}

#[test]
fn test_varint_length_is_monotonic() {
    let mut previous = 0;
    for shift in 0..64 {
        for v in [(1u64 << shift) - 1, 1u64 << shift] {
            let len = encoded_len(v);
            assert!(len >= previous, "encoded_len({}) = {} < {}", v, len, previous);
            previous = len;
        }
    }
    assert_eq!(encoded_len(u64::MAX), varint::MAX_UNITS);
}

#[test]
fn test_varint_sequence_through_one_stream() {
    let values = [0u64, 17, 34, 127, 128, 1_000_000];

    let mut writer = VecBitWriter::new();
    for &v in &values {
        varint::encode(v, &mut writer);
    }
    let bytes = writer.finish();

    let mut reader = SliceBitReader::new(&bytes);
    let decoded: Vec<u64> = values
        .iter()
        .map(|_| varint::decode(&mut reader).unwrap())
        .collect();
    assert_eq!(decoded, values);
    assert!(!reader.good(), "no trailing data expected");
    assert_eq!(reader.in_bytes(), bytes.len());
}

#[test]
fn test_varint_missing_terminator() {
    let mut writer = VecBitWriter::new();
    varint::encode(1_000_000, &mut writer);
    let mut bytes = writer.finish();
    bytes.pop();

    let mut reader = SliceBitReader::new(&bytes);
    let err = varint::decode(&mut reader).unwrap_err();
    assert!(matches!(err, VarIntError::Truncated));

    let err: WaveError = err.into();
    assert!(matches!(err, WaveError::EncodingError(_)));
}

#[test]
fn test_varint_file_round_trip() {
    let values: Vec<u64> = (0..64).map(|i| (1u64 << i) - 1).chain([u64::MAX]).collect();

    let mut file = tempfile::tempfile().unwrap();
    {
        let mut writer = BufWriter::new(&mut file);
        for &v in &values {
            write_vl(&mut writer, v).unwrap();
        }
        writer.flush().unwrap();
    }
    file.seek(SeekFrom::Start(0)).unwrap();

    let mut reader = BufReader::new(&mut file);
    for &v in &values {
        assert_eq!(read_vl(&mut reader).unwrap(), v);
    }
    assert!(matches!(read_vl(&mut reader), Err(VarIntError::Truncated)));
}
