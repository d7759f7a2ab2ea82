// src/codec/signal.rs

//! Serialized form of a transformed 1-D signal.
//!
//! Layout: three variable-length integers (`len`, `levels`, strategy tag)
//! followed by `len` IEEE-754 doubles in big-endian order.

use std::io::{self, Read, Write};
use std::sync::Arc;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use log::debug;

use super::varint::{read_vl, write_vl};
use crate::transform::{FilterBank, Strategy, TransformConfig, WaveletTransform, Wt1d, max_levels};
use crate::utils::error::{Result, WaveError};

const TAG_DIRECT: u64 = 0;
const TAG_LIFTING: u64 = 1;

/// Describes the coefficients that follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalHeader {
    /// Number of coefficients.
    pub len: u64,
    /// Decomposition depth applied by the forward transform.
    pub levels: u32,
    /// Strategy that produced the coefficients.
    pub strategy: Strategy,
}

impl SignalHeader {
    /// Writes the header and returns the number of bytes used.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        let tag = match self.strategy {
            Strategy::Direct => TAG_DIRECT,
            Strategy::Lifting => TAG_LIFTING,
        };
        let mut written = write_vl(writer, self.len)?;
        written += write_vl(writer, self.levels as u64)?;
        written += write_vl(writer, tag)?;
        Ok(written)
    }

    pub fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let len = read_vl(reader)?;
        let levels = read_vl(reader)?;
        let levels = u32::try_from(levels)
            .map_err(|_| WaveError::EncodingError(format!("level count {} out of range", levels)))?;
        let strategy = match read_vl(reader)? {
            TAG_DIRECT => Strategy::Direct,
            TAG_LIFTING => Strategy::Lifting,
            tag => {
                return Err(WaveError::EncodingError(format!(
                    "unknown strategy tag {}",
                    tag
                )));
            }
        };
        Ok(Self {
            len,
            levels,
            strategy,
        })
    }
}

/// Writes a header and its coefficients. Returns the number of bytes written.
pub fn write_signal<W: Write + ?Sized>(
    writer: &mut W,
    header: &SignalHeader,
    coeffs: &[f64],
) -> Result<usize> {
    if coeffs.len() as u64 != header.len {
        return Err(WaveError::InvalidArg(format!(
            "header announces {} coefficients, got {}",
            header.len,
            coeffs.len()
        )));
    }
    let mut written = header.write_to(writer)?;
    for &c in coeffs {
        writer.write_f64::<BigEndian>(c)?;
    }
    written += coeffs.len() * std::mem::size_of::<f64>();
    Ok(written)
}

/// Reads a header and the coefficients it announces.
pub fn read_signal<R: Read + ?Sized>(reader: &mut R) -> Result<(SignalHeader, Vec<f64>)> {
    let header = SignalHeader::read_from(reader)?;
    let len = usize::try_from(header.len)
        .map_err(|_| WaveError::EncodingError(format!("signal length {} too large", header.len)))?;

    // The length is untrusted; let the vector grow as data actually arrives.
    let mut coeffs = Vec::with_capacity(len.min(1 << 16));
    for _ in 0..len {
        match reader.read_f64::<BigEndian>() {
            Ok(c) => coeffs.push(c),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(WaveError::EncodingError(format!(
                    "signal truncated after {} of {} coefficients",
                    coeffs.len(),
                    len
                )));
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok((header, coeffs))
}

/// Transforms `data` with `config` and serializes the result.
///
/// With `levels: None`, a signal that admits no level (odd length or shorter
/// than the filter) is stored untransformed with a level count of 0.
pub fn pack(config: &TransformConfig, filter: Arc<FilterBank>, data: &[f64]) -> Result<Vec<u8>> {
    let levels = config.levels_for(data.len(), filter.size())?;
    if levels == 0 {
        debug!(
            "signal of {} samples admits no decomposition level, packing raw samples",
            data.len()
        );
    }
    let mut wt = Wt1d::from_config(config, filter)?;
    let mut coeffs = data.to_vec();
    wt.forward(&mut coeffs, levels)?;

    let header = SignalHeader {
        len: coeffs.len() as u64,
        levels: levels as u32,
        strategy: wt.strategy(),
    };
    let mut out = Vec::new();
    let written = write_signal(&mut out, &header, &coeffs)?;
    debug!(
        "packed {} samples ({} levels, {}) into {} bytes",
        data.len(),
        levels,
        header.strategy.name(),
        written
    );
    Ok(out)
}

/// Deserializes a packed signal and inverts its transform with the strategy
/// recorded in the header.
pub fn unpack(filter: Arc<FilterBank>, bytes: &[u8]) -> Result<Vec<f64>> {
    let mut cursor = io::Cursor::new(bytes);
    let (header, mut coeffs) = read_signal(&mut cursor)?;
    let levels = header.levels as usize;
    let max = max_levels(coeffs.len(), filter.size());
    if levels > max {
        return Err(WaveError::EncodingError(format!(
            "header claims {} levels, {} coefficients allow at most {}",
            levels,
            coeffs.len(),
            max
        )));
    }
    let mut wt = Wt1d::new(header.strategy, filter)?;
    wt.inverse(&mut coeffs, levels)?;
    Ok(coeffs)
}
