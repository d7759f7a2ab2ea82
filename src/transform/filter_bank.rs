// src/transform/filter_bank.rs

//! Analysis/synthesis filter coefficients for one wavelet family.

use super::constants::{
    CDF97_HPF, CDF97_IHPF, CDF97_ILPF, CDF97_LPF, CDF97_MATCH_TOLERANCE,
};
use crate::utils::error::{Result, WaveError};

/// Immutable set of the four coefficient sequences that parameterize a
/// wavelet transform.
///
/// All four sequences have exactly `size` taps and `size` is even. The bank is
/// validated once in [`FilterBank::new`] and never mutated afterwards, so a
/// single bank (usually behind an `Arc`) can be shared by any number of
/// transform instances on any number of threads.
///
/// Tap `d` of the analysis filters is applied to the symmetrically extended
/// signal at offset `d - size/2` from the sample being produced; the
/// synthesis filters use the same centering on the interleaved
/// approximation/detail sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBank {
    size: usize,
    lpf: Vec<f64>,
    hpf: Vec<f64>,
    ilpf: Vec<f64>,
    ihpf: Vec<f64>,
}

impl FilterBank {
    /// Builds a filter bank from its four coefficient sequences.
    ///
    /// # Errors
    ///
    /// [`WaveError::InvalidArg`] if `size` is zero or odd, or if any sequence
    /// does not have exactly `size` elements.
    pub fn new(
        size: usize,
        lpf: Vec<f64>,
        hpf: Vec<f64>,
        ilpf: Vec<f64>,
        ihpf: Vec<f64>,
    ) -> Result<Self> {
        if size == 0 || size % 2 != 0 {
            return Err(WaveError::InvalidArg(format!(
                "filter size must be even and non-zero, got {}",
                size
            )));
        }

        for (name, taps) in [("lpf", &lpf), ("hpf", &hpf), ("ilpf", &ilpf), ("ihpf", &ihpf)] {
            if taps.len() != size {
                return Err(WaveError::InvalidArg(format!(
                    "{} has {} taps, filter size is {}",
                    name,
                    taps.len(),
                    size
                )));
            }
        }

        Ok(Self {
            size,
            lpf,
            hpf,
            ilpf,
            ihpf,
        })
    }

    /// The biorthogonal CDF 9/7 bank, padded to 12 taps.
    pub fn cdf97() -> Self {
        Self {
            size: CDF97_LPF.len(),
            lpf: CDF97_LPF.to_vec(),
            hpf: CDF97_HPF.to_vec(),
            ilpf: CDF97_ILPF.to_vec(),
            ihpf: CDF97_IHPF.to_vec(),
        }
    }

    /// Resolves a built-in filter bank by case-insensitive name.
    ///
    /// # Supported Names
    ///
    /// | Input | Bank |
    /// |-------|------|
    /// | `"cdf97"`, `"cdf9/7"`, `"bior4.4"` | [`FilterBank::cdf97`] |
    ///
    /// # Errors
    ///
    /// [`WaveError::InvalidArg`] if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "cdf97" | "cdf9/7" | "bior4.4" => Ok(Self::cdf97()),
            _ => Err(WaveError::InvalidArg(format!(
                "unknown filter bank: {}",
                name
            ))),
        }
    }

    /// Number of taps in every sequence.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Half the filter length; the width of each extended border.
    pub fn half(&self) -> usize {
        self.size / 2
    }

    /// Low-pass analysis taps.
    pub fn lpf(&self) -> &[f64] {
        &self.lpf
    }

    /// High-pass analysis taps.
    pub fn hpf(&self) -> &[f64] {
        &self.hpf
    }

    /// Low-pass synthesis taps.
    pub fn ilpf(&self) -> &[f64] {
        &self.ilpf
    }

    /// High-pass synthesis taps.
    pub fn ihpf(&self) -> &[f64] {
        &self.ihpf
    }

    /// True when this bank carries the CDF 9/7 coefficients, the only family
    /// the lifting strategy can compute.
    pub fn is_cdf97(&self) -> bool {
        fn close(a: &[f64], b: &[f64]) -> bool {
            a.iter()
                .zip(b)
                .all(|(x, y)| (x - y).abs() <= CDF97_MATCH_TOLERANCE)
        }

        self.size == CDF97_LPF.len()
            && close(&self.lpf, &CDF97_LPF)
            && close(&self.hpf, &CDF97_HPF)
            && close(&self.ilpf, &CDF97_ILPF)
            && close(&self.ihpf, &CDF97_IHPF)
    }
}
