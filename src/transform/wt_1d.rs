// src/transform/wt_1d.rs

//! One-dimensional wavelet transform interface.
//!
//! Two interchangeable strategies compute the same transform:
//! [`DirectTransform`] convolves a symmetrically extended copy of the signal
//! with the filter bank, and [`LiftingTransform`] factors the CDF 9/7 bank
//! into predict/update passes. [`Wt1d`] selects one at construction time and
//! dispatches once per call.
//!
//! Every forward transform leaves `n/2` approximation coefficients followed by
//! `n/2` detail coefficients in place of the `n` input samples; the inverse
//! takes that layout back to samples.

use std::sync::Arc;

#[cfg(feature = "transform-trace")]
use log::trace;

use super::direct::DirectTransform;
use super::filter_bank::FilterBank;
use super::lifting::LiftingTransform;
use crate::utils::error::{Result, WaveError};

/// Computational strategy used for a 1-D transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Explicit symmetric extension followed by convolution.
    Direct,
    /// Predict/update lifting passes. Only the CDF 9/7 bank is supported.
    #[default]
    Lifting,
}

impl Strategy {
    /// Parses a strategy from a case-insensitive name (`"direct"`,
    /// `"lifting"` or `"lift"`).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "lifting" | "lift" => Ok(Self::Lifting),
            _ => Err(WaveError::InvalidArg(format!(
                "unknown transform strategy: {}",
                name
            ))),
        }
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Lifting => "lifting",
        }
    }
}

/// Parameters for building and running a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformConfig {
    pub strategy: Strategy,
    /// Decomposition depth. `None` decomposes as deep as the signal allows.
    pub levels: Option<usize>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            levels: None,
        }
    }
}

impl TransformConfig {
    /// Resolves the number of levels to use for a signal of length `n`.
    pub fn levels_for(&self, n: usize, filter_size: usize) -> Result<usize> {
        let max = max_levels(n, filter_size);
        match self.levels {
            None => Ok(max),
            Some(levels) if levels <= max => Ok(levels),
            Some(levels) => Err(WaveError::InvalidArg(format!(
                "{} levels requested, a signal of length {} allows at most {}",
                levels, n, max
            ))),
        }
    }
}

/// Number of single-level transforms a signal of length `n` admits: each
/// level needs an even length no shorter than the filter.
pub fn max_levels(n: usize, filter_size: usize) -> usize {
    let mut levels = 0;
    let mut len = n;
    while len > 0 && len % 2 == 0 && len >= filter_size {
        levels += 1;
        len /= 2;
    }
    levels
}

/// Validates a strided single-level transform request.
pub(crate) fn check_signal(
    data_len: usize,
    n: usize,
    stride: usize,
    filter_size: usize,
) -> Result<()> {
    if n % 2 != 0 {
        return Err(WaveError::InvalidArg(format!(
            "signal length must be even, got {}",
            n
        )));
    }
    if n < filter_size {
        return Err(WaveError::InvalidArg(format!(
            "signal length {} is shorter than the filter ({} taps)",
            n, filter_size
        )));
    }
    if stride == 0 {
        return Err(WaveError::InvalidArg("stride must be non-zero".to_string()));
    }
    let needed = (n - 1)
        .checked_mul(stride)
        .and_then(|last| last.checked_add(1))
        .ok_or_else(|| WaveError::InvalidArg("stride overflows the address space".to_string()))?;
    if data_len < needed {
        return Err(WaveError::InvalidArg(format!(
            "{} samples at stride {} need {} elements, buffer has {}",
            n, stride, needed, data_len
        )));
    }
    Ok(())
}

/// A single-level 1-D wavelet transform over a caller-owned buffer.
///
/// Implementations keep private scratch space that every call overwrites, so
/// one instance must not be driven from two operations at once. Give each
/// worker its own instance; they can all share one `Arc<FilterBank>`.
pub trait WaveletTransform {
    /// The filter bank this transform was built with.
    fn filter(&self) -> &FilterBank;

    /// Forward transform of `n` samples at `data[0], data[stride], ...`.
    fn forward_single_strided(&mut self, data: &mut [f64], n: usize, stride: usize) -> Result<()>;

    /// Inverse transform of `n` coefficients at `data[0], data[stride], ...`.
    fn inverse_single_strided(&mut self, data: &mut [f64], n: usize, stride: usize) -> Result<()>;

    /// Forward transform of a contiguous signal.
    fn forward_single(&mut self, data: &mut [f64]) -> Result<()> {
        let n = data.len();
        self.forward_single_strided(data, n, 1)
    }

    /// Inverse transform of a contiguous approximation/detail buffer.
    fn inverse_single(&mut self, data: &mut [f64]) -> Result<()> {
        let n = data.len();
        self.inverse_single_strided(data, n, 1)
    }

    /// Multi-level forward transform. Each level transforms the approximation
    /// band left by the previous one.
    fn forward(&mut self, data: &mut [f64], levels: usize) -> Result<()> {
        check_levels(data.len(), self.filter().size(), levels)?;
        let mut len = data.len();
        for _level in 0..levels {
            #[cfg(feature = "transform-trace")]
            trace!("forward level {} over {} samples", _level, len);
            self.forward_single(&mut data[..len])?;
            len /= 2;
        }
        Ok(())
    }

    /// Undoes [`WaveletTransform::forward`] with the same level count.
    fn inverse(&mut self, data: &mut [f64], levels: usize) -> Result<()> {
        check_levels(data.len(), self.filter().size(), levels)?;
        for level in (0..levels).rev() {
            let len = data.len() >> level;
            #[cfg(feature = "transform-trace")]
            trace!("inverse level {} over {} samples", level, len);
            self.inverse_single(&mut data[..len])?;
        }
        Ok(())
    }
}

fn check_levels(n: usize, filter_size: usize, levels: usize) -> Result<()> {
    let max = max_levels(n, filter_size);
    if levels > max {
        return Err(WaveError::InvalidArg(format!(
            "{} levels requested, a signal of length {} allows at most {}",
            levels, n, max
        )));
    }
    Ok(())
}

/// A transform whose strategy was chosen at construction.
#[derive(Debug, Clone)]
pub enum Wt1d {
    Direct(DirectTransform),
    Lifting(LiftingTransform),
}

impl Wt1d {
    /// Builds a transform of the given strategy over `filter`.
    ///
    /// # Errors
    ///
    /// [`WaveError::InvalidOperation`] when `Strategy::Lifting` is paired with
    /// a bank other than CDF 9/7.
    pub fn new(strategy: Strategy, filter: Arc<FilterBank>) -> Result<Self> {
        match strategy {
            Strategy::Direct => Ok(Self::Direct(DirectTransform::new(filter))),
            Strategy::Lifting => Ok(Self::Lifting(LiftingTransform::new(filter)?)),
        }
    }

    /// Builds a transform from a [`TransformConfig`].
    pub fn from_config(config: &TransformConfig, filter: Arc<FilterBank>) -> Result<Self> {
        Self::new(config.strategy, filter)
    }

    /// The strategy behind this handle.
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::Direct(_) => Strategy::Direct,
            Self::Lifting(_) => Strategy::Lifting,
        }
    }
}

impl WaveletTransform for Wt1d {
    fn filter(&self) -> &FilterBank {
        match self {
            Self::Direct(t) => t.filter(),
            Self::Lifting(t) => t.filter(),
        }
    }

    fn forward_single_strided(&mut self, data: &mut [f64], n: usize, stride: usize) -> Result<()> {
        match self {
            Self::Direct(t) => t.forward_single_strided(data, n, stride),
            Self::Lifting(t) => t.forward_single_strided(data, n, stride),
        }
    }

    fn inverse_single_strided(&mut self, data: &mut [f64], n: usize, stride: usize) -> Result<()> {
        match self {
            Self::Direct(t) => t.inverse_single_strided(data, n, stride),
            Self::Lifting(t) => t.inverse_single_strided(data, n, stride),
        }
    }
}
