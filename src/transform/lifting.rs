// src/transform/lifting.rs

//! Lifting-scheme CDF 9/7 transform.
//!
//! The signal is split into even and odd samples and updated in place by two
//! predict/update pairs and a final rescale. Each pass mirrors the missing
//! neighbour at the ends of the signal, which reproduces the whole-sample
//! symmetric extension used by [`super::direct::DirectTransform`], so both
//! strategies produce the same coefficients.

use std::sync::Arc;

use log::debug;
#[cfg(feature = "transform-trace")]
use log::trace;

use super::constants::{LIFT_ALPHA, LIFT_BETA, LIFT_DELTA, LIFT_GAMMA, LIFT_ZETA};
use super::filter_bank::FilterBank;
use super::wt_1d::{WaveletTransform, check_signal};
use crate::utils::error::{Result, WaveError};

/// Lifting transform. Only accepts the CDF 9/7 filter bank.
///
/// Like the direct strategy it keeps a reusable scratch buffer, so one
/// instance must serve one caller at a time.
#[derive(Debug, Clone)]
pub struct LiftingTransform {
    filter: Arc<FilterBank>,
    temp: Vec<f64>,
}

impl LiftingTransform {
    /// Wraps `filter`, which must be the CDF 9/7 bank.
    ///
    /// # Errors
    ///
    /// [`WaveError::InvalidOperation`] for any other bank: the lifting
    /// factorization is fixed and would silently compute a different
    /// transform.
    pub fn new(filter: Arc<FilterBank>) -> Result<Self> {
        if !filter.is_cdf97() {
            return Err(WaveError::InvalidOperation(format!(
                "lifting supports only the CDF 9/7 filter bank (got a {}-tap bank)",
                filter.size()
            )));
        }
        debug!("lifting transform created");
        Ok(Self {
            filter,
            temp: Vec::new(),
        })
    }

    /// Lifting transform over a fresh CDF 9/7 bank.
    pub fn cdf97() -> Self {
        Self {
            filter: Arc::new(FilterBank::cdf97()),
            temp: Vec::new(),
        }
    }

    /// Current length of the scratch buffer.
    pub fn scratch_len(&self) -> usize {
        self.temp.len()
    }

    fn reserve(&mut self, n: usize) {
        if n > self.temp.len() {
            debug!("growing lifting scratch buffer {} -> {}", self.temp.len(), n);
            self.temp.resize(n, 0.0);
        }
    }
}

/// `x[i] += a * (x[i-1] + x[i+1])` for every odd `i`; the last odd sample
/// reflects its left neighbour.
fn lift_odd(x: &mut [f64], a: f64) {
    let n = x.len();
    for i in (1..n - 1).step_by(2) {
        x[i] += a * (x[i - 1] + x[i + 1]);
    }
    x[n - 1] += 2.0 * a * x[n - 2];
}

/// `x[i] += a * (x[i-1] + x[i+1])` for every even `i`; the first even sample
/// reflects its right neighbour.
fn lift_even(x: &mut [f64], a: f64) {
    let n = x.len();
    for i in (2..n).step_by(2) {
        x[i] += a * (x[i - 1] + x[i + 1]);
    }
    x[0] += 2.0 * a * x[1];
}

impl WaveletTransform for LiftingTransform {
    fn filter(&self) -> &FilterBank {
        &self.filter
    }

    fn forward_single_strided(&mut self, data: &mut [f64], n: usize, stride: usize) -> Result<()> {
        check_signal(data.len(), n, stride, self.filter.size())?;
        self.reserve(n);
        let x = &mut self.temp[..n];
        for (i, v) in x.iter_mut().enumerate() {
            *v = data[i * stride];
        }

        lift_odd(x, LIFT_ALPHA);
        lift_even(x, LIFT_BETA);
        lift_odd(x, LIFT_GAMMA);
        lift_even(x, LIFT_DELTA);
        #[cfg(feature = "transform-trace")]
        trace!("forward lifting passes done over {} samples", n);

        // Deinterleave and scale: evens become approximations, odds details.
        let half = n / 2;
        for i in 0..half {
            data[i * stride] = x[2 * i] * LIFT_ZETA;
            data[(half + i) * stride] = x[2 * i + 1] / LIFT_ZETA;
        }
        Ok(())
    }

    fn inverse_single_strided(&mut self, data: &mut [f64], n: usize, stride: usize) -> Result<()> {
        check_signal(data.len(), n, stride, self.filter.size())?;
        self.reserve(n);
        let x = &mut self.temp[..n];

        let half = n / 2;
        for i in 0..half {
            x[2 * i] = data[i * stride] / LIFT_ZETA;
            x[2 * i + 1] = data[(half + i) * stride] * LIFT_ZETA;
        }

        lift_even(x, -LIFT_DELTA);
        lift_odd(x, -LIFT_GAMMA);
        lift_even(x, -LIFT_BETA);
        lift_odd(x, -LIFT_ALPHA);
        #[cfg(feature = "transform-trace")]
        trace!("inverse lifting passes done over {} samples", n);

        for (i, &v) in x.iter().enumerate() {
            data[i * stride] = v;
        }
        Ok(())
    }
}
