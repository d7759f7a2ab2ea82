// src/transform/direct.rs

//! Convolution-based 1-D wavelet transform with whole-sample symmetric
//! boundary extension.

use std::sync::Arc;

use log::debug;

use super::filter_bank::FilterBank;
use super::wt_1d::{WaveletTransform, check_signal};
use crate::utils::error::Result;

/// Direct-convolution transform over any valid [`FilterBank`].
///
/// Owns a scratch buffer that holds the symmetrically extended signal. It
/// grows to the largest signal seen and is reused by later calls, which is
/// why a `DirectTransform` serves one caller at a time.
#[derive(Debug, Clone)]
pub struct DirectTransform {
    filter: Arc<FilterBank>,
    temp: Vec<f64>,
}

impl DirectTransform {
    pub fn new(filter: Arc<FilterBank>) -> Self {
        debug!("direct transform created with {}-tap filter bank", filter.size());
        Self {
            filter,
            temp: Vec::new(),
        }
    }

    /// Current length of the scratch buffer.
    pub fn scratch_len(&self) -> usize {
        self.temp.len()
    }

    /// Copies `n` samples of `x` (at `stride`) into the middle of the scratch
    /// buffer and mirrors `size/2` samples around each end, plus one trailing
    /// sample for the high-pass window.
    ///
    /// With `interleave`, the two halves of `x` are woven together
    /// (`x[0], x[n/2], x[1], x[n/2+1], ...`), which is the upsampled
    /// approximation/detail sequence the synthesis filters expect.
    fn sym_extend(&mut self, x: &[f64], n: usize, stride: usize, interleave: bool) {
        let h = self.filter.half();
        let tsize = n + 2 * h + 1;
        if tsize > self.temp.len() {
            debug!("growing direct scratch buffer {} -> {}", self.temp.len(), tsize);
            self.temp.resize(tsize, 0.0);
        }
        let temp = &mut self.temp;

        if interleave {
            let half = n / 2;
            for i in 0..half {
                temp[h + 2 * i] = x[i * stride];
                temp[h + 2 * i + 1] = x[(half + i) * stride];
            }
        } else {
            for i in 0..n {
                temp[h + i] = x[i * stride];
            }
        }

        // Reflect about temp[h] on the left and temp[h + n - 1] on the right.
        for i in 1..=h {
            let l = h - i;
            temp[l] = temp[l + 2 * i];
            temp[n + h - 1 + i] = temp[l + n - 1];
        }
        temp[n + 2 * h] = temp[n - 2];
    }
}

impl WaveletTransform for DirectTransform {
    fn filter(&self) -> &FilterBank {
        &self.filter
    }

    fn forward_single_strided(&mut self, data: &mut [f64], n: usize, stride: usize) -> Result<()> {
        check_signal(data.len(), n, stride, self.filter.size())?;
        self.sym_extend(data, n, stride, false);

        let size = self.filter.size();
        let lpf = self.filter.lpf();
        let hpf = self.filter.hpf();
        let len = n / 2;

        for i in 0..len {
            let window = &self.temp[2 * i..2 * i + size + 1];
            let mut lo = 0.0;
            let mut hi = 0.0;
            for d in 0..size {
                lo += lpf[d] * window[d];
                hi += hpf[d] * window[d + 1];
            }
            data[i * stride] = lo;
            data[(len + i) * stride] = hi;
        }
        Ok(())
    }

    fn inverse_single_strided(&mut self, data: &mut [f64], n: usize, stride: usize) -> Result<()> {
        check_signal(data.len(), n, stride, self.filter.size())?;
        self.sym_extend(data, n, stride, true);

        let size = self.filter.size();
        let ilpf = self.filter.ilpf();
        let ihpf = self.filter.ihpf();

        for i in 0..n {
            let window = &self.temp[i..i + size];
            let mut acc = 0.0;
            // The interleaved buffer is the upsampled pair of bands: the parity
            // of the extended position decides which synthesis filter applies.
            for d in 0..size {
                let coeff = if (i + d) & 1 == 1 { ihpf[d] } else { ilpf[d] };
                acc += coeff * window[d];
            }
            data[i * stride] = acc;
        }
        Ok(())
    }
}
