// src/transform/constants.rs

//! Constants for the CDF 9/7 wavelet.
//!
//! The convolution taps are the impulse responses of the lifting factorization
//! below, laid out for a 12-tap bank (half-length 6). Zero entries are padding
//! that keeps every array the same length and centers each response on the
//! sample it produces.

/// Number of taps in the padded CDF 9/7 filter bank.
pub const CDF97_SIZE: usize = 12;

/// Analysis low-pass (9 taps, centered on index 6).
pub const CDF97_LPF: [f64; CDF97_SIZE] = [
    0.0,
    0.0,
    0.037828455506995186,
    -0.023849465019379817,
    -0.11062440441842494,
    0.3774028556126545,
    0.8526986790094008,
    0.3774028556126545,
    -0.11062440441842494,
    -0.023849465019379817,
    0.037828455506995186,
    0.0,
];

/// Analysis high-pass (7 taps, centered on index 6, applied one sample later).
pub const CDF97_HPF: [f64; CDF97_SIZE] = [
    0.0,
    0.0,
    0.0,
    0.06453888262893802,
    -0.04068941760955816,
    -0.41809227322221343,
    0.7884856164056652,
    -0.41809227322221343,
    -0.04068941760955816,
    0.06453888262893802,
    0.0,
    0.0,
];

/// Synthesis low-pass (7 taps). Weights approximation samples.
pub const CDF97_ILPF: [f64; CDF97_SIZE] = [
    0.0,
    0.0,
    0.0,
    -0.064538882628938,
    -0.04068941760955815,
    0.41809227322221365,
    0.7884856164056652,
    0.41809227322221365,
    -0.04068941760955815,
    -0.064538882628938,
    0.0,
    0.0,
];

/// Synthesis high-pass (9 taps). Weights detail samples.
pub const CDF97_IHPF: [f64; CDF97_SIZE] = [
    0.0,
    0.0,
    0.03782845550699518,
    0.023849465019379817,
    -0.11062440441842492,
    -0.37740285561265446,
    0.8526986790094007,
    -0.37740285561265446,
    -0.11062440441842492,
    0.023849465019379817,
    0.03782845550699518,
    0.0,
];

/// First predict step (odd samples).
pub const LIFT_ALPHA: f64 = -1.586134342059924;

/// First update step (even samples).
pub const LIFT_BETA: f64 = -0.052980118572961;

/// Second predict step (odd samples).
pub const LIFT_GAMMA: f64 = 0.882911075530934;

/// Second update step (even samples).
pub const LIFT_DELTA: f64 = 0.443506852043971;

/// Final scaling: approximations are multiplied by this, details divided.
pub const LIFT_ZETA: f64 = 1.149604398860241;

/// Tolerance used when deciding whether a filter bank is the CDF 9/7 bank.
pub const CDF97_MATCH_TOLERANCE: f64 = 1e-12;
