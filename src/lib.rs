//! # Wavelet Packing Library
//!
//! Building blocks for wavelet-based compression of scientific data: a
//! one-dimensional discrete wavelet transform with two interchangeable
//! strategies, and the bit-exact serialization layer used to store its output.
//!
//! This library is organized into several modules:
//! - `utils`: Error handling
//! - `transform`: Filter banks and the direct / lifting 1-D transforms
//! - `stream`: MSB-first bit stream protocol with memory-backed reader and writer
//! - `codec`: Variable-length integer codec and transformed-signal packing
//!
//! Multi-dimensional transforms are built by applying the 1-D kernel to rows
//! and columns through the strided entry points.

// Re-export commonly used types at the crate root
pub use utils::error::{Result, WaveError};

pub mod utils {
    pub mod error;
}

pub mod transform {
    pub mod constants;
    pub mod direct;
    pub mod filter_bank;
    pub mod lifting;
    pub mod wt_1d;

    pub use self::direct::DirectTransform;
    pub use self::filter_bank::FilterBank;
    pub use self::lifting::LiftingTransform;
    pub use self::wt_1d::{Strategy, TransformConfig, WaveletTransform, Wt1d, max_levels};
}

pub mod stream {
    pub mod bitstream;
    pub mod slice_reader;
    pub mod vec_writer;

    pub use self::bitstream::{BitRead, BitStreamError, BitWrite};
    pub use self::slice_reader::SliceBitReader;
    pub use self::vec_writer::VecBitWriter;
}

pub mod codec {
    pub mod signal;
    pub mod varint;

    pub use self::signal::{SignalHeader, pack, read_signal, unpack, write_signal};
}

// Public API exports
pub use crate::stream::{BitRead, BitWrite, SliceBitReader, VecBitWriter};
pub use crate::transform::{
    DirectTransform, FilterBank, LiftingTransform, Strategy, TransformConfig, WaveletTransform, Wt1d,
};

// Constants
pub const WAVEPACK_VERSION: &str = env!("CARGO_PKG_VERSION");
