use std::error::Error;
use std::fmt;
use std::io;

/// Main error type for the wavelet transform and serialization core.
#[derive(Debug)]
pub enum WaveError {
    /// An I/O error occurred
    Io(io::Error),
    /// An invalid argument was provided (bad length, stride, level count or filter bank)
    InvalidArg(String),
    /// An operation was attempted on a configuration that cannot support it
    InvalidOperation(String),
    /// A bit stream was read past its end
    Stream(String),
    /// Serialized data could not be decoded
    EncodingError(String),
}

impl fmt::Display for WaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaveError::Io(err) => write!(f, "I/O error: {}", err),
            WaveError::InvalidArg(msg) => write!(f, "Invalid argument: {}", msg),
            WaveError::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
            WaveError::Stream(msg) => write!(f, "Stream error: {}", msg),
            WaveError::EncodingError(msg) => write!(f, "Encoding error: {}", msg),
        }
    }
}

impl Error for WaveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WaveError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for WaveError {
    fn from(err: io::Error) -> Self {
        WaveError::Io(err)
    }
}

impl From<crate::stream::BitStreamError> for WaveError {
    fn from(err: crate::stream::BitStreamError) -> Self {
        WaveError::Stream(err.to_string())
    }
}

impl From<crate::codec::varint::VarIntError> for WaveError {
    fn from(err: crate::codec::varint::VarIntError) -> Self {
        match err {
            crate::codec::varint::VarIntError::Io(e) => WaveError::Io(e),
            other => WaveError::EncodingError(other.to_string()),
        }
    }
}

/// A specialized `Result` type for transform and codec operations.
pub type Result<T> = std::result::Result<T, WaveError>;
