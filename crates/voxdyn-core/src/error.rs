//! Error types for the dynamics core.

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Errors reported by processors and their building blocks.
///
/// Every variant is detected before any processor state is touched, so a
/// failed call leaves the processor exactly as it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The byte buffer does not hold a whole number of 16-bit frames.
    #[error("buffer length {len} is not a multiple of 2 bytes")]
    InvalidBufferLength {
        /// Length of the rejected buffer in bytes.
        len: usize,
    },

    /// An output buffer does not match the input buffer it is paired with.
    #[error("output buffer holds {actual} bytes, expected {expected}")]
    OutputLengthMismatch {
        /// Required length in bytes (the input length).
        expected: usize,
        /// Length of the supplied output buffer.
        actual: usize,
    },

    /// A construction parameter is outside its valid domain.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// No parameter with this name exists on the processor.
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),
}

/// Convenience result type for core operations.
pub type Result<T> = core::result::Result<T, Error>;
