//! Error handling for the snarkzip library
//!
//! A single crate-wide error enum with constructor helpers, so call sites can
//! stay terse while error messages keep enough context to act on.

use thiserror::Error;

/// Main error type for the snarkzip library
#[derive(Error, Debug)]
pub enum SnarkzipError {
    /// Input exceeds the compressor's fixed ceiling
    #[error("input too large: {size} bytes, limit is {limit}")]
    InputTooLarge {
        /// Size of the rejected input in bytes
        size: usize,
        /// The enforced ceiling
        limit: usize,
    },

    /// Dictionary (after augmentation) exceeds the fixed ceiling
    #[error("dictionary too large: {size} bytes, limit is {limit}")]
    DictTooLarge {
        /// Size of the rejected dictionary in bytes
        size: usize,
        /// The enforced ceiling
        limit: usize,
    },

    /// An escape byte occurred in the input with no back-reference able to
    /// reproduce it
    #[error("could not find a back-reference at index {index}")]
    UnencodableSymbol {
        /// Input position of the offending byte
        index: usize,
    },

    /// Invalid or corrupted data encountered while decoding
    #[error("invalid data: {message}")]
    InvalidData {
        /// Error message describing the issue
        message: String,
    },

    /// A caller-supplied parameter is out of range or inconsistent
    #[error("invalid parameter: {message}")]
    InvalidParameter {
        /// Error message describing the issue
        message: String,
    },
}

impl SnarkzipError {
    /// Create an input-too-large error
    pub fn input_too_large(size: usize, limit: usize) -> Self {
        Self::InputTooLarge { size, limit }
    }

    /// Create a dictionary-too-large error
    pub fn dict_too_large(size: usize, limit: usize) -> Self {
        Self::DictTooLarge { size, limit }
    }

    /// Create an unencodable-symbol error
    pub fn unencodable_symbol(index: usize) -> Self {
        Self::UnencodableSymbol { index }
    }

    /// Create an invalid data error
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData { message: message.into() }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter { message: message.into() }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::InputTooLarge { .. } | Self::DictTooLarge { .. } => "size",
            Self::UnencodableSymbol { .. } => "encoding",
            Self::InvalidData { .. } => "data",
            Self::InvalidParameter { .. } => "parameter",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SnarkzipError>;
