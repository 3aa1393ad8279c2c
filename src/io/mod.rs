//! Bit-granular I/O
//!
//! The wire format of the compressor is a big-endian, most-significant-bit
//! first bitstream; this module provides the writer and reader it is built
//! on.

pub mod bits;

// Re-export core types
pub use bits::{BitReader, BitWriter};
