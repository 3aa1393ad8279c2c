//! # Snarkzip: SNARK-friendly dictionary compression
//!
//! This crate implements a dictionary-assisted LZSS byte compressor whose
//! encoded output is designed to be cheaply verifiable inside a
//! zero-knowledge (SNARK) circuit, together with the symbol-stream codec
//! used to feed compressed data to hashes and circuits.
//!
//! ## Key Features
//!
//! - **LZSS encoder**: greedy match selection with a two-position
//!   lookahead over suffix indexes of the input and a shared dictionary
//! - **SNARK-aligned bitstream**: fixed-width fields, escape-byte framing,
//!   and word alignment up to fully byte-aligned output per [`Level`]
//! - **Hint replay**: re-emit a previous compression of a prefix instead of
//!   searching for matches again
//! - **Symbol streams**: reversible byte ↔ symbol ↔ field-element packing
//!   with checksums over arbitrary-precision elements
//!
//! ## Quick Start
//!
//! ```rust
//! use snarkzip::{decompress, Compressor, Level, SymbolStream};
//!
//! let dict = b"a shared dictionary both sides agree on";
//! let mut compressor = Compressor::new(dict, Level::BestCompression)?;
//!
//! let input = b"a shared dictionary both sides agree on, twice over";
//! let compressed = compressor.compress(input)?;
//! assert_eq!(decompress(&compressed, dict)?, input);
//!
//! // symbol-stream view of the compressed bytes, four bits per symbol
//! let stream = SymbolStream::from_bytes(&compressed, 4)?;
//! assert_eq!(stream.to_bytes(), compressed);
//! # Ok::<(), snarkzip::error::SnarkzipError>(())
//! ```

#![warn(missing_docs)]

pub mod algorithms;
pub mod compression;
pub mod error;
pub mod io;
pub mod stream;

// Re-export core types
pub use algorithms::suffix_index::SuffixIndex;
pub use compression::lzss::{
    augment_dict, decompress, BackrefType, Compressor, Header, Level, MAX_DICT_SIZE,
    MAX_INPUT_SIZE, SYMBOL_DICT, SYMBOL_LONG, SYMBOL_SHORT, VERSION,
};
pub use error::{Result, SnarkzipError};
pub use io::bits::{BitReader, BitWriter};
pub use stream::SymbolStream;
