//! SNARK-friendly dictionary-assisted LZSS compression
//!
//! # Overview
//!
//! The encoder emits a bitstream of literal bytes and *back-references*:
//! copies from either a shared dictionary or the previously emitted output.
//! Three reserved escape bytes introduce the three back-reference kinds; a
//! literal is any other byte written whole. The layout trades a few percent
//! of compression ratio for a format a SNARK decompressor can verify with
//! few constraints: fixed-width fields, no entropy coding, and an optional
//! word alignment (the compression [`Level`]) up to fully byte-aligned
//! output.
//!
//! # Format
//!
//! ```text
//! [ version: u8 ][ level: u8 ][ payload ... ]
//! ```
//!
//! With `level = 0` the payload is the raw input. Otherwise it is a
//! bit-packed item sequence; each item is a literal byte or an escape byte
//! followed by a length field and an address field (see
//! [`BackrefType`]). The dictionary itself is never embedded: compressor
//! and decompressor share it out of band.
//!
//! # Usage Example
//!
//! ```rust
//! use snarkzip::compression::lzss::{decompress, Compressor, Level};
//!
//! let dict = b"the quick brown fox jumps over the lazy dog";
//! let mut compressor = Compressor::new(dict, Level::BestCompression)?;
//!
//! let input = b"the lazy dog jumps over the quick brown fox";
//! let compressed = compressor.compress(input)?;
//! assert_eq!(decompress(&compressed, dict)?, input);
//! # Ok::<(), snarkzip::error::SnarkzipError>(())
//! ```

pub mod backref;
pub mod compressor;
pub mod decompressor;
pub mod header;

pub use backref::{init_backref_types, BackrefType};
pub use compressor::{augment_dict, Compressor};
pub use decompressor::decompress;
pub use header::Header;

use crate::error::{Result, SnarkzipError};

/// Version byte written at the start of every compressed output
pub const VERSION: u8 = 1;

/// Escape byte introducing a dictionary back-reference
pub const SYMBOL_DICT: u8 = 0xFF;

/// Escape byte introducing a short back-reference into prior output
pub const SYMBOL_SHORT: u8 = 0xFE;

/// Escape byte introducing a long back-reference into prior output
pub const SYMBOL_LONG: u8 = 0xFD;

/// Maximum input size the compressor accepts, in bytes
pub const MAX_INPUT_SIZE: usize = 1 << 21;

/// Maximum dictionary size (after augmentation), in bytes
pub const MAX_DICT_SIZE: usize = 1 << 22;

/// Compression level: the word size, in bits, that every back-reference
/// field is aligned to
///
/// Higher alignment wastes bits but reduces the constraint count of the
/// SNARK-side decompressor, which consumes the stream in level-sized words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Level {
    /// Store the input verbatim; the encoder is disabled
    NoCompression = 0,
    /// Bit-granular stream; best ratio, most decompressor constraints
    BestCompression = 1,
    /// Fields aligned to 2-bit words
    GoodCompression = 2,
    /// Fields aligned to 4-bit words
    GoodSnarkDecompression = 4,
    /// Fully byte-aligned stream; cheapest to verify, worst ratio
    BestSnarkDecompression = 8,
}

impl Level {
    /// Decode a level from its header byte
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Level::NoCompression),
            1 => Ok(Level::BestCompression),
            2 => Ok(Level::GoodCompression),
            4 => Ok(Level::GoodSnarkDecompression),
            8 => Ok(Level::BestSnarkDecompression),
            _ => Err(SnarkzipError::invalid_data(format!(
                "invalid compression level: {}",
                value
            ))),
        }
    }
}

/// A byte may appear as a literal only if it is not one of the escapes.
pub(crate) fn can_encode_symbol(b: u8) -> bool {
    b != SYMBOL_DICT && b != SYMBOL_SHORT && b != SYMBOL_LONG
}
