//! Compression algorithms
//!
//! The crate's single compression scheme is a dictionary-assisted LZSS
//! variant whose output is designed to be cheap to verify inside a SNARK
//! circuit; see [`lzss`].

pub mod lzss;

pub use lzss::{
    augment_dict, decompress, BackrefType, Compressor, Header, Level, MAX_DICT_SIZE,
    MAX_INPUT_SIZE, SYMBOL_DICT, SYMBOL_LONG, SYMBOL_SHORT, VERSION,
};
