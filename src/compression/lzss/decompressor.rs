//! Native reference decompressor
//!
//! The production decompressor for this format lives inside a SNARK
//! circuit; this native implementation defines the reference behaviour the
//! encoder is tested against and serves callers that need the plaintext
//! outside a proof.

use crate::compression::lzss::backref::{init_backref_types, Backref};
use crate::compression::lzss::header::Header;
use crate::compression::lzss::{augment_dict, Level, SYMBOL_DICT, SYMBOL_LONG, SYMBOL_SHORT};
use crate::error::{Result, SnarkzipError};
use crate::io::bits::BitReader;

/// Decompress `data` against the same dictionary the compressor was given
///
/// The dictionary is augmented exactly as the compressor augments it, so
/// callers pass the original, un-augmented bytes.
pub fn decompress(data: &[u8], dict: &[u8]) -> Result<Vec<u8>> {
    let mut r = BitReader::new(data);
    let header = Header::read_from(&mut r)?;

    if header.level == Level::NoCompression {
        return Ok(data[Header::BYTE_SIZE..].to_vec());
    }

    let dict = augment_dict(dict);
    let (short_type, long_type, dict_type) = init_backref_types(dict.len(), header.level);

    let mut out: Vec<u8> = Vec::new();
    let mut s = r.try_read_byte();
    while !r.has_error() {
        match s {
            SYMBOL_SHORT | SYMBOL_LONG => {
                let btype = if s == SYMBOL_SHORT { short_type } else { long_type };
                let mut b = Backref::new(btype);
                b.read_from(&mut r);
                // b.address is a distance; the source must lie in prior output
                if b.address > out.len() {
                    return Err(SnarkzipError::invalid_data(format!(
                        "back-reference distance {} exceeds output length {}",
                        b.address,
                        out.len()
                    )));
                }
                // re-indexing against the growing buffer makes overlapping
                // copies reproduce runs
                for _ in 0..b.length {
                    out.push(out[out.len() - b.address]);
                }
            }
            SYMBOL_DICT => {
                let mut b = Backref::new(dict_type);
                b.read_from(&mut r);
                if b.address + b.length > dict.len() {
                    return Err(SnarkzipError::invalid_data(format!(
                        "dictionary reference {}..{} out of range for dictionary of {} bytes",
                        b.address,
                        b.address + b.length,
                        dict.len()
                    )));
                }
                out.extend_from_slice(&dict[b.address..b.address + b.length]);
            }
            literal => out.push(literal),
        }
        s = r.try_read_byte();
    }

    Ok(out)
}
