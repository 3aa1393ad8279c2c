//! Back-reference types and their wire codec
//!
//! A back-reference is encoded as its escape byte (written whole), a length
//! field of `nb_bits_length` bits carrying `length - 1`, and an address
//! field of `nb_bits_address` bits carrying `address - 1` for the two
//! relative kinds or the absolute offset for the dictionary kind. The two
//! numeric fields use a little-endian-per-byte layout: whole low-order
//! bytes first, any residual high bits last. The SNARK decompressor
//! consumes exactly this layout, so it must be reproduced bit for bit.

use crate::compression::lzss::{Level, SYMBOL_DICT, SYMBOL_LONG, SYMBOL_SHORT};
use crate::error::Result;
use crate::io::bits::{BitReader, BitWriter};

/// Address-field width of the short back-reference kind, before alignment
const SHORT_ADDRESS_BITS: usize = 14;

/// Address-field width of the long back-reference kind, before alignment
const LONG_ADDRESS_BITS: usize = 19;

/// Length-field width shared by every back-reference kind
const LENGTH_BITS: usize = 8;

/// Immutable descriptor of one back-reference kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackrefType {
    /// Escape byte marking this kind in the output
    pub symbol: u8,
    /// Address field width in bits
    pub nb_bits_address: u8,
    /// Length field width in bits
    pub nb_bits_length: u8,
    /// Total encoded size in bytes, rounded up
    pub nb_bytes_backref: usize,
    /// Largest representable address (relative kinds: largest distance)
    pub max_address: usize,
    /// Largest representable copy length
    pub max_length: usize,
    /// Whether addresses are absolute dictionary offsets
    pub dict_only: bool,
}

impl BackrefType {
    fn new(symbol: u8, nb_bits_address: u8, nb_bits_length: u8, dict_only: bool) -> Self {
        let nb_bits = 8 + nb_bits_address as usize + nb_bits_length as usize;
        Self {
            symbol,
            nb_bits_address,
            nb_bits_length,
            nb_bytes_backref: (nb_bits + 7) / 8,
            max_address: 1 << nb_bits_address,
            max_length: 1 << nb_bits_length,
            dict_only,
        }
    }
}

/// Build the short, long and dictionary back-reference types for a
/// dictionary of `dict_len` bytes at compression `level`
///
/// Each address-bit count is rounded up to a multiple of the level's word
/// size, so that at [`Level::BestSnarkDecompression`] every field is
/// byte-aligned. The dictionary kind sizes its address field to the
/// dictionary.
pub fn init_backref_types(dict_len: usize, level: Level) -> (BackrefType, BackrefType, BackrefType) {
    let word_align = |nb_bits: usize| -> u8 {
        match level {
            Level::NoCompression => nb_bits as u8,
            _ => {
                let word = level as usize;
                ((nb_bits + word - 1) / word * word) as u8
            }
        }
    };
    let short = BackrefType::new(SYMBOL_SHORT, word_align(SHORT_ADDRESS_BITS), LENGTH_BITS as u8, false);
    let long = BackrefType::new(SYMBOL_LONG, word_align(LONG_ADDRESS_BITS), LENGTH_BITS as u8, false);
    let dict = BackrefType::new(SYMBOL_DICT, word_align(bits_len(dict_len)), LENGTH_BITS as u8, true);
    (short, long, dict)
}

/// Number of bits needed to represent `n` (0 for 0)
fn bits_len(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

/// One back-reference occurrence
///
/// `address` is an absolute offset into the reference source while the
/// occurrence is being searched for or emitted; [`Backref::read_from`]
/// yields a distance instead for the two relative kinds, mirroring the wire
/// encoding.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Backref {
    pub btype: BackrefType,
    pub address: usize,
    pub length: usize,
}

impl Backref {
    pub(crate) fn new(btype: BackrefType) -> Self {
        Self { btype, address: 0, length: 0 }
    }

    /// Net bytes saved versus emitting `length` literals
    pub(crate) fn savings(&self) -> isize {
        self.length as isize - self.btype.nb_bytes_backref as isize
    }

    /// Emit the back-reference at input position `i` (used to turn the
    /// absolute address into a distance for the relative kinds)
    pub(crate) fn write_to(&self, w: &mut BitWriter, i: usize) -> Result<()> {
        w.write_byte(self.btype.symbol);
        write_num(w, self.length - 1, self.btype.nb_bits_length)?;
        let address = if self.btype.dict_only { self.address } else { i - self.address - 1 };
        write_num(w, address, self.btype.nb_bits_address)?;
        Ok(())
    }

    /// Decode the length and address fields following an escape byte
    ///
    /// For the relative kinds `address` is the decoded *distance* (1-based);
    /// for the dictionary kind it is the absolute offset.
    pub(crate) fn read_from(&mut self, r: &mut BitReader) {
        self.length = read_num(r, self.btype.nb_bits_length) + 1;
        let n = read_num(r, self.btype.nb_bits_address);
        self.address = if self.btype.dict_only { n } else { n + 1 };
    }
}

/// Write `n` in `nb_bits` bits, whole low bytes first, residual bits last
pub(crate) fn write_num(w: &mut BitWriter, mut n: usize, mut nb_bits: u8) -> Result<()> {
    while nb_bits >= 8 {
        w.write_byte(n as u8);
        n >>= 8;
        nb_bits -= 8;
    }
    if nb_bits > 0 {
        w.write_bits((n & ((1 << nb_bits) - 1)) as u64, nb_bits)?;
    }
    Ok(())
}

/// Inverse of [`write_num`]
pub(crate) fn read_num(r: &mut BitReader, mut nb_bits: u8) -> usize {
    let mut res = 0usize;
    let mut shift = 0u32;
    while nb_bits >= 8 {
        res |= (r.try_read_byte() as usize) << shift;
        shift += 8;
        nb_bits -= 8;
    }
    if nb_bits > 0 {
        res |= (r.try_read_bits(nb_bits) as usize) << shift;
    }
    res
}
