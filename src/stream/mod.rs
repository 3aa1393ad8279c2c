//! Symbol-stream codec
//!
//! # Overview
//!
//! A [`SymbolStream`] is a sequence of integers over an explicit alphabet
//! size, used as the intermediate representation between raw byte buffers
//! and the fixed-bit "field elements" a hash or a SNARK circuit ingests.
//! The codec is reversible in both directions: bytes ↔ symbols
//! ([`SymbolStream::from_bytes`] / [`SymbolStream::to_bytes`]) and symbols ↔
//! byte-aligned field elements ([`SymbolStream::fill_bytes`] /
//! [`SymbolStream::read_bytes`]).
//!
//! Packing multiplies by the alphabet radix and accumulates; the elements
//! are arbitrary-precision ([`num_bigint::BigUint`]) because typical field
//! widths (254, 377 bits) exceed machine words.
//!
//! # Usage Example
//!
//! ```rust
//! use snarkzip::stream::SymbolStream;
//!
//! let stream = SymbolStream::from_bytes(&[0xAB, 0xCD], 4)?;
//! assert_eq!(stream.d, vec![0xA, 0xB, 0xC, 0xD]);
//! assert_eq!(stream.to_bytes(), vec![0xAB, 0xCD]);
//! # Ok::<(), snarkzip::error::SnarkzipError>(())
//! ```

use crate::error::{Result, SnarkzipError};
use crate::io::bits::{BitReader, BitWriter};
use digest::Digest;
use num_bigint::BigUint;

/// A sequence of symbols over an explicit alphabet
///
/// Every symbol satisfies `0 <= s < nb_symbs`; serialised forms give each
/// symbol exactly `bit_len(nb_symbs)` bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolStream {
    /// The symbols
    pub d: Vec<usize>,
    /// Alphabet size
    pub nb_symbs: usize,
}

impl SymbolStream {
    /// Create an empty stream over an alphabet of `nb_symbs` symbols
    pub fn new(nb_symbs: usize) -> Self {
        Self { d: Vec::new(), nb_symbs }
    }

    /// Split `input`, viewed as a big-endian bitstream, into fixed-width
    /// symbols of `bits_per_symbol` bits each
    ///
    /// The output has `input.len() * 8 / bits_per_symbol` symbols
    /// (truncating) over an alphabet of `1 << bits_per_symbol`.
    pub fn from_bytes(input: &[u8], bits_per_symbol: u8) -> Result<Self> {
        let mut r = BitReader::new(input);
        let n = input.len() * 8 / bits_per_symbol as usize;
        let mut d = Vec::with_capacity(n);
        for _ in 0..n {
            d.push(r.read_bits(bits_per_symbol)? as usize);
        }
        Ok(Self { d, nb_symbs: 1 << bits_per_symbol })
    }

    /// Serialise the symbols back into bytes, MSB-first, zero-padding the
    /// trailing byte
    ///
    /// No metadata (stream length, alphabet) is written.
    pub fn to_bytes(&self) -> Vec<u8> {
        let bits_per_word = bit_len(self.nb_symbs);
        let mut w = BitWriter::with_capacity((self.d.len() * bits_per_word + 7) / 8);
        for &symbol in &self.d {
            // a symbol always fits its word width
            w.write_bits(symbol as u64, bits_per_word as u8)
                .expect("symbol word width exceeds 64 bits");
        }
        w.into_bytes()
    }

    /// Number of symbols in the stream
    pub fn len(&self) -> usize {
        self.d.len()
    }

    /// Whether the stream holds no symbols
    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }

    /// The symbol at position `i`
    pub fn at(&self, i: usize) -> usize {
        self.d[i]
    }

    /// Length of the zero run starting right after position `i`, plus one
    pub fn run_len(&self, i: usize) -> usize {
        let mut run_len = 1;
        while i + run_len < self.d.len() && self.d[i + run_len] == 0 {
            run_len += 1;
        }
        run_len
    }

    /// Re-express each symbol as digits over a smaller alphabet,
    /// most-significant digit first
    ///
    /// The current alphabet size must be a power of `nb_symbs`.
    pub fn break_up(&self, nb_symbs: usize) -> SymbolStream {
        let new_per_old = log_base(self.nb_symbs, nb_symbs);
        let mut d = vec![0usize; self.d.len() * new_per_old];
        for i in 0..self.d.len() {
            let mut v = self.d[i];
            for j in 0..new_per_old {
                d[(i + 1) * new_per_old - j - 1] = v % nb_symbs;
                v /= nb_symbs;
            }
        }
        SymbolStream { d, nb_symbs }
    }

    /// Number of symbols per packed element of `nb_bits` bits
    fn words_per_elem(&self, nb_bits: usize) -> usize {
        (nb_bits - 1) / bit_len(self.nb_symbs)
    }

    /// Group the stream into field elements of `nb_bits` bits
    ///
    /// Each group is interpreted as a big-endian base-radix integer (first
    /// symbol most significant); the last group is zero-padded on the
    /// low-significance side.
    pub fn pack(&self, nb_bits: usize) -> Vec<BigUint> {
        let word_len = bit_len(self.nb_symbs);
        assert!(word_len < nb_bits, "words do not fit in elements");
        let words_per_elem = self.words_per_elem(nb_bits);

        let nb_elems = (self.d.len() + words_per_elem - 1) / words_per_elem;
        let mut packed = Vec::with_capacity(nb_elems);
        for i in 0..nb_elems {
            let mut elem = BigUint::default();
            for j in 0..words_per_elem {
                let abs_j = i * words_per_elem + j;
                let digit = if abs_j < self.d.len() { self.d[abs_j] } else { 0 };
                elem = (elem << word_len) | BigUint::from(digit);
            }
            packed.push(elem);
        }
        packed
    }

    /// Serialise the stream as a 4-byte big-endian length prefix followed
    /// by one byte-aligned block of `ceil(nb_bits / 8)` bytes per element
    ///
    /// Within each block the element value sits in the low-order end; the
    /// high unused bits are zero. The last element carries only the symbols
    /// that exist.
    pub fn fill_bytes(&self, dst: &mut [u8], nb_bits: usize) -> Result<()> {
        let bits_per_word = bit_len(self.nb_symbs);
        if bits_per_word >= nb_bits {
            return Err(SnarkzipError::invalid_parameter("words do not fit in elements"));
        }
        let words_per_elem = self.words_per_elem(nb_bits);
        let bytes_per_elem = (nb_bits + 7) / 8;
        let nb_elems = (self.d.len() + words_per_elem - 1) / words_per_elem;

        if dst.len() < (self.d.len() * bits_per_word + 7) / 8 + 4 {
            return Err(SnarkzipError::invalid_parameter("not enough room in dst"));
        }

        dst[..4].copy_from_slice(&(self.d.len() as u32).to_be_bytes());
        let dst = &mut dst[4..];

        for i in 0..nb_elems {
            let mut elem = BigUint::default();
            for j in 0..words_per_elem {
                let abs_j = i * words_per_elem + j;
                if abs_j >= self.d.len() {
                    break;
                }
                elem = (elem << bits_per_word) | BigUint::from(self.d[abs_j]);
            }
            fill_be(&elem, &mut dst[i * bytes_per_elem..(i + 1) * bytes_per_elem]);
        }
        Ok(())
    }

    /// Inverse of [`SymbolStream::fill_bytes`] with the same `nb_bits`
    ///
    /// Requires a power-of-two alphabet. The stream is resized to the
    /// length read from the prefix.
    pub fn read_bytes(&mut self, src: &[u8], nb_bits: usize) -> Result<()> {
        let bits_per_word = bit_len(self.nb_symbs);
        if bits_per_word >= nb_bits {
            return Err(SnarkzipError::invalid_parameter("words do not fit in elements"));
        }
        if self.nb_symbs != 1 << bits_per_word {
            return Err(SnarkzipError::invalid_parameter(
                "only powers of two are supported for the alphabet size",
            ));
        }
        if src.len() < 4 {
            return Err(SnarkzipError::invalid_data("not enough bytes"));
        }

        let mut prefix = [0u8; 4];
        prefix.copy_from_slice(&src[..4]);
        self.d.resize(u32::from_be_bytes(prefix) as usize, 0);
        let src = &src[4..];

        let words_per_elem = self.words_per_elem(nb_bits);
        let bytes_per_elem = (nb_bits + 7) / 8;
        let nb_elems = (self.d.len() + words_per_elem - 1) / words_per_elem;

        if src.len() < nb_elems * bytes_per_elem {
            return Err(SnarkzipError::invalid_data("not enough bytes"));
        }

        let mut r = BitReader::new(src);
        for i in 0..nb_elems {
            // element values are right-aligned in their block
            skip_bits(&mut r, 8 * bytes_per_elem - bits_per_word * words_per_elem);
            if i + 1 == nb_elems {
                let words_to_read = self.d.len() - i * words_per_elem;
                skip_bits(&mut r, (words_per_elem - words_to_read) * bits_per_word);
            }
            for j in 0..words_per_elem {
                let word_i = i * words_per_elem + j;
                if word_i >= self.d.len() {
                    continue;
                }
                self.d[word_i] = r.try_read_bits(bits_per_word as u8) as usize;
            }
        }
        r.error()
    }

    /// Hash the stream: each packed element padded to `ceil(field_bits/8)`
    /// bytes, then the length as one more padded element
    pub fn checksum<D: Digest>(&self, field_bits: usize) -> Vec<u8> {
        let field_bytes = (field_bits + 7) / 8;
        let mut block = vec![0u8; field_bytes];
        let mut hasher = D::new();
        for elem in self.pack(field_bits) {
            fill_be(&elem, &mut block);
            hasher.update(&block);
        }
        fill_be(&BigUint::from(self.d.len()), &mut block);
        hasher.update(&block);
        hasher.finalize().to_vec()
    }

    /// Append `value` as `nb_words` base-`nb_symbs` digits, least
    /// significant digit first
    ///
    /// # Panics
    ///
    /// Panics if `value` does not fit in `nb_words` digits; that is a
    /// programming error, not an input condition.
    pub fn write_num(&mut self, value: usize, nb_words: usize) -> &mut Self {
        let mut v = value;
        for _ in 0..nb_words {
            self.d.push(v % self.nb_symbs);
            v /= self.nb_symbs;
        }
        assert!(v == 0, "{} does not fit in {} words of {} symbols", value, nb_words, self.nb_symbs);
        self
    }

    /// Read back `nb_words` digits written by [`SymbolStream::write_num`]
    pub fn read_num(&self, start: usize, nb_words: usize) -> usize {
        let mut res = 0;
        for j in (0..nb_words).rev() {
            res = res * self.nb_symbs + self.d[start + j];
        }
        res
    }
}

/// Smallest bit width `b` with `2^b >= n`
fn bit_len(n: usize) -> usize {
    let mut b = 0;
    while (1usize << b) < n {
        b += 1;
    }
    b
}

/// Smallest exponent `e` with `base^e >= x`
fn log_base(x: usize, base: usize) -> usize {
    let mut exp = 0;
    let mut pow = 1;
    while pow < x {
        pow *= base;
        exp += 1;
    }
    exp
}

/// Big-endian fill of `v` into `dst`, left-padded with zeros
fn fill_be(v: &BigUint, dst: &mut [u8]) {
    let bytes = v.to_bytes_be();
    let (pad, tail) = dst.split_at_mut(dst.len() - bytes.len());
    pad.fill(0);
    tail.copy_from_slice(&bytes);
}

/// Discard `n` bits from `r` (sticky on under-run, like the reads)
fn skip_bits(r: &mut BitReader<'_>, n: usize) {
    let mut n = n;
    while n > 0 {
        let take = n.min(64);
        r.try_read_bits(take as u8);
        n -= take;
    }
}
