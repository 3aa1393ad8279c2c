//! LZSS encoder kernel and hint-replay fast path
//!
//! # Overview
//!
//! The encoder walks the input with a cursor, at each position querying a
//! suffix index over the input (for the two relative back-reference kinds)
//! and one over the dictionary, then picking the candidate with the best
//! savings. A two-position lookahead may defer the current match when a
//! strictly better one starts just ahead. Escape bytes can never be written
//! as literals, so positions holding one are forced through a
//! back-reference, down to a single-byte copy out of the augmented
//! dictionary.
//!
//! This is deliberately not an optimal LZSS parse: the greedy scheme with
//! its two probes is deterministic and cheap, and the hint-replay path and
//! the test vectors depend on reproducing it exactly.
//!
//! # Hint replay
//!
//! A previous compression of a prefix of the input can be passed as a
//! *hint*. The encoder replays the hint's item stream, verifying every
//! reconstructed byte against the input, and re-emits the verified items
//! directly instead of searching for matches again. The first discrepancy
//! stops the replay and the main loop resumes from the position reached.

use crate::algorithms::suffix_index::SuffixIndex;
use crate::compression::lzss::backref::{init_backref_types, Backref, BackrefType};
use crate::compression::lzss::header::Header;
use crate::compression::lzss::{
    can_encode_symbol, Level, MAX_DICT_SIZE, MAX_INPUT_SIZE, SYMBOL_DICT, SYMBOL_LONG,
    SYMBOL_SHORT,
};
use crate::error::{Result, SnarkzipError};
use crate::io::bits::{BitReader, BitWriter};

/// Ensure the dictionary contains the three escape bytes
///
/// Escape bytes occurring in plaintext must be produced through a
/// back-reference; appending any missing escape (in dict, short, long
/// order) guarantees a dictionary reference can always supply them.
pub fn augment_dict(dict: &[u8]) -> Vec<u8> {
    let mut found_dict = false;
    let mut found_short = false;
    let mut found_long = false;
    for &b in dict {
        match b {
            SYMBOL_DICT => found_dict = true,
            SYMBOL_SHORT => found_short = true,
            SYMBOL_LONG => found_long = true,
            _ => continue,
        }
        if found_dict && found_short && found_long {
            return dict.to_vec();
        }
    }
    let mut augmented = dict.to_vec();
    if !found_dict {
        augmented.push(SYMBOL_DICT);
    }
    if !found_short {
        augmented.push(SYMBOL_SHORT);
    }
    if !found_long {
        augmented.push(SYMBOL_LONG);
    }
    augmented
}

/// Match candidates of the three back-reference kinds at one position
struct Candidates {
    dict: Option<Backref>,
    short: Option<Backref>,
    long: Option<Backref>,
}

impl Candidates {
    /// Pick the candidate with the best savings
    ///
    /// The dictionary kind wins only when it strictly beats both relative
    /// kinds; short wins over long only when strictly better.
    fn best(&self) -> Option<(Backref, isize)> {
        fn savings(candidate: &Option<Backref>) -> isize {
            candidate.as_ref().map_or(isize::MIN, Backref::savings)
        }
        let (s_dict, s_short, s_long) = (savings(&self.dict), savings(&self.short), savings(&self.long));
        if let Some(b) = self.dict {
            if s_dict > s_short && s_dict > s_long {
                return Some((b, s_dict));
            }
        }
        if let Some(b) = self.short {
            if s_short > s_long {
                return Some((b, s_short));
            }
        }
        self.long.map(|b| (b, s_long))
    }
}

/// Stateful single-threaded LZSS compressor bound to one dictionary
///
/// One instance owns its output buffer and reusable suffix-index storage; a
/// call to [`Compressor::compress`] mutates all of it, so concurrent use of
/// one instance is not possible. Distinct instances are independent.
pub struct Compressor {
    bw: BitWriter,
    dict_data: Vec<u8>,
    dict_index: Option<SuffixIndex>,
    input_sa: Vec<u32>,
    level: Level,
}

impl Compressor {
    /// Create a compressor for the given dictionary and level
    ///
    /// The dictionary is augmented with any missing escape bytes; the
    /// augmented form must stay within [`MAX_DICT_SIZE`].
    pub fn new(dict: &[u8], level: Level) -> Result<Self> {
        let dict_data = augment_dict(dict);
        if dict_data.len() > MAX_DICT_SIZE {
            return Err(SnarkzipError::dict_too_large(dict_data.len(), MAX_DICT_SIZE));
        }
        // the dictionary index is only needed when actually compressing
        let dict_index =
            (level != Level::NoCompression).then(|| SuffixIndex::new(&dict_data));
        Ok(Self {
            bw: BitWriter::new(),
            dict_data,
            dict_index,
            input_sa: Vec::new(),
            level,
        })
    }

    /// The level this compressor emits at
    pub fn level(&self) -> Level {
        self.level
    }

    /// Compress `input`
    pub fn compress(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.compress_impl(input, None)
    }

    /// Compress `input`, replaying `hint` to skip match searching over the
    /// prefix it covers
    ///
    /// The hint should be a previous compression of a prefix of `input` by
    /// an identically configured compressor; anything else degrades to a
    /// plain [`Compressor::compress`].
    pub fn compress_with_hint(&mut self, input: &[u8], hint: &[u8]) -> Result<Vec<u8>> {
        self.compress_impl(input, Some(hint))
    }

    fn compress_impl(&mut self, input: &[u8], hint: Option<&[u8]>) -> Result<Vec<u8>> {
        if input.len() > MAX_INPUT_SIZE {
            return Err(SnarkzipError::input_too_large(input.len(), MAX_INPUT_SIZE));
        }

        self.bw.reset();
        let header = Header::new(self.level);
        header.write_to(&mut self.bw);

        if self.level == Level::NoCompression {
            self.bw.write_bytes(input);
            return Ok(self.bw.bytes().to_vec());
        }

        let mut start_i = 0;
        if let Some(hint) = hint {
            start_i = self.compress_from_hint(header, input, hint);
            log::debug!("hint replay covered {} of {} input bytes", start_i, input.len());
        }

        let input_index = SuffixIndex::with_storage(input, std::mem::take(&mut self.input_sa));
        let result = self.encode_from(input, &input_index, start_i);
        self.input_sa = input_index.into_storage();
        result?;

        self.bw.close();
        if self.bw.len() >= input.len() + Header::BYTE_SIZE {
            // compression was not worth it
            log::debug!(
                "compressed {} bytes to {}, storing raw instead",
                input.len(),
                self.bw.len()
            );
            self.bw.reset();
            Header::new(Level::NoCompression).write_to(&mut self.bw);
            self.bw.write_bytes(input);
        }

        Ok(self.bw.bytes().to_vec())
    }

    /// Run the greedy-with-lookahead loop over `input[start_i..]`
    fn encode_from(&mut self, input: &[u8], index: &SuffixIndex, start_i: usize) -> Result<()> {
        let types = init_backref_types(self.dict_data.len(), self.level);

        let mut i = start_i;
        while i < input.len() {
            if !can_encode_symbol(input[i]) {
                // the byte itself is an escape: a back-reference is mandatory
                let candidates = self.fill_candidates(index, input, i, Some(1), &types);
                let Some((best, _)) = candidates.best() else {
                    return Err(SnarkzipError::unencodable_symbol(i));
                };
                best.write_to(&mut self.bw, i)?;
                i += best.length;
                continue;
            }

            let candidates = self.fill_candidates(index, input, i, None, &types);
            let Some((mut best, mut best_savings)) = candidates.best() else {
                self.write_literal(input[i]);
                i += 1;
                continue;
            };

            if i + 1 < input.len() {
                // A match one position ahead only displaces the current one
                // if it is strictly longer by at least the byte skipped.
                let probe = self.fill_candidates(index, input, i + 1, Some(best.length + 1), &types);
                if let Some((new_best, new_savings)) = probe.best() {
                    if new_savings > best_savings {
                        self.write_literal(input[i]);
                        i += 1;
                        best = new_best;
                        best_savings = new_savings;

                        // an even better one at the next position?
                        if can_encode_symbol(input[i]) && i + 1 < input.len() {
                            let probe =
                                self.fill_candidates(index, input, i + 1, Some(best.length + 1), &types);
                            if let Some((new_best, new_savings)) = probe.best() {
                                if new_savings > best_savings {
                                    self.write_literal(input[i]);
                                    i += 1;
                                    best = new_best;
                                }
                            }
                        }
                    }
                } else if i + 2 < input.len() && can_encode_symbol(input[i + 1]) {
                    // nothing usable at i+1; maybe two positions ahead
                    let probe = self.fill_candidates(index, input, i + 2, Some(best.length + 2), &types);
                    if let Some((new_best, new_savings)) = probe.best() {
                        if new_savings > best_savings {
                            self.write_literal(input[i]);
                            self.write_literal(input[i + 1]);
                            i += 2;
                            best = new_best;
                        }
                    }
                }
            }

            best.write_to(&mut self.bw, i)?;
            i += best.length;
        }
        Ok(())
    }

    /// Replay `hint` over the head of `input`, re-emitting verified items;
    /// returns the input position the main loop should resume from
    fn compress_from_hint(&mut self, header: Header, input: &[u8], hint: &[u8]) -> usize {
        let (short_type, long_type, dict_type) =
            init_backref_types(self.dict_data.len(), self.level);

        let mut r = BitReader::new(hint);
        let hint_header = match Header::read_from(&mut r) {
            Ok(h) => h,
            Err(_) => return 0,
        };
        if hint_header != header {
            // the hint was produced under a different format; unusable
            return 0;
        }

        let mut start_i = 0;
        // reconstruction of the decompressed hint, for byte-wise verification
        let mut out: Vec<u8> = Vec::with_capacity(input.len());

        let mut s = r.try_read_byte();
        while !r.has_error() {
            match s {
                SYMBOL_SHORT | SYMBOL_LONG => {
                    let btype = if s == SYMBOL_SHORT { short_type } else { long_type };
                    let mut b = Backref::new(btype);
                    b.read_from(&mut r);
                    // b.address is a distance relative to out's write head
                    if b.address > out.len() || start_i + b.length > input.len() {
                        return start_i;
                    }
                    let new_address = out.len() - b.address;
                    for _ in 0..b.length {
                        out.push(out[out.len() - b.address]);
                    }
                    if out[start_i..start_i + b.length] != input[start_i..start_i + b.length] {
                        // this is not a good backref; resume searching here
                        return start_i;
                    }
                    // re-encode relative to the emit position (identical by
                    // construction, but keeps the distances explicit)
                    b.address = new_address;
                    if b.write_to(&mut self.bw, start_i).is_err() {
                        return start_i;
                    }
                    start_i += b.length;
                }
                SYMBOL_DICT => {
                    let mut b = Backref::new(dict_type);
                    b.read_from(&mut r);
                    if b.address + b.length > self.dict_data.len()
                        || start_i + b.length > input.len()
                    {
                        return start_i;
                    }
                    let slice = &self.dict_data[b.address..b.address + b.length];
                    if slice != &input[start_i..start_i + b.length] {
                        return start_i;
                    }
                    if b.write_to(&mut self.bw, start_i).is_err() {
                        return start_i;
                    }
                    start_i += b.length;
                    out.extend_from_slice(
                        &self.dict_data[b.address..b.address + b.length],
                    );
                }
                literal => {
                    if start_i >= input.len() || literal != input[start_i] {
                        return start_i;
                    }
                    self.write_literal(literal);
                    start_i += 1;
                    out.push(literal);
                }
            }
            s = r.try_read_byte();
        }

        start_i
    }

    /// Find the best occurrence usable as a `btype` back-reference at
    /// position `i`; `min_len` of `None` means the kind's break-even length
    fn find_backref(
        &self,
        index: &SuffixIndex,
        input: &[u8],
        i: usize,
        btype: &BackrefType,
        min_len: Option<usize>,
    ) -> Option<Backref> {
        let min_len = min_len.unwrap_or(btype.nb_bytes_backref);
        if i + min_len > input.len() {
            return None;
        }
        let max_ref_len = btype.max_length.min(input.len() - i);
        if min_len > max_ref_len {
            return None;
        }
        let pattern = &input[i..i + max_ref_len];

        let (address, length) = if btype.dict_only {
            self.dict_index.as_ref()?.lookup_longest(
                &self.dict_data,
                pattern,
                min_len,
                max_ref_len,
                0,
                self.dict_data.len(),
            )?
        } else {
            let window_start = i.saturating_sub(btype.max_address);
            index.lookup_longest(input, pattern, min_len, max_ref_len, window_start, i)?
        };
        Some(Backref { btype: *btype, address, length })
    }

    fn fill_candidates(
        &self,
        index: &SuffixIndex,
        input: &[u8],
        i: usize,
        min_len: Option<usize>,
        types: &(BackrefType, BackrefType, BackrefType),
    ) -> Candidates {
        let (short_type, long_type, dict_type) = types;
        Candidates {
            dict: self.find_backref(index, input, i, dict_type, min_len),
            short: self.find_backref(index, input, i, short_type, min_len),
            long: self.find_backref(index, input, i, long_type, min_len),
        }
    }

    fn write_literal(&mut self, b: u8) {
        debug_assert!(can_encode_symbol(b));
        self.bw.write_byte(b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compression::lzss::decompressor::decompress;
    use crate::compression::lzss::VERSION;

    const ALL_LEVELS: [Level; 4] = [
        Level::BestCompression,
        Level::GoodCompression,
        Level::GoodSnarkDecompression,
        Level::BestSnarkDecompression,
    ];

    /// Decoded view of one payload item, for wire-level assertions
    #[derive(Debug, PartialEq)]
    enum Item {
        Literal(u8),
        // address: distance for short/long, absolute offset for dict
        Backref { symbol: u8, address: usize, length: usize },
    }

    fn walk_items(compressed: &[u8], dict: &[u8]) -> Vec<Item> {
        let dict = augment_dict(dict);
        let mut r = BitReader::new(compressed);
        let header = Header::read_from(&mut r).unwrap();
        assert_ne!(header.level, Level::NoCompression, "payload is not item-coded");
        let (short_type, long_type, dict_type) = init_backref_types(dict.len(), header.level);

        let mut items = Vec::new();
        let mut s = r.try_read_byte();
        while !r.has_error() {
            match s {
                SYMBOL_SHORT | SYMBOL_LONG | SYMBOL_DICT => {
                    let btype = match s {
                        SYMBOL_SHORT => short_type,
                        SYMBOL_LONG => long_type,
                        _ => dict_type,
                    };
                    let mut b = Backref::new(btype);
                    b.read_from(&mut r);
                    items.push(Item::Backref { symbol: s, address: b.address, length: b.length });
                }
                literal => items.push(Item::Literal(literal)),
            }
            s = r.try_read_byte();
        }
        items
    }

    #[test]
    fn test_augment_dict_appends_missing_escapes() {
        assert_eq!(augment_dict(&[]), vec![SYMBOL_DICT, SYMBOL_SHORT, SYMBOL_LONG]);
        assert_eq!(
            augment_dict(&[1, 2, SYMBOL_SHORT]),
            vec![1, 2, SYMBOL_SHORT, SYMBOL_DICT, SYMBOL_LONG]
        );
        let complete = [SYMBOL_DICT, SYMBOL_SHORT, SYMBOL_LONG];
        assert_eq!(augment_dict(&complete), complete.to_vec());
    }

    #[test]
    fn test_augment_dict_idempotent() {
        for dict in [&b""[..], b"abc", &[SYMBOL_LONG, 7][..]] {
            let once = augment_dict(dict);
            assert_eq!(augment_dict(&once), once);
        }
    }

    #[test]
    fn test_new_rejects_oversized_dict() {
        // escape-free dictionary grows by three on augmentation
        let dict = vec![0u8; MAX_DICT_SIZE - 2];
        assert!(matches!(
            Compressor::new(&dict, Level::BestCompression),
            Err(SnarkzipError::DictTooLarge { .. })
        ));
    }

    #[test]
    fn test_compress_rejects_oversized_input() {
        let mut c = Compressor::new(b"", Level::NoCompression).unwrap();
        let input = vec![0u8; MAX_INPUT_SIZE + 1];
        assert!(matches!(
            c.compress(&input),
            Err(SnarkzipError::InputTooLarge { .. })
        ));
    }

    #[test]
    fn test_empty_input_is_bare_header() {
        let mut c = Compressor::new(b"abc", Level::BestSnarkDecompression).unwrap();
        let out = c.compress(b"").unwrap();
        // an empty payload cannot shrink anything, so the no-compression
        // fallback header is emitted
        assert_eq!(out, vec![VERSION, Level::NoCompression as u8]);
        assert_eq!(decompress(&out, b"abc").unwrap(), b"");
    }

    #[test]
    fn test_no_compression_level_stores_raw() {
        let mut c = Compressor::new(b"dict", Level::NoCompression).unwrap();
        let out = c.compress(b"hello").unwrap();
        assert_eq!(out, [&[VERSION, 0][..], b"hello"].concat());
        assert_eq!(decompress(&out, b"dict").unwrap(), b"hello");
    }

    #[test]
    fn test_escape_only_input_falls_back_to_raw() {
        // one 3-byte dict reference replaces 3 input bytes: zero net saving,
        // so the raw fallback wins
        let input = [SYMBOL_DICT, SYMBOL_SHORT, SYMBOL_LONG];
        let mut c = Compressor::new(&[], Level::BestSnarkDecompression).unwrap();
        let out = c.compress(&input).unwrap();
        assert_eq!(out, vec![VERSION, 0, SYMBOL_DICT, SYMBOL_SHORT, SYMBOL_LONG]);
        assert_eq!(decompress(&out, &[]).unwrap(), input);
    }

    #[test]
    fn test_escape_run_encodes_as_backrefs() {
        // three escapes repeated: the first triple comes from the
        // dictionary, the rest as one overlapping short copy
        let input: Vec<u8> = [SYMBOL_DICT, SYMBOL_SHORT, SYMBOL_LONG].repeat(4);
        let mut c = Compressor::new(&[], Level::BestSnarkDecompression).unwrap();
        let out = c.compress(&input).unwrap();
        assert_eq!(out[0], VERSION);
        assert_eq!(out[1], Level::BestSnarkDecompression as u8);
        assert_eq!(
            walk_items(&out, &[]),
            vec![
                Item::Backref { symbol: SYMBOL_DICT, address: 0, length: 3 },
                Item::Backref { symbol: SYMBOL_SHORT, address: 3, length: 9 },
            ]
        );
        assert_eq!(decompress(&out, &[]).unwrap(), input);
    }

    #[test]
    fn test_escape_bytes_never_emitted_as_literals() {
        let input: Vec<u8> =
            b"escape coming >\xff< and >\xfe< twice \xff\xfe\xfd the end".to_vec();
        let dict = b"escape coming >\xff< and >\xfe< twice ";
        for level in ALL_LEVELS {
            let mut c = Compressor::new(dict, level).unwrap();
            let out = c.compress(&input).unwrap();
            if out[1] != 0 {
                for item in walk_items(&out, dict) {
                    if let Item::Literal(b) = item {
                        assert!(can_encode_symbol(b), "escape {:#x} leaked as literal", b);
                    }
                }
            }
            assert_eq!(decompress(&out, dict).unwrap(), input);
        }
    }

    #[test]
    fn test_input_equal_to_dict_is_one_reference() {
        let dict: Vec<u8> = (0u8..64).collect();
        let mut c = Compressor::new(&dict, Level::BestCompression).unwrap();
        let out = c.compress(&dict).unwrap();
        assert_eq!(
            walk_items(&out, &dict),
            vec![Item::Backref { symbol: SYMBOL_DICT, address: 0, length: 64 }]
        );
        assert_eq!(decompress(&out, &dict).unwrap(), dict);
    }

    #[test]
    fn test_prior_output_wins_savings_tie_against_dict() {
        // dictionary sized so a dictionary reference costs as many bytes as
        // a short one: equal savings must go to the short kind
        let mut dict = b"abcdefgh".to_vec();
        dict.extend([1u8, 2].repeat(496));
        let input = b"xxxabcdefghyyyabcdefgh";

        let mut c = Compressor::new(&dict, Level::BestCompression).unwrap();
        let out = c.compress(input).unwrap();
        assert_eq!(
            walk_items(&out, &dict),
            vec![
                Item::Literal(b'x'),
                Item::Literal(b'x'),
                Item::Literal(b'x'),
                Item::Backref { symbol: SYMBOL_DICT, address: 0, length: 8 },
                Item::Literal(b'y'),
                Item::Literal(b'y'),
                Item::Literal(b'y'),
                Item::Backref { symbol: SYMBOL_SHORT, address: 11, length: 8 },
            ]
        );
        assert_eq!(decompress(&out, &dict).unwrap(), input);
    }

    #[test]
    fn test_emitted_backrefs_respect_type_bounds() {
        let dict = b"a quick brown fox \xff\xfe\xfd jumped over";
        let input =
            b"a quick brown fox jumped, a quick brown fox jumped again, \xff and again".to_vec();
        for level in ALL_LEVELS {
            let mut c = Compressor::new(dict, level).unwrap();
            let out = c.compress(&input).unwrap();
            if out[1] == 0 {
                continue;
            }
            let aug = augment_dict(dict);
            let (short_type, long_type, dict_type) = init_backref_types(aug.len(), level);
            let mut position = 0usize;
            for item in walk_items(&out, dict) {
                match item {
                    Item::Literal(_) => position += 1,
                    Item::Backref { symbol, address, length } => {
                        let btype = match symbol {
                            SYMBOL_SHORT => short_type,
                            SYMBOL_LONG => long_type,
                            _ => dict_type,
                        };
                        assert!(length >= 1 && length <= btype.max_length);
                        if btype.dict_only {
                            assert!(address + length <= aug.len());
                        } else {
                            assert!(address >= 1 && address <= btype.max_address);
                            assert!(address <= position);
                        }
                        position += length;
                    }
                }
            }
            assert_eq!(position, input.len());
        }
    }

    #[test]
    fn test_roundtrip_all_levels() {
        let dict = b"common prefix material, repeated tokens: foo bar baz";
        let input = b"foo bar baz qux, foo bar baz qux, and some novel tail text \
                      with foo bar baz again and a trailing run aaaaaaaaaaaaaaaa"
            .to_vec();
        for level in ALL_LEVELS {
            let mut c = Compressor::new(dict, level).unwrap();
            let out = c.compress(&input).unwrap();
            assert_eq!(decompress(&out, dict).unwrap(), input, "level {:?}", level);
        }
    }

    #[test]
    fn test_run_compresses_via_overlapping_copy() {
        let input = vec![b'a'; 50];
        let mut c = Compressor::new(b"abc", Level::BestCompression).unwrap();
        let out = c.compress(&input).unwrap();
        assert!(out.len() < input.len());
        assert_eq!(
            walk_items(&out, b"abc"),
            vec![
                Item::Literal(b'a'),
                Item::Backref { symbol: SYMBOL_SHORT, address: 1, length: 49 },
            ]
        );
        assert_eq!(decompress(&out, b"abc").unwrap(), input);
    }

    #[test]
    fn test_hint_full_replay_is_identity() {
        let dict = b"shared dictionary content";
        let input = b"shared dictionary content, twice: shared dictionary content".to_vec();
        for level in ALL_LEVELS {
            let mut c = Compressor::new(dict, level).unwrap();
            let direct = c.compress(&input).unwrap();
            let hinted = c.compress_with_hint(&input, &direct).unwrap();
            assert_eq!(hinted, direct, "level {:?}", level);
        }
    }

    #[test]
    fn test_hint_replays_overlapping_copy() {
        // the short copy here reads a position that advances with the write
        // head (distance 1, length 49); replay must reconstruct the run the
        // same way
        let input = vec![b'a'; 50];
        let mut c = Compressor::new(b"abc", Level::BestCompression).unwrap();
        let direct = c.compress(&input).unwrap();
        let hinted = c.compress_with_hint(&input, &direct).unwrap();
        assert_eq!(hinted, direct);
        assert_eq!(decompress(&hinted, b"abc").unwrap(), input);
    }

    #[test]
    fn test_hint_of_prefix_extends_cleanly() {
        // a periodic prefix (compresses to one long overlapping copy) and a
        // tail that shares no match with it, so the hint boundary is also a
        // parse boundary and replay covers the whole prefix
        let prefix: Vec<u8> = b"abcdefgh".repeat(12);
        let tail: Vec<u8> = (0..200u32).map(|i| (i * 89 % 239) as u8).collect();
        let input = [prefix.clone(), tail].concat();

        let mut c = Compressor::new(b"", Level::BestCompression).unwrap();
        let hint = c.compress(&prefix).unwrap();
        let direct = c.compress(&input).unwrap();
        let hinted = c.compress_with_hint(&input, &hint).unwrap();
        assert_eq!(hinted, direct);
        assert_eq!(decompress(&hinted, b"").unwrap(), input);
    }

    #[test]
    fn test_mismatching_hint_is_abandoned() {
        let dict = b"zebra stripes";
        let input = b"zebra stripes on a zebra, zebra stripes everywhere".to_vec();
        let unrelated = b"completely different material without overlap".to_vec();

        let mut c = Compressor::new(dict, Level::BestCompression).unwrap();
        let bad_hint = c.compress(&unrelated).unwrap();
        let out = c.compress_with_hint(&input, &bad_hint).unwrap();
        assert_eq!(decompress(&out, dict).unwrap(), input);
    }

    #[test]
    fn test_hint_with_different_level_is_ignored() {
        let dict = b"level mismatch dictionary";
        let input = b"level mismatch dictionary and some more text, repeated text".to_vec();

        let mut other = Compressor::new(dict, Level::BestSnarkDecompression).unwrap();
        let foreign_hint = other.compress(&input).unwrap();

        let mut c = Compressor::new(dict, Level::BestCompression).unwrap();
        let direct = c.compress(&input).unwrap();
        let hinted = c.compress_with_hint(&input, &foreign_hint).unwrap();
        assert_eq!(hinted, direct);
    }

    #[test]
    fn test_fallback_when_incompressible() {
        // pseudo-random bytes, no escapes: nothing to match, and literals
        // alone never shrink the input
        let input: Vec<u8> = (0..128u32).map(|i| (i * 167 % 251) as u8).collect();
        let mut c = Compressor::new(b"", Level::BestCompression).unwrap();
        let out = c.compress(&input).unwrap();
        assert_eq!(out[..2], [VERSION, 0]);
        assert_eq!(out[2..], input);
        assert_eq!(decompress(&out, b"").unwrap(), input);
    }
}
