//! Fixed-size header prefixing every compressed output

use crate::compression::lzss::{Level, VERSION};
use crate::error::Result;
use crate::io::bits::{BitReader, BitWriter};

/// The two-byte version/level prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Format version
    pub version: u8,
    /// Compression level the payload was produced at
    pub level: Level,
}

impl Header {
    /// Encoded size in bytes
    pub const BYTE_SIZE: usize = 2;

    /// Create a current-version header for `level`
    pub fn new(level: Level) -> Self {
        Self { version: VERSION, level }
    }

    /// Write the header; the stream must be byte-aligned
    pub fn write_to(&self, w: &mut BitWriter) {
        w.write_byte(self.version);
        w.write_byte(self.level as u8);
    }

    /// Read and validate a header
    pub fn read_from(r: &mut BitReader) -> Result<Self> {
        let version = r.try_read_byte();
        let level = r.try_read_byte();
        r.error()?;
        Ok(Self { version, level: Level::from_u8(level)? })
    }
}
