//! iNES cartridge header (.nes files).
//!
//! Implements the first 16 bytes of the [iNES](https://www.nesdev.org/wiki/INES) format: magic
//! "NES\x1A", PRG size in 16 KiB units, CHR size, flags 6–7 carrying the mapper number, then
//! padding. Everything after the header (trainer, PRG ROM, CHR ROM) is ignored.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, error};

use crate::cartridge::error::{Error, Result};
use crate::cartridge::mapper;

/// Size of the iNES header in bytes.
pub const HEADER_SIZE: usize = 16;
/// PRG ROM bank unit (16 KiB).
pub const PRG_BANK_SIZE: usize = 0x4000;
/// CHR ROM bank unit (8 KiB).
pub const CHR_BANK_SIZE: usize = 0x2000;
/// Signature at offset 0 of every iNES file.
pub const INES_MAGIC: MagicNumber = MagicNumber(*b"NES\x1A");

/// The four identifying bytes at the start of a ROM image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MagicNumber(pub [u8; 4]);

impl fmt::Display for MagicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.escape_ascii())
    }
}

/// Parsed iNES header. Fields keep their on-disk order and are never modified after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    magic: MagicNumber,
    prg_bank_count: u8,
    chr_bank_count: u8,
    flags6: u8, // mapper low nibble (bits 4–7) + mirroring/battery/trainer flags
    flags7: u8, // mapper high nibble (bits 4–7) + console type/format flags
    reserved: [u8; 8],
}

impl Header {
    /// Parse the header from the start of a ROM image. Bytes past offset 16 are ignored.
    ///
    /// The magic number is not checked here; use [`Header::is_valid`] or [`Header::is_ines`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            error!("iNES header truncated: {} of {} bytes", bytes.len(), HEADER_SIZE);
            return Err(Error::TooShort { len: bytes.len() });
        }

        let mut magic = [0; 4];
        magic.copy_from_slice(&bytes[0..4]);
        let mut reserved = [0; 8];
        reserved.copy_from_slice(&bytes[8..16]);

        let header = Self {
            magic: MagicNumber(magic),
            prg_bank_count: bytes[4],
            chr_bank_count: bytes[5],
            flags6: bytes[6],
            flags7: bytes[7],
            reserved,
        };
        debug!(
            "parsed header: mapper {}, {} PRG bank(s), {} CHR bank(s)",
            header.mapper_id(),
            header.prg_bank_count,
            header.chr_bank_count
        );
        Ok(header)
    }

    /// Read the header of the iNES file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let io_err = |source: std::io::Error| {
            error!("failed to read {}: {}", path.display(), source);
            Error::Io {
                path: path.to_path_buf(),
                source,
            }
        };

        let file = File::open(path).map_err(io_err)?;
        let mut data = Vec::with_capacity(HEADER_SIZE);
        file.take(HEADER_SIZE as u64)
            .read_to_end(&mut data)
            .map_err(io_err)?;

        Self::from_bytes(&data)
    }

    /// True iff the stored magic number equals `expected` byte for byte.
    pub fn is_valid(&self, expected: MagicNumber) -> bool {
        self.magic == expected
    }

    /// Shorthand for `is_valid(INES_MAGIC)`.
    pub fn is_ines(&self) -> bool {
        self.is_valid(INES_MAGIC)
    }

    /// Mapper number: low nibble from flags 6 bits 4–7, high nibble from flags 7 bits 4–7.
    pub fn mapper_id(&self) -> u8 {
        (self.flags6 >> 4) | (self.flags7 & 0xF0)
    }

    /// PRG ROM size in bytes.
    pub fn prg_size(&self) -> usize {
        self.prg_bank_count as usize * PRG_BANK_SIZE
    }

    /// CHR ROM size in bytes.
    ///
    /// Counts CHR banks in [`PRG_BANK_SIZE`] units, not [`CHR_BANK_SIZE`], so reports stay
    /// comparable with earlier dumps. Actual CHR ROM is half this size.
    pub fn chr_size(&self) -> usize {
        self.chr_bank_count as usize * PRG_BANK_SIZE
    }

    /// Board name for [`Header::mapper_id`], `None` if the mapper is not catalogued.
    pub fn mapper_name(&self) -> Option<&'static str> {
        mapper::name(self.mapper_id())
    }

    /// Print the diagnostic report to stdout.
    pub fn describe(&self) {
        print!("{}", self);
    }

    pub fn magic(&self) -> MagicNumber {
        self.magic
    }

    pub fn prg_bank_count(&self) -> u8 {
        self.prg_bank_count
    }

    pub fn chr_bank_count(&self) -> u8 {
        self.chr_bank_count
    }

    pub fn flags6(&self) -> u8 {
        self.flags6
    }

    pub fn flags7(&self) -> u8 {
        self.flags7
    }

    pub fn reserved(&self) -> [u8; 8] {
        self.reserved
    }
}

impl TryFrom<&[u8]> for Header {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- ROM header")?;
        writeln!(f, "\t- magic number: {}", self.magic)?;
        writeln!(
            f,
            "\t- program bank count: {} ({} bytes)",
            self.prg_bank_count,
            self.prg_size()
        )?;
        writeln!(
            f,
            "\t- character bank count: {} ({} bytes)",
            self.chr_bank_count,
            self.chr_size()
        )?;
        writeln!(
            f,
            "\t- mapper type: {} ({})",
            self.mapper_id(),
            self.mapper_name().unwrap_or_default()
        )
    }
}
