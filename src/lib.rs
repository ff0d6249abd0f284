//! Cartinfo: reads the 16-byte header of iNES (.nes) cartridge images.
//!
//! Implements the header part of the [iNES](https://www.nesdev.org/wiki/INES) format as
//! documented on the NESdev Wiki. Nothing here emulates hardware; the mapper table only names
//! the board.
//!
//! ## Modules (NESdev references)
//!
//! - **cartridge** – [iNES](https://www.nesdev.org/wiki/INES) header fields, bank sizes and the
//!   [Mapper](https://www.nesdev.org/wiki/Mapper) name catalog

pub mod cartridge;

pub use cartridge::error::{Error, Result};
pub use cartridge::header::{Header, MagicNumber};
