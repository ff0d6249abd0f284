//! NES cartridge header support.
//!
//! - **header**: the 16-byte iNES header, its accessors and diagnostic report.
//! - **mapper**: static catalog of mapper numbers to board names.
//! - **error**: errors raised while reading a header.

pub mod error;
pub mod header;
pub mod mapper;
