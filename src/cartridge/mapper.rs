//! Mapper catalog: iNES mapper number to board/chip name.
//!
//! Pure metadata for [Mapper](https://www.nesdev.org/wiki/Mapper) identification. The table is
//! built once on first lookup and never written afterwards.

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    static ref MAPPER_NAMES: HashMap<u8, &'static str> = {
        let mut m = HashMap::new();
        m.insert(0, "NROM");
        m.insert(1, "SxROM, MMC1");
        m.insert(2, "UxROM");
        m.insert(3, "CNROM");
        m.insert(4, "TxROM, MMC3, MMC6");
        m.insert(5, "ExROM, MMC5 Contains expansion sound");
        m.insert(7, "AxROM");
        m.insert(9, "PxROM, MMC2");
        m.insert(10, "FxROM, MMC4");
        m.insert(11, "Color Dreams");
        m.insert(13, "CPROM");
        m.insert(15, "100-in-1 Contra Function 16 Multicart");
        m.insert(16, "Bandai EPROM (24C02)");
        m.insert(18, "Jaleco SS8806");
        m.insert(19, "Namco 163 Contains expansion sound");
        m.insert(21, "VRC4a, VRC4c");
        m.insert(22, "VRC2a");
        m.insert(23, "VRC2b, VRC4e");
        m.insert(24, "VRC6a Contains expansion sound");
        m.insert(25, "VRC4b, VRC4d");
        m.insert(26, "VRC6b Contains expansion sound");
        m.insert(34, "BNROM, NINA-001");
        m.insert(64, "RAMBO-1 MMC3 clone with extra features");
        m.insert(66, "GxROM, MxROM");
        m.insert(68, "After Burner ROM-based nametables");
        m.insert(69, "FME-7, Sunsoft 5B The 5B is the FME-7 with expansion sound");
        m.insert(71, "Camerica/Codemasters Similar to UNROM");
        m.insert(73, "VRC3");
        m.insert(74, "Pirate MMC3 derivative Has both CHR ROM and CHR RAM (2k)");
        m.insert(75, "VRC1");
        m.insert(76, "Namco 109 variant");
        m.insert(79, "NINA-03/NINA-06 It's either 003 or 006, we don't know right now");
        m.insert(85, "VRC7 Contains expansion sound");
        m.insert(86, "JALECO-JF-13");
        m.insert(94, "Senjou no Ookami");
        m.insert(105, "NES-EVENT Similar to MMC1");
        m.insert(113, "NINA-03/NINA-06?? For multicarts including mapper 79 games.");
        m.insert(118, "TxSROM, MMC3 MMC3 with independent mirroring control");
        m.insert(119, "TQROM, MMC3 Has both CHR ROM and CHR RAM");
        m.insert(159, "Bandai EPROM (24C01)");
        m.insert(166, "SUBOR");
        m.insert(167, "SUBOR");
        m.insert(180, "Crazy Climber Variation of UNROM, fixed first bank at $8000");
        m.insert(185, "CNROM with protection diodes");
        m.insert(192, "Pirate MMC3 derivative Has both CHR ROM and CHR RAM (4k)");
        m.insert(206, "DxROM, Namco 118 / MIMIC-1 Simplified MMC3 predecessor lacking some features");
        m.insert(210, "Namco 175 and 340 Namco 163 with different mirroring");
        m.insert(228, "Action 52");
        m.insert(232, "Camerica/Codemasters Quattro Multicarts");
        m
    };
}

/// Board name for an iNES mapper number, or `None` if the number is not catalogued.
pub fn name(id: u8) -> Option<&'static str> {
    MAPPER_NAMES.get(&id).copied()
}

/// Whole catalog, for listing.
pub fn catalog() -> &'static HashMap<u8, &'static str> {
    &MAPPER_NAMES
}
