// libpicc/src/card/layout.rs

//! MIFARE Classic memory layout (1K/4K).
//!
//! Sectors 0..=31 hold 4 blocks each, sectors 32..=39 (4K only) hold 16.
//! The last block of every sector is the sector trailer (keys + access bits).

/// Sector that guards `block`. Authenticate this sector before READ BLOCK.
pub fn sector_of_block(block: u8) -> u8 {
    if block < 128 {
        block / 4
    } else {
        32 + (block - 128) / 16
    }
}

/// First block number of `sector`, or `None` when the sector does not exist.
pub fn first_block_of_sector(sector: u8) -> Option<u8> {
    match sector {
        0..=31 => Some(sector * 4),
        32..=39 => Some(128 + (sector - 32) * 16),
        _ => None,
    }
}

/// True for sector trailer blocks.
pub fn is_trailer_block(block: u8) -> bool {
    if block < 128 {
        block % 4 == 3
    } else {
        block % 16 == 15
    }
}
