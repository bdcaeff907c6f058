// libpicc/src/card/mod.rs

mod info;
pub use info::{ABSENT, CardInfo};

pub mod layout;
pub use layout::{first_block_of_sector, is_trailer_block, sector_of_block};
