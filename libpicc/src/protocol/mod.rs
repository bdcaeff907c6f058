// libpicc/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod responses;
pub mod tlv;

pub use checksum::lrc;
pub use commands::*;
pub use frame::Frame;
pub use responses::*;
pub use tlv::{Tag, Tlv};
