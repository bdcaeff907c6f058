// libpicc/src/protocol/commands/mod.rs

pub mod key;
pub mod poll;
pub mod read;

pub use key::{authenticate_data, encode_authenticate, encode_load_key, load_key_data};
pub use poll::{encode_poll, poll_data};
pub use read::{encode_read_block, read_block_data};

use crate::constants::{INS_DATA_OBJECT, PCB};
use crate::protocol::Frame;
use crate::types::{KeyType, MifareKey};

/// High-level Command enum. Every command is a data-object command
/// (PCB 0x00, INS 0x3E); per-command DATA encoders live in
/// `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Poll,
    ReadBlock {
        block: u8,
    },
    LoadKey {
        key_type: KeyType,
        key_number: u8,
        key: MifareKey,
    },
    Authenticate {
        key_type: KeyType,
        key_number: u8,
        sector: u8,
    },
}

impl Command {
    /// MIFARE command echo byte carried in the DF78 wrapper, if any.
    pub fn mifare_code(&self) -> Option<u8> {
        match self {
            Self::Poll => None,
            Self::ReadBlock { .. } => Some(crate::constants::MIFARE_READ_BLOCK),
            Self::LoadKey { .. } => Some(crate::constants::MIFARE_LOAD_KEY),
            Self::Authenticate { .. } => Some(crate::constants::MIFARE_AUTHENTICATE),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Poll => "POLL",
            Self::ReadBlock { .. } => "READ BLOCK",
            Self::LoadKey { .. } => "LOAD KEY",
            Self::Authenticate { .. } => "AUTHENTICATE",
        }
    }

    /// Encode the DATA field of the command.
    pub fn data(&self) -> Vec<u8> {
        match self {
            Self::Poll => poll_data(),
            Self::ReadBlock { block } => read_block_data(*block),
            Self::LoadKey {
                key_type,
                key_number,
                key,
            } => load_key_data(*key_type, *key_number, key),
            Self::Authenticate {
                key_type,
                key_number,
                sector,
            } => authenticate_data(*key_type, *key_number, *sector),
        }
    }

    /// Encode the full wire frame. POLL is the reader's pre-built literal.
    pub fn frame(&self) -> Vec<u8> {
        match self {
            Self::Poll => encode_poll(),
            _ => Frame::encode(PCB, INS_DATA_OBJECT, &self.data()),
        }
    }
}
