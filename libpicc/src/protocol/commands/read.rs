// libpicc/src/protocol/commands/read.rs

use crate::constants::{INS_DATA_OBJECT, MIFARE_READ_BLOCK, PCB};
use crate::protocol::tlv::{self, Tag};
use crate::protocol::Frame;

/// DATA of MIFARE READ BLOCK: DF78 [A5, block]
pub fn read_block_data(block: u8) -> Vec<u8> {
    tlv::encode(Tag::MIFARE_COMMAND, &[MIFARE_READ_BLOCK, block])
}

/// Encode a MIFARE READ BLOCK frame
pub fn encode_read_block(block: u8) -> Vec<u8> {
    Frame::encode(PCB, INS_DATA_OBJECT, &read_block_data(block))
}
