// fixtures.rs: commonly used reader replies and card values

use libpicc::protocol::tlv::{self, Tag};
use libpicc::test_support;
use libpicc::types::{BlockData, MifareKey};

pub fn sample_uid() -> [u8; 4] {
    [0x04, 0xA1, 0xB2, 0xC3]
}

pub fn sample_key() -> MifareKey {
    MifareKey::from_bytes([0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5])
}

pub fn sample_blockdata(fill: u8) -> BlockData {
    BlockData::from_bytes([fill; 16])
}

/// POLL reply for a MIFARE Classic 1K: type 02, SAK 08, ATQ 00 04.
pub fn card_present_frame() -> Vec<u8> {
    test_support::card_reply_frame(&[0x02], &sample_uid(), &[0x08], &[0x00, 0x04])
}

/// POLL reply with only the UID reported.
pub fn uid_only_frame() -> Vec<u8> {
    test_support::success_frame(&tlv::encode(Tag::PICC_UID, &sample_uid()))
}

/// POLL reply when the field is empty.
pub fn no_card_frame() -> Vec<u8> {
    test_support::error_frame(0x00, 0x05)
}

pub fn read_frame_with_block(block: &BlockData) -> Vec<u8> {
    test_support::block_reply_frame(*block.as_bytes())
}

pub fn load_key_ok_frame() -> Vec<u8> {
    test_support::mifare_ok_frame(0xA9, &[])
}

pub fn authenticate_ok_frame() -> Vec<u8> {
    test_support::mifare_ok_frame(0xB0, &[])
}

pub fn authenticate_denied_frame() -> Vec<u8> {
    test_support::error_frame(0xB0, 0x08)
}
