// libpicc/src/protocol/commands/key.rs

use crate::constants::{
    INS_DATA_OBJECT, LOAD_KEY_RFU, MIFARE_AUTHENTICATE, MIFARE_LOAD_KEY, PCB,
};
use crate::protocol::tlv::{self, Tag};
use crate::protocol::Frame;
use crate::types::{KeyType, MifareKey};

/// DATA of MIFARE STD LOAD NEW KEY:
/// DF78 [A9, key_type, key_number, RFU(6), key(6)]
pub fn load_key_data(key_type: KeyType, key_number: u8, key: &MifareKey) -> Vec<u8> {
    let mut value = Vec::with_capacity(15);
    value.push(MIFARE_LOAD_KEY);
    value.push(key_type.as_byte());
    value.push(key_number);
    value.extend_from_slice(&LOAD_KEY_RFU);
    value.extend_from_slice(key.as_bytes());
    tlv::encode(Tag::MIFARE_COMMAND, &value)
}

/// Encode a LOAD KEY frame. `key_number` is not range-checked here; the
/// authentication workflow validates it before anything is sent.
pub fn encode_load_key(key_type: KeyType, key_number: u8, key: &MifareKey) -> Vec<u8> {
    Frame::encode(PCB, INS_DATA_OBJECT, &load_key_data(key_type, key_number, key))
}

/// DATA of MIFARE STD AUTHENTICATE SECTOR:
/// DF78 [B0, key_type, key_number, sector]
pub fn authenticate_data(key_type: KeyType, key_number: u8, sector: u8) -> Vec<u8> {
    tlv::encode(
        Tag::MIFARE_COMMAND,
        &[MIFARE_AUTHENTICATE, key_type.as_byte(), key_number, sector],
    )
}

/// Encode an AUTHENTICATE frame
pub fn encode_authenticate(key_type: KeyType, key_number: u8, sector: u8) -> Vec<u8> {
    Frame::encode(
        PCB,
        INS_DATA_OBJECT,
        &authenticate_data(key_type, key_number, sector),
    )
}
