// libpicc/src/constants.rs
//! Wire-level constants shared by the codec, the command builders and the
//! response interpreter.

/// Start-of-frame marker
pub const STX: u8 = 0x02;

/// End-of-frame marker
pub const ETX: u8 = 0x03;

/// Minimal frame length accepted by the decoder:
/// STX + LEN + PCB + INS + 2 data bytes + LRC + ETX
pub const MIN_FRAME_LEN: usize = 8;

/// Maximum DATA length so that LEN (PCB + INS + DATA) fits in one byte
pub const MAX_DATA_LEN: usize = 253;

/// Protocol control byte. Always zero for this reader family.
pub const PCB: u8 = 0x00;

/// Instruction code of a data-object (DO) command
pub const INS_DATA_OBJECT: u8 = 0x3E;

/// Response template markers (first two DATA bytes of a reply)
pub const SUCCESS_TEMPLATE: [u8; 2] = [0xFF, 0x01];
pub const ERROR_TEMPLATE: [u8; 2] = [0xFF, 0x03];

/// MIFARE command echo bytes carried inside the DF78 wrapper
pub const MIFARE_READ_BLOCK: u8 = 0xA5;
pub const MIFARE_LOAD_KEY: u8 = 0xA9;
pub const MIFARE_AUTHENTICATE: u8 = 0xB0;

/// Reserved bytes sent between the key slot and the key in LOAD KEY
pub const LOAD_KEY_RFU: [u8; 6] = [0xFF; 6];

/// Reader key slots are 0 and 1
pub const MAX_KEY_NUMBER: u8 = 1;

/// MIFARE Classic 4K has sectors 0..=39
pub const MAX_SECTOR: u8 = 39;

/// Size of one MIFARE Classic block
pub const BLOCK_LEN: usize = 16;

/// Size of a MIFARE Classic key
pub const KEY_LEN: usize = 6;

/// Pre-built "poll a PICC" activation frame. The reader expects these exact
/// bytes (LEN and LRC included); it is sent as-is and never re-encoded.
pub const POLL_FRAME: [u8; 10] = [0x02, 0x0A, 0x00, 0x3E, 0xDF, 0x7E, 0x01, 0x00, 0x96, 0x03];

/// Reader error codes reported inside an error template
pub const ERROR_CODE_AUTHENTICATION: u8 = 0x08;
pub const ERROR_CODE_GENERAL: u8 = 0x05;
// libpicc/src/constants.rs
