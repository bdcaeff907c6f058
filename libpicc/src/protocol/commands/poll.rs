// libpicc/src/protocol/commands/poll.rs

use crate::constants::POLL_FRAME;

/// POLL frame (activate a PICC in the field).
///
/// The reader firmware is driven with this exact literal; its LEN/LRC bytes
/// are not what `Frame::encode` would produce, so it is never re-encoded.
pub fn encode_poll() -> Vec<u8> {
    POLL_FRAME.to_vec()
}

/// DATA field carried by the POLL literal (activation object DF7E).
pub fn poll_data() -> Vec<u8> {
    POLL_FRAME[4..POLL_FRAME.len() - 2].to_vec()
}
