// libpicc/src/protocol/codec.rs

use log::{debug, warn};

use crate::utils::to_hex_upper_spaced;
use crate::Result;

use super::commands::Command;
use super::frame::Frame;

/// Encode a Command into the exact bytes written to the reader.
pub fn encode_command_frame(cmd: &Command) -> Vec<u8> {
    let frame = cmd.frame();
    debug!("{} -> {}", cmd.name(), to_hex_upper_spaced(&frame));
    frame
}

/// Validate a raw reply buffer for `cmd` and return the decoded frame.
pub fn decode_response_frame(cmd: &Command, raw: &[u8]) -> Result<Frame> {
    debug!("{} <- {}", cmd.name(), to_hex_upper_spaced(raw));
    Frame::decode(raw).map_err(|e| {
        warn!("{} reply rejected: {}", cmd.name(), e);
        e.into()
    })
}
