// libpicc/src/protocol/responses/mod.rs

pub mod block;
pub mod card;
pub mod device_error;

pub use block::parse_block_data;
pub use card::parse_card_info;
pub use device_error::parse_error_code;

use crate::constants::{ERROR_TEMPLATE, SUCCESS_TEMPLATE};
use crate::protocol::Frame;

/// Top-level reply template, selected by the first two DATA bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Template {
    /// FF 01
    Success,
    /// FF 03
    Error,
    /// anything else
    Malformed,
}

/// Classify a decoded frame by its template marker.
pub fn classify(frame: &Frame) -> Template {
    match frame.data().get(..2) {
        Some(marker) if marker == SUCCESS_TEMPLATE => Template::Success,
        Some(marker) if marker == ERROR_TEMPLATE => Template::Error,
        _ => Template::Malformed,
    }
}

/// DATA following the template marker (template length byte included).
/// Nested TLVs are located in this region with the loose tag scanner.
pub(crate) fn template_payload(frame: &Frame) -> &[u8] {
    frame.data().get(2..).unwrap_or(&[])
}
