// libpicc/src/protocol/responses/card.rs

use crate::card::CardInfo;
use crate::protocol::tlv::{self, Tag};
use crate::protocol::Frame;

use super::{Template, classify};

/// Extract PICC metadata from a POLL reply.
///
/// Each tag is looked up independently; a missing tag becomes `"-"`. A reply
/// that is not a success template yields `"-"` for every field.
pub fn parse_card_info(frame: &Frame) -> CardInfo {
    if classify(frame) != Template::Success {
        return CardInfo::absent();
    }

    let data = frame.data();
    CardInfo::from_values(
        tlv::find(data, Tag::PICC_TYPE),
        tlv::find(data, Tag::PICC_UID),
        tlv::find(data, Tag::SAK),
        tlv::find(data, Tag::ATQ),
    )
}
