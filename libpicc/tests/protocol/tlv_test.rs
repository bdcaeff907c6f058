use libpicc::protocol::tlv::{self, Tag};
use libpicc::TagError;

#[test]
fn finds_card_fields_in_any_order() {
    let mut buf = tlv::encode(Tag::ATQ, &[0x00, 0x44]);
    buf.extend(tlv::encode(Tag::PICC_UID, &[0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66]));
    buf.extend(tlv::encode(Tag::SAK, &[0x00]));

    assert_eq!(tlv::find(&buf, Tag::SAK), Some(&[0x00][..]));
    assert_eq!(tlv::find(&buf, Tag::ATQ), Some(&[0x00, 0x44][..]));
    assert_eq!(tlv::find(&buf, Tag::PICC_UID).map(<[u8]>::len), Some(7));
    assert_eq!(tlv::find(&buf, Tag::PICC_TYPE), None);
}

#[test]
fn tag_bytes_inside_a_value_still_match() {
    // The UID value happens to contain DF 6B 01 08; the scan is not aligned
    // to element boundaries, so that inner match wins over the real SAK.
    let mut buf = tlv::encode(Tag::PICC_UID, &[0xDF, 0x6B, 0x01, 0x08]);
    buf.extend(tlv::encode(Tag::SAK, &[0x20]));
    assert_eq!(tlv::find(&buf, Tag::SAK), Some(&[0x08][..]));
}

#[test]
fn overrunning_candidate_is_skipped() {
    // first DF0D claims 0x40 bytes, second is well formed
    let buf = hex::decode("df0d40df0d0204a1").unwrap();
    assert_eq!(tlv::find(&buf, Tag::PICC_UID), Some(&[0x04, 0xA1][..]));
    assert_eq!(
        tlv::parse_at(&buf, 0),
        Err(TagError::LengthOverrun {
            offset: 0,
            length: 0x40,
            available: 5
        })
    );
}

#[test]
fn tag_display_is_upper_hex() {
    assert_eq!(Tag::MIFARE_COMMAND.to_string(), "DF78");
    assert_eq!(Tag::PICC_UID.to_string(), "DF0D");
}
