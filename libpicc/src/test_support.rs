//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers build well-formed reader replies and MockTransport-backed
//! readers so tests across the crate and tests/ directory share one notion
//! of what the reader sends back.
#![allow(dead_code)]

use crate::constants::{ERROR_TEMPLATE, INS_DATA_OBJECT, MIFARE_READ_BLOCK, PCB, SUCCESS_TEMPLATE};
use crate::protocol::tlv::{self, Tag};
use crate::protocol::Frame;
use crate::reader::Reader;
use crate::transport::mock::MockTransport;

fn template_frame(template: [u8; 2], payload: &[u8]) -> Vec<u8> {
    let mut data = template.to_vec();
    data.push(payload.len() as u8);
    data.extend_from_slice(payload);
    Frame::encode(PCB, INS_DATA_OBJECT, &data)
}

/// Success template wrapping the given (already TLV-encoded) payload.
#[doc(hidden)]
pub fn success_frame(payload: &[u8]) -> Vec<u8> {
    template_frame(SUCCESS_TEMPLATE, payload)
}

/// Success reply to a MIFARE command: `FF 01 LEN DF78 LEN [echo, extra..]`.
#[doc(hidden)]
pub fn mifare_ok_frame(echo: u8, extra: &[u8]) -> Vec<u8> {
    let mut value = vec![echo];
    value.extend_from_slice(extra);
    success_frame(&tlv::encode(Tag::MIFARE_COMMAND, &value))
}

/// Error reply carrying `code` at the device error offset.
#[doc(hidden)]
pub fn error_frame(echo: u8, code: u8) -> Vec<u8> {
    let nested = tlv::encode(Tag::MIFARE_COMMAND, &[echo, 0x00, 0x00, code]);
    template_frame(ERROR_TEMPLATE, &nested)
}

/// Successful READ BLOCK reply.
#[doc(hidden)]
pub fn block_reply_frame(block: [u8; 16]) -> Vec<u8> {
    mifare_ok_frame(MIFARE_READ_BLOCK, &block)
}

/// Successful POLL reply reporting the given card fields.
#[doc(hidden)]
pub fn card_reply_frame(card_type: &[u8], uid: &[u8], sak: &[u8], atq: &[u8]) -> Vec<u8> {
    let mut payload = tlv::encode(Tag::PICC_TYPE, card_type);
    payload.extend(tlv::encode(Tag::PICC_UID, uid));
    payload.extend(tlv::encode(Tag::SAK, sak));
    payload.extend(tlv::encode(Tag::ATQ, atq));
    success_frame(&payload)
}

/// MockTransport pre-seeded with `responses`, one per expected write.
#[doc(hidden)]
pub fn mock_with_responses(responses: Vec<Vec<u8>>) -> MockTransport {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    mock
}

/// Reader backed by a MockTransport pre-seeded with `responses`.
#[doc(hidden)]
pub fn mock_reader(responses: Vec<Vec<u8>>) -> Reader {
    Reader::new(Box::new(mock_with_responses(responses)))
}
