// libpicc/src/protocol/responses/block.rs

use crate::constants::{BLOCK_LEN, MIFARE_READ_BLOCK};
use crate::protocol::tlv::{self, Tag};
use crate::protocol::Frame;
use crate::types::BlockData;
use crate::ResponseError;

use super::{Template, classify, template_payload};

/// Decode a MIFARE READ BLOCK reply.
/// Layout: FF 01 LEN DF78 LEN [A5, block(16)]
pub fn parse_block_data(frame: &Frame) -> Result<BlockData, ResponseError> {
    let template = classify(frame);
    if template != Template::Success {
        return Err(ResponseError::UnexpectedTemplate(template));
    }

    let value = tlv::find(template_payload(frame), Tag::MIFARE_COMMAND)
        .ok_or(ResponseError::MissingTag)?;

    let (&echo, rest) = value.split_first().ok_or(ResponseError::MissingTag)?;
    if echo != MIFARE_READ_BLOCK {
        return Err(ResponseError::CommandMismatch {
            expected: MIFARE_READ_BLOCK,
            actual: echo,
        });
    }

    let block = rest.get(..BLOCK_LEN).ok_or(ResponseError::ShortData {
        expected: BLOCK_LEN,
        actual: rest.len(),
    })?;

    let mut out = [0u8; BLOCK_LEN];
    out.copy_from_slice(block);
    Ok(BlockData::from_bytes(out))
}
