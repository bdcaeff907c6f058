// libpicc/src/protocol/responses/device_error.rs

use crate::protocol::tlv::{self, Tag};
use crate::protocol::Frame;
use crate::{DeviceError, ResponseError};

use super::{Template, classify, template_payload};

/// Offset of the error code inside the DF78 value of an error template
const ERROR_CODE_OFFSET: usize = 3;

/// Decode the reader error carried by an error template.
/// Layout: FF 03 LEN DF78 LEN [echo, .., .., code, ..]
///
/// The code is byte 3 of the DF78 *value*, not byte 3 of the whole element
/// (`DF 78 LEN CODE`). Readers that answer with a one-byte value such as
/// `FF 03 04 DF 78 01 08` therefore yield `MissingTag` here; this offset is
/// intentional and must not be moved to the element-relative position.
pub fn parse_error_code(frame: &Frame) -> Result<DeviceError, ResponseError> {
    let template = classify(frame);
    if template != Template::Error {
        return Err(ResponseError::UnexpectedTemplate(template));
    }

    let code = tlv::find(template_payload(frame), Tag::MIFARE_COMMAND)
        .and_then(|value| value.get(ERROR_CODE_OFFSET).copied())
        .ok_or(ResponseError::MissingTag)?;

    Ok(DeviceError::from_code(code))
}
