// libpicc/src/protocol/tlv.rs

use derive_more::Display;

use crate::TagError;

/// Two-byte TLV tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:02X}{:02X}", _0, _1)]
pub struct Tag(pub u8, pub u8);

impl Tag {
    /// PICC type
    pub const PICC_TYPE: Self = Self(0xDF, 0x16);
    /// PICC UID
    pub const PICC_UID: Self = Self(0xDF, 0x0D);
    /// Select acknowledge
    pub const SAK: Self = Self(0xDF, 0x6B);
    /// Answer to request
    pub const ATQ: Self = Self(0xDF, 0x15);
    /// MIFARE command wrapper; the value starts with the command echo byte
    pub const MIFARE_COMMAND: Self = Self(0xDF, 0x78);
    /// Activation object carried by the POLL frame
    pub const ACTIVATION: Self = Self(0xDF, 0x7E);

    pub fn bytes(self) -> [u8; 2] {
        [self.0, self.1]
    }
}

/// A TLV element borrowed from a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tlv<'a> {
    pub tag: Tag,
    pub value: &'a [u8],
}

/// Read the TLV element starting exactly at `offset`.
pub fn parse_at(buffer: &[u8], offset: usize) -> Result<Tlv<'_>, TagError> {
    let start = offset + 3;
    if start > buffer.len() {
        return Err(TagError::NotFound { offset });
    }

    let length = buffer[offset + 2] as usize;
    let available = buffer.len() - start;
    if length > available {
        return Err(TagError::LengthOverrun {
            offset,
            length,
            available,
        });
    }

    Ok(Tlv {
        tag: Tag(buffer[offset], buffer[offset + 1]),
        value: &buffer[start..start + length],
    })
}

/// Scan `buffer` for `tag` and return the value of the leftmost well-formed
/// match.
///
/// Matching is deliberately loose: the tag bytes may sit at any offset, not
/// only at TLV boundaries. A candidate whose length overruns the buffer is
/// skipped and scanning continues at the next offset.
pub fn find(buffer: &[u8], tag: Tag) -> Option<&[u8]> {
    (0..buffer.len().saturating_sub(1))
        .filter(|&i| buffer[i] == tag.0 && buffer[i + 1] == tag.1)
        .find_map(|i| parse_at(buffer, i).ok())
        .map(|tlv| tlv.value)
}

/// Encode a single TLV element. `value` must fit a one-byte length.
pub fn encode(tag: Tag, value: &[u8]) -> Vec<u8> {
    debug_assert!(value.len() <= u8::MAX as usize);

    let mut out = Vec::with_capacity(3 + value.len());
    out.push(tag.0);
    out.push(tag.1);
    out.push(value.len() as u8);
    out.extend_from_slice(value);
    out
}
