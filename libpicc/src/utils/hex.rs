//! Hexadecimal helpers for logging frames and rendering card metadata.

use std::fmt::Write;

use crate::{Error, Result};

/// Convert a byte slice to upper-case hex with a single space between bytes.
/// This is the format the reader's documentation (and `CardInfo`) uses.
///
/// Example: `&[0xde, 0xad]` -> `"DE AD"`
pub fn to_hex_upper_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Parse a hex string such as `"FF FF FF FF FF FF"` into bytes.
///
/// ASCII whitespace is ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = s.bytes().filter(|c| !c.is_ascii_whitespace()).collect();

    if digits.len() % 2 != 0 {
        return Err(Error::InvalidParameter("hex string has odd length".into()));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair)
                .map_err(|_| Error::InvalidParameter("hex string is not ascii".into()))?;
            u8::from_str_radix(text, 16)
                .map_err(|e| Error::InvalidParameter(format!("invalid hex pair '{}': {}", text, e)))
        })
        .collect()
}
