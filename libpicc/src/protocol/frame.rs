// libpicc/src/protocol/frame.rs

use crate::constants::{ETX, MAX_DATA_LEN, MIN_FRAME_LEN, STX};
use crate::protocol::checksum::lrc;
use crate::FrameError;

/// Reader wire frame.
///
/// Format: [STX(1)] [LEN(1)] [PCB(1)] [INS(1)] [DATA(LEN-2)] [LRC(1)] [ETX(1)]
/// STX: 0x02, ETX: 0x03
/// LEN counts PCB + INS + DATA; LRC is the XOR of LEN through the last DATA byte.
///
/// A `Frame` value only exists for buffers that passed boundary and LRC
/// validation in [`Frame::decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pcb: u8,
    ins: u8,
    data: Vec<u8>,
    raw: Vec<u8>,
}

impl Frame {
    /// Build a complete wire frame from PCB, INS and the DATA field.
    ///
    /// `data` must not exceed 253 bytes so that LEN fits in one byte.
    pub fn encode(pcb: u8, ins: u8, data: &[u8]) -> Vec<u8> {
        debug_assert!(
            data.len() <= MAX_DATA_LEN,
            "frame data too long: {} bytes",
            data.len()
        );

        let len = (data.len() + 2) as u8;
        let mut out = Vec::with_capacity(data.len() + 6);
        out.push(STX);
        out.push(len);
        out.push(pcb);
        out.push(ins);
        out.extend_from_slice(data);
        let checksum = lrc(&out[1..]);
        out.push(checksum);
        out.push(ETX);
        out
    }

    /// Validate a received buffer and split it into PCB, INS and DATA.
    ///
    /// LEN is not cross-checked against the buffer length: DATA is everything
    /// between INS and the LRC byte.
    pub fn decode(buffer: &[u8]) -> Result<Self, FrameError> {
        if buffer.len() < MIN_FRAME_LEN {
            return Err(FrameError::TooShort {
                min: MIN_FRAME_LEN,
                actual: buffer.len(),
            });
        }

        let first = buffer[0];
        let last = buffer[buffer.len() - 1];
        if first != STX || last != ETX {
            return Err(FrameError::BadBoundary { first, last });
        }

        let lrc_idx = buffer.len() - 2;
        let expected = lrc(&buffer[1..lrc_idx]);
        let actual = buffer[lrc_idx];
        if expected != actual {
            return Err(FrameError::LrcMismatch { expected, actual });
        }

        Ok(Self {
            pcb: buffer[2],
            ins: buffer[3],
            data: buffer[4..lrc_idx].to_vec(),
            raw: buffer.to_vec(),
        })
    }

    pub fn pcb(&self) -> u8 {
        self.pcb
    }

    pub fn ins(&self) -> u8 {
        self.ins
    }

    /// DATA field (everything after INS, before LRC)
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The validated buffer exactly as received
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// LEN byte as transmitted
    pub fn len_field(&self) -> u8 {
        self.raw[1]
    }
}
