// libpicc/src/error.rs

use thiserror::Error;

use crate::constants::{ERROR_CODE_AUTHENTICATION, ERROR_CODE_GENERAL};
use crate::protocol::Template;

/// フレーム検証エラー
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame too short: need at least {min} bytes, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("bad frame boundary: first={first:#04x}, last={last:#04x}")]
    BadBoundary { first: u8, last: u8 },

    #[error("lrc mismatch: expected {expected:#04x}, got {actual:#04x}")]
    LrcMismatch { expected: u8, actual: u8 },
}

/// Errors reported when reading a TLV element at a known offset.
///
/// The loose tag scanner never propagates these; a failed candidate simply
/// makes it move on to the next offset.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagError {
    #[error("no tlv header at offset {offset}")]
    NotFound { offset: usize },

    #[error("tlv at offset {offset} declares {length} value bytes, only {available} available")]
    LengthOverrun {
        offset: usize,
        length: usize,
        available: usize,
    },
}

/// Errors raised while interpreting a checksum-valid frame.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseError {
    #[error("unexpected response template: {0:?}")]
    UnexpectedTemplate(Template),

    #[error("mifare command tag (DF78) missing or truncated")]
    MissingTag,

    #[error("short block data: expected {expected} bytes, got {actual}")]
    ShortData { expected: usize, actual: usize },

    #[error("mifare command echo mismatch: expected {expected:#04x}, got {actual:#04x}")]
    CommandMismatch { expected: u8, actual: u8 },

    #[error("unexpected instruction code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedInstruction { expected: u8, actual: u8 },
}

/// Error reported by the reader itself inside an error template.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{message} (code {code:#04x})")]
pub struct DeviceError {
    pub code: u8,
    pub message: &'static str,
}

impl DeviceError {
    pub fn from_code(code: u8) -> Self {
        Self {
            code,
            message: device_error_message(code),
        }
    }
}

/// Human-readable text for a reader error code.
pub fn device_error_message(code: u8) -> &'static str {
    match code {
        ERROR_CODE_AUTHENTICATION => "authentication failed (wrong key/sector)",
        ERROR_CODE_GENERAL => "general operation error",
        _ => "unknown error code",
    }
}

/// Transport-level failures. Any of these aborts the running operation and
/// drops whatever partial bytes were read for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("write timed out")]
    WriteTimeout,

    #[error("read timed out")]
    ReadTimeout,

    #[error("i/o error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::TimedOut => TransportError::ReadTimeout,
            _ => TransportError::Io(err.to_string()),
        }
    }
}

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    #[error("tag error: {0}")]
    Tag(#[from] TagError),

    #[error("response error: {0}")]
    Response(#[from] ResponseError),

    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("no transport configured")]
    NoTransport,
}

pub type Result<T> = std::result::Result<T, Error>;
