// libpicc/src/prelude.rs

pub use crate::auth::{AuthFailure, AuthSession, AuthState};
pub use crate::card::CardInfo;
pub use crate::protocol::{Command, Frame, Tag, Template};
pub use crate::reader::{PollResult, Reader, ReaderBuilder, ReaderConfig, ReportSink, SharedReader};
pub use crate::transport::Transport;
pub use crate::{
    BlockData, DeviceError, Error, FrameError, KeyType, MifareKey, ResponseError, Result,
    TagError, TransportError,
};

// Re-export small utilities for convenience
pub use crate::utils::{ms, parse_hex, to_hex_upper_spaced};
