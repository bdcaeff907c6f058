// libpicc/src/reader/config.rs

use std::time::Duration;

use crate::protocol::Command;
use crate::utils::{
    AUTHENTICATE_RESPONSE_TIMEOUT_MS, LOAD_KEY_RESPONSE_TIMEOUT_MS, POLL_RESPONSE_TIMEOUT_MS,
    POLL_WRITE_TIMEOUT_MS, READ_BLOCK_RESPONSE_TIMEOUT_MS, TRAILING_TIMEOUT_MS, WRITE_TIMEOUT_MS,
    ms,
};

/// Wait windows used by [`Reader`](crate::reader::Reader) round trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderConfig {
    /// Write completion timeout for READ BLOCK / LOAD KEY / AUTHENTICATE
    pub write_timeout: Duration,
    /// Write completion timeout for POLL
    pub poll_write_timeout: Duration,
    /// Initial reply wait for POLL
    pub poll_timeout: Duration,
    /// Initial reply wait for READ BLOCK
    pub read_block_timeout: Duration,
    /// Initial reply wait for LOAD KEY
    pub load_key_timeout: Duration,
    /// Initial reply wait for AUTHENTICATE
    pub authenticate_timeout: Duration,
    /// Trailing wait for further chunks of a reply
    pub trailing_timeout: Duration,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            write_timeout: ms(WRITE_TIMEOUT_MS),
            poll_write_timeout: ms(POLL_WRITE_TIMEOUT_MS),
            poll_timeout: ms(POLL_RESPONSE_TIMEOUT_MS),
            read_block_timeout: ms(READ_BLOCK_RESPONSE_TIMEOUT_MS),
            load_key_timeout: ms(LOAD_KEY_RESPONSE_TIMEOUT_MS),
            authenticate_timeout: ms(AUTHENTICATE_RESPONSE_TIMEOUT_MS),
            trailing_timeout: ms(TRAILING_TIMEOUT_MS),
        }
    }
}

impl ReaderConfig {
    pub fn write_timeout_for(&self, cmd: &Command) -> Duration {
        match cmd {
            Command::Poll => self.poll_write_timeout,
            _ => self.write_timeout,
        }
    }

    pub fn response_timeout_for(&self, cmd: &Command) -> Duration {
        match cmd {
            Command::Poll => self.poll_timeout,
            Command::ReadBlock { .. } => self.read_block_timeout,
            Command::LoadKey { .. } => self.load_key_timeout,
            Command::Authenticate { .. } => self.authenticate_timeout,
        }
    }
}
