//! Reader wait windows.
//!
//! The reader answers POLL and AUTHENTICATE quickly but may take seconds for
//! key loading and block reads; replies can arrive split over several chunks,
//! which the trailing window absorbs.

use std::time::Duration;

/// Write completion timeout for regular commands
pub const WRITE_TIMEOUT_MS: u64 = 200;

/// Write completion timeout for the periodic POLL
pub const POLL_WRITE_TIMEOUT_MS: u64 = 100;

/// Initial response wait for POLL
pub const POLL_RESPONSE_TIMEOUT_MS: u64 = 500;

/// Initial response wait for AUTHENTICATE
pub const AUTHENTICATE_RESPONSE_TIMEOUT_MS: u64 = 500;

/// Initial response wait for LOAD KEY
pub const LOAD_KEY_RESPONSE_TIMEOUT_MS: u64 = 2000;

/// Initial response wait for READ BLOCK
pub const READ_BLOCK_RESPONSE_TIMEOUT_MS: u64 = 3000;

/// Trailing window used to collect the remaining chunks of a reply
pub const TRAILING_TIMEOUT_MS: u64 = 50;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
