// libpicc/src/lib.rs

//! libpicc
//!
//! Pure Rust protocol engine for contactless readers that speak the
//! STX/LEN/BODY/LRC/ETX framing with TLV-encoded data objects: card polling,
//! MIFARE Classic block reads and the LOAD KEY -> AUTHENTICATE sequence.
#![warn(missing_docs)]

pub mod auth;
pub mod card;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Errors and value types are used everywhere; keep them one path away.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
