//! Utilities for libpicc: small, reusable helpers used across the crate.
//!
//! Hex formatting is used for frame logging and card metadata; timeout
//! helpers hold the reader's documented wait windows.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
