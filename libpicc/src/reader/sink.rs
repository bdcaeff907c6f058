// libpicc/src/reader/sink.rs

use crate::auth::{AuthSession, AuthState};
use crate::card::CardInfo;
use crate::types::BlockData;
use crate::{Error, Result};

/// Observer for operation results. Presentation layers implement this to
/// render results; every method defaults to doing nothing.
pub trait ReportSink {
    /// A POLL round trip produced `card` from the validated reply `raw`.
    fn on_poll(&mut self, _card: &CardInfo, _raw: &[u8]) {}

    /// A POLL round trip failed before a reply could be interpreted.
    fn on_poll_error(&mut self, _error: &Error) {}

    /// A READ BLOCK round trip for `block` finished.
    fn on_block(&mut self, _block: u8, _result: &Result<BlockData>) {}

    /// The authentication state machine moved from `from` to `to`.
    fn on_auth_transition(&mut self, _from: &AuthState, _to: &AuthState) {}

    /// An authentication attempt reached its terminal state.
    fn on_auth(&mut self, _session: &AuthSession) {}
}
