// libpicc/src/auth/mod.rs

//! MIFARE Classic sector authentication: LOAD KEY followed by AUTHENTICATE.
//!
//! [`AuthSession`] is a pure state machine. It hands out the command to send
//! next and consumes raw replies; the caller (normally
//! [`Reader::authenticate`](crate::reader::Reader::authenticate)) owns the
//! transport. A session is created per attempt and never restarted.

use log::{trace, warn};
use thiserror::Error;

use crate::constants::{MAX_KEY_NUMBER, MAX_SECTOR};
use crate::protocol::{Command, Frame, Template, classify, parse_error_code};
use crate::types::{KeyType, MifareKey};
use crate::{DeviceError, FrameError, ResponseError, TransportError};

/// Why an attempt ended in [`AuthState::Failed`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("protocol error: {0}")]
    ProtocolError(#[from] FrameError),

    #[error("{0}")]
    DeviceError(#[from] DeviceError),

    #[error("error reply could not be parsed: {0}")]
    Response(#[from] ResponseError),

    #[error("unknown response template")]
    UnknownTemplate,

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Idle,
    LoadingKey,
    KeyLoaded,
    Authenticating,
    Authenticated,
    Failed(AuthFailure),
}

impl AuthState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Authenticated | Self::Failed(_))
    }
}

/// One authentication attempt.
#[derive(Debug, Clone)]
pub struct AuthSession {
    key_type: KeyType,
    key_number: u8,
    sector: u8,
    key: MifareKey,
    state: AuthState,
    outgoing: Option<Command>,
    history: Vec<AuthState>,
}

impl AuthSession {
    /// Begin an attempt. Parameters are validated before anything is queued:
    /// an out-of-range key number or sector fails the session immediately and
    /// no command is ever produced.
    pub fn start(key_type: KeyType, key_number: u8, sector: u8, key: MifareKey) -> Self {
        let mut session = Self {
            key_type,
            key_number,
            sector,
            key,
            state: AuthState::Idle,
            outgoing: None,
            history: vec![AuthState::Idle],
        };

        if key_number > MAX_KEY_NUMBER {
            session.fail(AuthFailure::InvalidParameter(format!(
                "key number {} out of range 0..={}",
                key_number, MAX_KEY_NUMBER
            )));
        } else if sector > MAX_SECTOR {
            session.fail(AuthFailure::InvalidParameter(format!(
                "sector {} out of range 0..={}",
                sector, MAX_SECTOR
            )));
        } else {
            session.transition(AuthState::LoadingKey);
            session.outgoing = Some(Command::LoadKey {
                key_type,
                key_number,
                key,
            });
        }

        session
    }

    /// Take the command that must be sent next, if any.
    pub fn take_outgoing(&mut self) -> Option<Command> {
        self.outgoing.take()
    }

    /// Peek at the command waiting to be sent.
    pub fn pending_command(&self) -> Option<&Command> {
        self.outgoing.as_ref()
    }

    /// Feed the raw reply to the command most recently taken.
    ///
    /// A successful LOAD KEY reply moves straight on to `Authenticating` and
    /// queues AUTHENTICATE. Replies arriving in any other state are ignored.
    pub fn handle_response(&mut self, raw: &[u8]) {
        let loading = match self.state {
            AuthState::LoadingKey => true,
            AuthState::Authenticating => false,
            _ => {
                warn!("ignoring reply in state {:?}", self.state);
                return;
            }
        };

        let frame = match Frame::decode(raw) {
            Ok(frame) => frame,
            Err(e) => return self.fail(e.into()),
        };

        match classify(&frame) {
            Template::Success if loading => {
                self.transition(AuthState::KeyLoaded);
                self.transition(AuthState::Authenticating);
                self.outgoing = Some(Command::Authenticate {
                    key_type: self.key_type,
                    key_number: self.key_number,
                    sector: self.sector,
                });
            }
            Template::Success => self.transition(AuthState::Authenticated),
            Template::Error => match parse_error_code(&frame) {
                Ok(device) => self.fail(device.into()),
                Err(e) => self.fail(e.into()),
            },
            Template::Malformed => self.fail(AuthFailure::UnknownTemplate),
        }
    }

    /// Abort the running round trip after a transport failure.
    pub fn abort(&mut self, err: TransportError) {
        if self.state.is_terminal() {
            return;
        }
        self.outgoing = None;
        self.fail(err.into());
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::Authenticated
    }

    pub fn failure(&self) -> Option<&AuthFailure> {
        match &self.state {
            AuthState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Every state visited so far, starting with `Idle`.
    pub fn history(&self) -> &[AuthState] {
        &self.history
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn key_number(&self) -> u8 {
        self.key_number
    }

    pub fn sector(&self) -> u8 {
        self.sector
    }

    pub fn key(&self) -> &MifareKey {
        &self.key
    }

    fn transition(&mut self, next: AuthState) {
        trace!("auth sector {}: {:?} -> {:?}", self.sector, self.state, next);
        self.state = next.clone();
        self.history.push(next);
    }

    fn fail(&mut self, reason: AuthFailure) {
        warn!("auth sector {} failed: {}", self.sector, reason);
        self.outgoing = None;
        self.transition(AuthState::Failed(reason));
    }
}
