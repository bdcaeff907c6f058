// libpicc/src/reader/handle.rs

use log::{debug, info};

use crate::auth::AuthSession;
use crate::card::CardInfo;
use crate::constants::INS_DATA_OBJECT;
use crate::protocol::{
    Command, Frame, Template, classify, codec, parse_block_data, parse_card_info,
    parse_error_code,
};
use crate::reader::config::ReaderConfig;
use crate::reader::sink::ReportSink;
use crate::transport::{self, Transport};
use crate::types::{BlockData, KeyType, MifareKey};
use crate::{Error, ResponseError, Result, TransportError};

/// Outcome of a POLL round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollResult {
    pub card: CardInfo,
    /// Reply bytes exactly as received
    pub raw: Vec<u8>,
}

/// Reader handle. Owns the transport exclusively: every operation takes
/// `&mut self`, so exactly one request is in flight at a time and a reply is
/// always fully consumed before the next command is written.
pub struct Reader {
    transport: Box<dyn Transport + Send>,
    config: ReaderConfig,
    sink: Option<Box<dyn ReportSink + Send>>,
}

impl Reader {
    /// Create a Reader with default timeouts and no sink.
    pub fn new(transport: Box<dyn Transport + Send>) -> Self {
        Self::with_parts(transport, ReaderConfig::default(), None)
    }

    pub(crate) fn with_parts(
        transport: Box<dyn Transport + Send>,
        config: ReaderConfig,
        sink: Option<Box<dyn ReportSink + Send>>,
    ) -> Self {
        Self {
            transport,
            config,
            sink,
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ReaderConfig) {
        self.config = config;
    }

    /// Attach (or replace) the sink that receives operation results.
    pub fn set_sink(&mut self, sink: Box<dyn ReportSink + Send>) {
        self.sink = Some(sink);
    }

    /// Detach the sink, returning it.
    pub fn take_sink(&mut self) -> Option<Box<dyn ReportSink + Send>> {
        self.sink.take()
    }

    /// Write one command and collect its raw reply.
    pub fn transact(&mut self, cmd: &Command) -> std::result::Result<Vec<u8>, TransportError> {
        let frame = codec::encode_command_frame(cmd);
        transport::send_frame(
            &mut *self.transport,
            &frame,
            self.config.write_timeout_for(cmd),
        )?;
        transport::receive_response(
            &mut *self.transport,
            self.config.response_timeout_for(cmd),
            self.config.trailing_timeout,
        )
    }

    /// Write one command and decode its reply into a checksum-valid frame.
    pub fn execute(&mut self, cmd: &Command) -> Result<Frame> {
        let raw = self.transact(cmd)?;
        codec::decode_response_frame(cmd, &raw)
    }

    /// Poll for a PICC in the field.
    ///
    /// A reply that is valid but not a success template (no card) yields a
    /// `CardInfo` with every field absent.
    pub fn poll(&mut self) -> Result<PollResult> {
        match self.execute(&Command::Poll) {
            Ok(frame) => {
                let card = parse_card_info(&frame);
                if card.is_present() {
                    info!("card detected: uid {}", card.uid);
                }
                if let Some(sink) = self.sink.as_mut() {
                    sink.on_poll(&card, frame.raw());
                }
                Ok(PollResult {
                    card,
                    raw: frame.raw().to_vec(),
                })
            }
            Err(e) => {
                debug!("poll failed: {}", e);
                if let Some(sink) = self.sink.as_mut() {
                    sink.on_poll_error(&e);
                }
                Err(e)
            }
        }
    }

    /// Read one 16-byte MIFARE block. The sector holding it must have been
    /// authenticated first.
    pub fn read_block(&mut self, block: u8) -> Result<BlockData> {
        let result = self.read_block_inner(block);
        if let Some(sink) = self.sink.as_mut() {
            sink.on_block(block, &result);
        }
        result
    }

    fn read_block_inner(&mut self, block: u8) -> Result<BlockData> {
        let frame = self.execute(&Command::ReadBlock { block })?;

        if frame.ins() != INS_DATA_OBJECT {
            return Err(ResponseError::UnexpectedInstruction {
                expected: INS_DATA_OBJECT,
                actual: frame.ins(),
            }
            .into());
        }

        if classify(&frame) == Template::Error {
            let device = parse_error_code(&frame)?;
            return Err(Error::Device(device));
        }

        let data = parse_block_data(&frame)?;
        debug!("block {}: {}", block, data.to_hex());
        Ok(data)
    }

    /// Run LOAD KEY then AUTHENTICATE for `sector` and return the finished
    /// session. The returned session is always terminal; inspect its state.
    pub fn authenticate(
        &mut self,
        key_type: KeyType,
        key_number: u8,
        sector: u8,
        key: MifareKey,
    ) -> AuthSession {
        let mut session = AuthSession::start(key_type, key_number, sector, key);
        let mut reported = 0;
        self.report_transitions(&session, &mut reported);

        while let Some(cmd) = session.take_outgoing() {
            match self.transact(&cmd) {
                Ok(raw) => session.handle_response(&raw),
                Err(e) => session.abort(e),
            }
            self.report_transitions(&session, &mut reported);
        }

        match session.failure() {
            None => info!("sector {} authenticated", sector),
            Some(reason) => info!("sector {} authentication failed: {}", sector, reason),
        }
        if let Some(sink) = self.sink.as_mut() {
            sink.on_auth(&session);
        }
        session
    }

    fn report_transitions(&mut self, session: &AuthSession, reported: &mut usize) {
        let history = session.history();
        if let Some(sink) = self.sink.as_mut() {
            for pair in history[(*reported).min(history.len())..].windows(2) {
                sink.on_auth_transition(&pair[0], &pair[1]);
            }
        }
        *reported = history.len().saturating_sub(1);
    }
}
