// libpicc/src/reader/builder.rs

use crate::reader::config::ReaderConfig;
use crate::reader::handle::Reader;
use crate::reader::sink::ReportSink;
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
#[derive(Default)]
pub struct ReaderBuilder {
    transport: Option<Box<dyn Transport + Send>>,
    config: ReaderConfig,
    sink: Option<Box<dyn ReportSink + Send>>,
}

impl ReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-opened transport (serial port, MockTransport, ...)
    pub fn with_transport(mut self, transport: Box<dyn Transport + Send>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_sink(mut self, sink: Box<dyn ReportSink + Send>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Consume the builder. A transport is required; otherwise returns
    /// `Error::NoTransport`.
    pub fn build(self) -> Result<Reader> {
        match self.transport {
            Some(t) => Ok(Reader::with_parts(t, self.config, self.sink)),
            None => Err(Error::NoTransport),
        }
    }
}
