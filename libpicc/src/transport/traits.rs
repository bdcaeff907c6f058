// libpicc/src/transport/traits.rs

use std::time::Duration;

use crate::TransportError;

/// Transport trait abstracts the byte-stream link away from protocol logic.
///
/// Port configuration and connection lifecycle belong to the implementation;
/// the protocol engine only writes bytes and waits for bytes.
pub trait Transport {
    /// Queue raw bytes for transmission
    fn write(&mut self, data: &[u8]) -> Result<(), TransportError>;

    /// Block until queued bytes have left the host or `timeout` expires
    /// (`WriteTimeout`). Transports with synchronous writes keep the default.
    fn wait_for_bytes_written(&mut self, _timeout: Duration) -> Result<(), TransportError> {
        Ok(())
    }

    /// Block until at least one byte is readable. Returns `ReadTimeout` when
    /// nothing arrived within `timeout`.
    fn wait_for_bytes(&mut self, timeout: Duration) -> Result<(), TransportError>;

    /// Drain whatever is currently buffered (possibly nothing)
    fn read_available(&mut self) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, data: &[u8]) -> Result<(), TransportError> {
        (**self).write(data)
    }

    fn wait_for_bytes_written(&mut self, timeout: Duration) -> Result<(), TransportError> {
        (**self).wait_for_bytes_written(timeout)
    }

    fn wait_for_bytes(&mut self, timeout: Duration) -> Result<(), TransportError> {
        (**self).wait_for_bytes(timeout)
    }

    fn read_available(&mut self) -> Result<Vec<u8>, TransportError> {
        (**self).read_available()
    }
}
