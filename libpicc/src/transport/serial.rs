// libpicc/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{Read, Write};
use std::thread;
use std::time::{Duration, Instant};

use log::debug;
use serialport::{ClearBuffer, DataBits, FlowControl, Parity, SerialPort, StopBits};

use crate::transport::traits::Transport;
use crate::{Error, Result, TransportError};

/// Reader line speed
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// How often `wait_for_bytes` checks the driver's input queue
const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Minimal serial transport (8N1, no flow control). It is feature-gated
/// behind `--features serial` and requires the `serialport` crate.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Open `path` (e.g. `/dev/ttyUSB0`, `COM3`) with the reader defaults.
    pub fn open(path: &str) -> Result<Self> {
        Self::open_with_baud_rate(path, DEFAULT_BAUD_RATE)
    }

    pub fn open_with_baud_rate(path: &str, baud_rate: u32) -> Result<Self> {
        let port = serialport::new(path, baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(Duration::from_millis(200))
            .open()
            .map_err(|e| Error::Transport(TransportError::Io(e.to_string())))?;

        debug!("opened {} at {} baud", path, baud_rate);

        // Stale bytes from a previous session would corrupt the first reply.
        port.clear(ClearBuffer::All)
            .map_err(|e| Error::Transport(TransportError::Io(e.to_string())))?;

        Ok(Self { port })
    }

    /// Name of the underlying port, if the driver reports one
    pub fn name(&self) -> Option<String> {
        self.port.name()
    }
}

impl Transport for SerialTransport {
    fn write(&mut self, data: &[u8]) -> std::result::Result<(), TransportError> {
        self.port.write_all(data).map_err(|e| match e.kind() {
            std::io::ErrorKind::TimedOut => TransportError::WriteTimeout,
            _ => TransportError::Io(e.to_string()),
        })
    }

    fn wait_for_bytes_written(&mut self, timeout: Duration) -> std::result::Result<(), TransportError> {
        self.port
            .set_timeout(timeout)
            .map_err(|e| TransportError::Io(e.to_string()))?;
        self.port.flush().map_err(|e| match e.kind() {
            std::io::ErrorKind::TimedOut => TransportError::WriteTimeout,
            _ => TransportError::Io(e.to_string()),
        })
    }

    fn wait_for_bytes(&mut self, timeout: Duration) -> std::result::Result<(), TransportError> {
        let deadline = Instant::now() + timeout;
        loop {
            let queued = self
                .port
                .bytes_to_read()
                .map_err(|e| TransportError::Io(e.to_string()))?;
            if queued > 0 {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(TransportError::ReadTimeout);
            }
            thread::sleep(POLL_INTERVAL);
        }
    }

    fn read_available(&mut self) -> std::result::Result<Vec<u8>, TransportError> {
        let queued = self
            .port
            .bytes_to_read()
            .map_err(|e| TransportError::Io(e.to_string()))? as usize;
        let mut buf = vec![0u8; queued];
        if queued > 0 {
            self.port.read_exact(&mut buf)?;
        }
        Ok(buf)
    }
}
