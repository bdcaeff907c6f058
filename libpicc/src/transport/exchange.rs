// libpicc/src/transport/exchange.rs

//! One request/response round trip over a [`Transport`].
//!
//! A reply is assembled from an initial wait followed by short trailing
//! waits, since the reader may deliver one frame in several chunks. Any
//! failure drops the bytes collected so far; nothing carries over into the
//! next round trip.

use std::time::Duration;

use log::{debug, trace};

use crate::transport::traits::Transport;
use crate::utils::to_hex_upper_spaced;
use crate::TransportError;

/// Write `frame` and wait for the write to complete.
///
/// Bytes already queued on the link (a reply that arrived after its
/// round trip gave up) are discarded first so they cannot prefix the reply
/// to `frame`.
pub fn send_frame(
    transport: &mut dyn Transport,
    frame: &[u8],
    write_timeout: Duration,
) -> Result<(), TransportError> {
    discard_stale_input(transport)?;
    transport.write(frame)?;
    transport.wait_for_bytes_written(write_timeout)
}

fn discard_stale_input(transport: &mut dyn Transport) -> Result<(), TransportError> {
    loop {
        let stale = transport.read_available()?;
        if stale.is_empty() {
            return Ok(());
        }
        debug!("discarding stale input: {}", to_hex_upper_spaced(&stale));
    }
}

/// Collect one reply: wait up to `initial` for the first bytes, then keep
/// reading while more bytes arrive within `trailing`.
pub fn receive_response(
    transport: &mut dyn Transport,
    initial: Duration,
    trailing: Duration,
) -> Result<Vec<u8>, TransportError> {
    transport.wait_for_bytes(initial)?;
    let mut buf = transport.read_available()?;

    loop {
        match transport.wait_for_bytes(trailing) {
            Ok(()) => {
                let chunk = transport.read_available()?;
                if chunk.is_empty() {
                    break;
                }
                trace!("trailing chunk: {}", to_hex_upper_spaced(&chunk));
                buf.extend_from_slice(&chunk);
            }
            Err(TransportError::ReadTimeout) => break,
            Err(e) => {
                debug!("discarding {} partial bytes: {}", buf.len(), e);
                return Err(e);
            }
        }
    }

    Ok(buf)
}
