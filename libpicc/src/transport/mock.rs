// libpicc/src/transport/mock.rs

use std::collections::VecDeque;
use std::time::Duration;

use crate::transport::traits::Transport;
use crate::TransportError;

/// Mock transport for unit tests. It records written frames and answers each
/// write with the next scripted reply.
///
/// A reply is a sequence of chunks, each delivered by one
/// `wait_for_bytes`/`read_available` pair, optionally followed by an error.
/// A write with no scripted reply left behaves like a silent reader.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    replies: VecDeque<Vec<Result<Vec<u8>, TransportError>>>,
    inbound: VecDeque<Result<Vec<u8>, TransportError>>,
    write_failures: VecDeque<TransportError>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a reply delivered in one chunk.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.push_chunked_response(vec![resp]);
    }

    /// Script a reply delivered over several chunks.
    pub fn push_chunked_response(&mut self, chunks: Vec<Vec<u8>>) {
        self.replies.push_back(chunks.into_iter().map(Ok).collect());
    }

    /// Script a reply that breaks with `err` after `chunks`.
    pub fn push_failing_response(&mut self, chunks: Vec<Vec<u8>>, err: TransportError) {
        let mut reply: Vec<_> = chunks.into_iter().map(Ok).collect();
        reply.push(Err(err));
        self.replies.push_back(reply);
    }

    /// Make the next write fail with `err` (nothing is recorded or answered).
    pub fn fail_next_write(&mut self, err: TransportError) {
        self.write_failures.push_back(err);
    }

    /// Replies still waiting for a write.
    pub fn pending_replies(&self) -> usize {
        self.replies.len()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<(), TransportError> {
        if let Some(err) = self.write_failures.pop_front() {
            return Err(err);
        }
        self.sent.push(data.to_vec());
        // A new request supersedes anything left over from the previous one.
        self.inbound = self.replies.pop_front().unwrap_or_default().into();
        Ok(())
    }

    fn wait_for_bytes(&mut self, _timeout: Duration) -> Result<(), TransportError> {
        match self.inbound.front() {
            Some(Ok(_)) => Ok(()),
            Some(Err(_)) => match self.inbound.pop_front() {
                Some(Err(e)) => Err(e),
                _ => Err(TransportError::ReadTimeout),
            },
            None => Err(TransportError::ReadTimeout),
        }
    }

    fn read_available(&mut self) -> Result<Vec<u8>, TransportError> {
        match self.inbound.front() {
            Some(Ok(_)) => match self.inbound.pop_front() {
                Some(Ok(chunk)) => Ok(chunk),
                _ => Ok(Vec::new()),
            },
            _ => Ok(Vec::new()),
        }
    }
}
