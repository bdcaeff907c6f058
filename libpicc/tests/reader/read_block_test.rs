#[path = "../common/mod.rs"]
mod common;

use std::collections::VecDeque;
use std::time::Duration;

use libpicc::reader::Reader;
use libpicc::test_support;
use libpicc::transport::Transport;
use libpicc::{DeviceError, Error, ResponseError, TransportError};

/// Byte-queue link: unread input survives writes, like a serial driver.
/// A `late` reply shows up only after the first wait for it has expired.
#[derive(Default)]
struct QueuedLink {
    input: Vec<u8>,
    replies: VecDeque<(Vec<u8>, bool)>,
    late: Option<Vec<u8>>,
}

impl QueuedLink {
    fn reply(mut self, bytes: Vec<u8>) -> Self {
        self.replies.push_back((bytes, false));
        self
    }

    fn late_reply(mut self, bytes: Vec<u8>) -> Self {
        self.replies.push_back((bytes, true));
        self
    }
}

impl Transport for QueuedLink {
    fn write(&mut self, _data: &[u8]) -> Result<(), TransportError> {
        match self.replies.pop_front() {
            Some((bytes, true)) => self.late = Some(bytes),
            Some((bytes, false)) => self.input.extend(bytes),
            None => {}
        }
        Ok(())
    }

    fn wait_for_bytes(&mut self, _timeout: Duration) -> Result<(), TransportError> {
        if !self.input.is_empty() {
            return Ok(());
        }
        if let Some(bytes) = self.late.take() {
            self.input.extend(bytes);
        }
        Err(TransportError::ReadTimeout)
    }

    fn read_available(&mut self) -> Result<Vec<u8>, TransportError> {
        Ok(std::mem::take(&mut self.input))
    }
}

#[test]
fn read_block_returns_data() {
    common::init_logging();
    let block = common::fixtures::sample_blockdata(0xA5);
    let mut reader =
        test_support::mock_reader(vec![common::fixtures::read_frame_with_block(&block)]);

    let data = reader.read_block(4).unwrap();
    assert_eq!(data, block);
    assert_eq!(data.to_hex().split(' ').count(), 16);
}

#[test]
fn read_block_device_error() {
    let mut reader = test_support::mock_reader(vec![test_support::error_frame(0xA5, 0x08)]);
    assert_eq!(
        reader.read_block(4),
        Err(Error::Device(DeviceError::from_code(0x08)))
    );
}

#[test]
fn read_block_short_reply() {
    let mut reader =
        test_support::mock_reader(vec![test_support::mifare_ok_frame(0xA5, &[0x00; 8])]);
    assert_eq!(
        reader.read_block(1),
        Err(Error::Response(ResponseError::ShortData {
            expected: 16,
            actual: 8
        }))
    );
}

#[test]
fn read_block_echo_mismatch() {
    let mut reader =
        test_support::mock_reader(vec![test_support::mifare_ok_frame(0xB0, &[0x00; 16])]);
    assert_eq!(
        reader.read_block(1),
        Err(Error::Response(ResponseError::CommandMismatch {
            expected: 0xA5,
            actual: 0xB0
        }))
    );
}

#[test]
fn late_poll_reply_does_not_leak_into_next_read() {
    let block = common::fixtures::sample_blockdata(0x3C);
    let link = QueuedLink::default()
        .late_reply(common::fixtures::card_present_frame())
        .reply(common::fixtures::read_frame_with_block(&block));
    let mut reader = Reader::new(Box::new(link));

    assert_eq!(
        reader.poll(),
        Err(Error::Transport(TransportError::ReadTimeout))
    );
    assert_eq!(reader.read_block(4), Ok(block));
}
