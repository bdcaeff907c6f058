#[path = "../common/mod.rs"]
mod common;

use std::sync::{Arc, Mutex};

use libpicc::reader::{ReaderBuilder, ReportSink};
use libpicc::test_support;
use libpicc::transport::mock::MockTransport;
use libpicc::{CardInfo, Error, FrameError, TransportError};

#[derive(Default, Clone)]
struct PollLog {
    cards: Arc<Mutex<Vec<CardInfo>>>,
    errors: Arc<Mutex<Vec<Error>>>,
}

impl ReportSink for PollLog {
    fn on_poll(&mut self, card: &CardInfo, _raw: &[u8]) {
        self.cards.lock().unwrap().push(card.clone());
    }

    fn on_poll_error(&mut self, error: &Error) {
        self.errors.lock().unwrap().push(error.clone());
    }
}

#[test]
fn poll_reports_card() {
    common::init_logging();
    let frame = common::fixtures::card_present_frame();
    let mut reader = test_support::mock_reader(vec![frame.clone()]);

    let result = reader.poll().unwrap();
    assert_eq!(result.card.uid, "04 A1 B2 C3");
    assert_eq!(result.card.sak, "08");
    assert_eq!(result.raw, frame);
}

#[test]
fn poll_reply_split_over_chunks() {
    let frame = common::fixtures::card_present_frame();
    let (head, tail) = frame.split_at(5);
    let mut mock = MockTransport::new();
    mock.push_chunked_response(vec![head.to_vec(), tail.to_vec()]);

    let mut reader = ReaderBuilder::new()
        .with_transport(Box::new(mock))
        .build()
        .unwrap();
    assert_eq!(reader.poll().unwrap().card.uid, "04 A1 B2 C3");
}

#[test]
fn poll_without_card_is_absent_not_error() {
    let mut reader = test_support::mock_reader(vec![common::fixtures::no_card_frame()]);
    let result = reader.poll().unwrap();
    assert_eq!(result.card, CardInfo::absent());
}

#[test]
fn poll_errors_reach_the_sink() {
    let mut corrupted = common::fixtures::card_present_frame();
    corrupted[4] ^= 0x01;

    let log = PollLog::default();
    let mut reader = ReaderBuilder::new()
        .with_transport(Box::new(test_support::mock_with_responses(vec![
            corrupted,
            common::fixtures::card_present_frame(),
        ])))
        .with_sink(Box::new(log.clone()))
        .build()
        .unwrap();

    assert!(matches!(
        reader.poll(),
        Err(Error::Frame(FrameError::LrcMismatch { .. }))
    ));
    // a failed poll does not poison the next one
    assert!(reader.poll().unwrap().card.is_present());
    // silent reader
    assert_eq!(
        reader.poll(),
        Err(Error::Transport(TransportError::ReadTimeout))
    );

    assert_eq!(log.cards.lock().unwrap().len(), 1);
    assert_eq!(log.errors.lock().unwrap().len(), 2);
}

#[test]
fn poll_writes_the_fixed_frame() {
    let mut mock = MockTransport::new();
    mock.fail_next_write(TransportError::WriteTimeout);
    let mut reader = ReaderBuilder::new()
        .with_transport(Box::new(mock))
        .build()
        .unwrap();
    assert_eq!(
        reader.poll(),
        Err(Error::Transport(TransportError::WriteTimeout))
    );
}
