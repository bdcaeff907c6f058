#[path = "../common/mod.rs"]
mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use libpicc::auth::{AuthFailure, AuthState};
use libpicc::reader::Reader;
use libpicc::transport::Transport;
use libpicc::transport::mock::MockTransport;
use libpicc::types::{KeyType, MifareKey};
use libpicc::{DeviceError, TransportError};

/// Lets the test look at written frames after the Reader took ownership.
#[derive(Clone, Default)]
struct Recording(Arc<Mutex<MockTransport>>);

impl Transport for Recording {
    fn write(&mut self, data: &[u8]) -> Result<(), TransportError> {
        self.0.lock().unwrap().write(data)
    }

    fn wait_for_bytes(&mut self, timeout: Duration) -> Result<(), TransportError> {
        self.0.lock().unwrap().wait_for_bytes(timeout)
    }

    fn read_available(&mut self) -> Result<Vec<u8>, TransportError> {
        self.0.lock().unwrap().read_available()
    }
}

fn reader_with(responses: Vec<Vec<u8>>) -> (Reader, Recording) {
    let recording = Recording::default();
    for r in responses {
        recording.0.lock().unwrap().push_response(r);
    }
    (Reader::new(Box::new(recording.clone())), recording)
}

#[test]
fn wrong_key_fails_after_load_key_succeeds() {
    common::init_logging();
    let (mut reader, recording) = reader_with(vec![
        common::fixtures::load_key_ok_frame(),
        common::fixtures::authenticate_denied_frame(),
    ]);

    let session = reader.authenticate(KeyType::A, 0, 1, common::fixtures::sample_key());

    assert_eq!(
        session.state(),
        &AuthState::Failed(AuthFailure::DeviceError(DeviceError {
            code: 0x08,
            message: "authentication failed (wrong key/sector)"
        }))
    );

    let sent = recording.0.lock().unwrap().sent.clone();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0][7], 0xA9);
    assert_eq!(
        hex::encode(&sent[1]),
        "0209003edf7804b00000012503"
    );
}

#[test]
fn successful_authentication() {
    let (mut reader, recording) = reader_with(vec![
        common::fixtures::load_key_ok_frame(),
        common::fixtures::authenticate_ok_frame(),
    ]);

    let session = reader.authenticate(KeyType::B, 1, 39, MifareKey::DEFAULT);
    assert!(session.is_authenticated());
    assert_eq!(session.history().len(), 5);
    assert_eq!(recording.0.lock().unwrap().sent.len(), 2);
}

#[test]
fn invalid_key_number_sends_nothing() {
    let (mut reader, recording) = reader_with(vec![]);
    let session = reader.authenticate(KeyType::A, 2, 1, MifareKey::DEFAULT);
    assert!(matches!(
        session.failure(),
        Some(AuthFailure::InvalidParameter(_))
    ));
    assert!(recording.0.lock().unwrap().sent.is_empty());
}

#[test]
fn invalid_sector_sends_nothing() {
    let (mut reader, recording) = reader_with(vec![]);
    let session = reader.authenticate(KeyType::A, 0, 40, MifareKey::DEFAULT);
    assert!(matches!(
        session.failure(),
        Some(AuthFailure::InvalidParameter(_))
    ));
    assert!(recording.0.lock().unwrap().sent.is_empty());
}

#[test]
fn silent_reader_times_out() {
    let (mut reader, recording) = reader_with(vec![common::fixtures::load_key_ok_frame()]);
    let session = reader.authenticate(KeyType::A, 0, 1, MifareKey::DEFAULT);
    assert_eq!(
        session.failure(),
        Some(&AuthFailure::Transport(TransportError::ReadTimeout))
    );
    // AUTHENTICATE was written, its reply never came
    assert_eq!(recording.0.lock().unwrap().sent.len(), 2);
}

#[test]
fn load_key_error_stops_before_authenticate() {
    let (mut reader, recording) =
        reader_with(vec![libpicc::test_support::error_frame(0xA9, 0x05)]);
    let session = reader.authenticate(KeyType::A, 0, 1, MifareKey::DEFAULT);
    assert_eq!(
        session.failure(),
        Some(&AuthFailure::DeviceError(DeviceError::from_code(0x05)))
    );
    assert_eq!(recording.0.lock().unwrap().sent.len(), 1);
}
