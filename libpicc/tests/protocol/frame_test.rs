use libpicc::protocol::{Frame, lrc};
use libpicc::{Error, FrameError};

#[test]
fn decodes_empty_success_template() {
    // empty success template: 02 05 00 3E FF 01 00 C5 03
    let raw = Frame::encode(0x00, 0x3E, &[0xFF, 0x01, 0x00]);
    assert_eq!(hex::encode(&raw), "0205003eff0100c503");

    let frame = Frame::decode(&raw).unwrap();
    assert_eq!(frame.pcb(), 0x00);
    assert_eq!(frame.ins(), 0x3E);
    assert_eq!(frame.data(), &[0xFF, 0x01, 0x00]);
    assert_eq!(frame.raw(), &raw[..]);
}

#[test]
fn lrc_covers_len_through_body() {
    let raw = hex::decode("0207003edf7802a5003903").unwrap();
    assert_eq!(lrc(&raw[1..raw.len() - 2]), raw[raw.len() - 2]);
    assert!(Frame::decode(&raw).is_ok());
}

#[test]
fn rejects_each_kind_of_damage() {
    let good = Frame::encode(0x00, 0x3E, &[0xFF, 0x01, 0x00]);

    let mut bad_stx = good.clone();
    bad_stx[0] = 0x55;
    assert!(matches!(
        Frame::decode(&bad_stx),
        Err(FrameError::BadBoundary { first: 0x55, .. })
    ));

    let mut bad_lrc = good.clone();
    let n = bad_lrc.len();
    bad_lrc[n - 2] ^= 0xFF;
    assert!(matches!(
        Frame::decode(&bad_lrc),
        Err(FrameError::LrcMismatch { .. })
    ));

    assert_eq!(
        Frame::decode(&good[..7]),
        Err(FrameError::TooShort { min: 8, actual: 7 })
    );
}

#[test]
fn frame_errors_convert_into_crate_error() {
    let e: Error = Frame::decode(&[]).unwrap_err().into();
    assert!(matches!(e, Error::Frame(FrameError::TooShort { actual: 0, .. })));
}
