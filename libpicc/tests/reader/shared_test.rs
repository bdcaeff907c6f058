#[path = "../common/mod.rs"]
mod common;

use std::thread;

use libpicc::reader::SharedReader;
use libpicc::test_support;

#[test]
fn poll_thread_and_block_reads_share_one_reader() {
    common::init_logging();
    let block = common::fixtures::sample_blockdata(0x11);
    let shared = SharedReader::new(test_support::mock_reader(vec![
        common::fixtures::card_present_frame(),
        common::fixtures::read_frame_with_block(&block),
    ]));

    let poller = shared.clone();
    let polled = thread::spawn(move || poller.with_reader(|r| r.poll()))
        .join()
        .unwrap()
        .unwrap();
    assert!(polled.card.is_present());

    let data = shared.with_reader(|r| r.read_block(8)).unwrap();
    assert_eq!(data, block);
}

#[test]
fn try_poll_when_idle() {
    let shared = SharedReader::new(test_support::mock_reader(vec![
        common::fixtures::no_card_frame(),
    ]));
    let result = shared.try_poll().expect("reader is idle");
    assert!(!result.unwrap().card.is_present());
}
