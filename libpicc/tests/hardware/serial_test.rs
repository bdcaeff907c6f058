#![cfg(feature = "serial")]

// These tests need a reader on the port named by PICC_PORT. They are marked
// `#[ignore]` so CI does not attempt to run them. Run manually with:
//
// PICC_PORT=/dev/ttyUSB0 cargo test -p libpicc --test hardware --features serial -- --ignored

use libpicc::transport::SerialTransport;
use libpicc::types::{KeyType, MifareKey};
use libpicc::{Reader, Result};
use serial_test::serial;

/// Open the reader named by PICC_PORT, or `Ok(None)` when unset.
fn open_reader() -> Result<Option<Reader>> {
    match std::env::var("PICC_PORT") {
        Ok(path) => {
            let transport = SerialTransport::open(&path)?;
            Ok(Some(Reader::new(Box::new(transport))))
        }
        Err(_) => Ok(None),
    }
}

#[test]
#[ignore]
#[serial]
fn poll_over_serial() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    if let Some(mut reader) = open_reader()? {
        let result = reader.poll()?;
        println!("card: {:?}", result.card);
    }
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn authenticate_and_read_sector_zero() -> Result<()> {
    if let Some(mut reader) = open_reader()? {
        if !reader.poll()?.card.is_present() {
            return Ok(());
        }
        let session = reader.authenticate(KeyType::A, 0, 0, MifareKey::DEFAULT);
        if session.is_authenticated() {
            let block = reader.read_block(0)?;
            println!("block 0: {}", block.to_hex());
        }
    }
    Ok(())
}
