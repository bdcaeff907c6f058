// Interactive console for a serial reader.
//
// Polls for a card every two seconds and accepts commands on stdin:
//
//   read <block>                     read one 16-byte block
//   auth <A|B> <keyno> <sector> <key hex>   load a key and authenticate a sector
//   quit
//
// Run with: cargo run -p libpicc --example reader_console --features serial -- /dev/ttyUSB0

use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

use anyhow::{Context, bail};
use libpicc::card::sector_of_block;
use libpicc::prelude::*;
use libpicc::transport::SerialTransport;

const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Prints every result the reader reports.
struct ConsoleSink {
    last_uid: String,
}

impl ReportSink for ConsoleSink {
    fn on_poll(&mut self, card: &CardInfo, raw: &[u8]) {
        if card.uid == self.last_uid {
            return;
        }
        self.last_uid = card.uid.clone();
        if card.is_present() {
            println!(
                "card  type={} uid={} sak={} atq={}",
                card.card_type, card.uid, card.sak, card.atq
            );
            println!("      raw {}", to_hex_upper_spaced(raw));
        } else {
            println!("card removed");
        }
    }

    fn on_poll_error(&mut self, error: &Error) {
        println!("poll error: {}", error);
    }

    fn on_block(&mut self, block: u8, result: &Result<BlockData>) {
        match result {
            Ok(data) => println!("block {:>3}: {}  |{}|", block, data.to_hex(), data.to_ascii_safe()),
            Err(e) => println!(
                "block {:>3}: {} (sector {})",
                block,
                e,
                sector_of_block(block)
            ),
        }
    }

    fn on_auth_transition(&mut self, from: &AuthState, to: &AuthState) {
        println!("auth  {:?} -> {:?}", from, to);
    }

    fn on_auth(&mut self, session: &AuthSession) {
        match session.failure() {
            None => println!("sector {} authenticated", session.sector()),
            Some(reason) => println!("sector {} failed: {}", session.sector(), reason),
        }
    }
}

fn parse_key_type(s: &str) -> anyhow::Result<KeyType> {
    match s {
        "A" | "a" => Ok(KeyType::A),
        "B" | "b" => Ok(KeyType::B),
        other => bail!("key type must be A or B, got {}", other),
    }
}

fn run_command(reader: &SharedReader, line: &str) -> anyhow::Result<bool> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => {}
        ["quit"] | ["exit"] => return Ok(false),
        ["read", block] => {
            let block: u8 = block.parse().context("block number")?;
            // the sink prints the outcome
            let _ = reader.with_reader(|r| r.read_block(block));
        }
        ["auth", key_type, key_number, sector, key_hex @ ..] => {
            let key_type = parse_key_type(key_type)?;
            let key_number: u8 = key_number.parse().context("key number")?;
            let sector: u8 = sector.parse().context("sector")?;
            let key_bytes = parse_hex(&key_hex.concat())?;
            let key = MifareKey::try_from(&key_bytes[..])?;
            reader.with_reader(|r| r.authenticate(key_type, key_number, sector, key));
        }
        _ => println!("commands: read <block> | auth <A|B> <keyno> <sector> <key hex> | quit"),
    }
    Ok(true)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: reader_console <serial port>")?;
    let transport = SerialTransport::open(&path).with_context(|| format!("opening {}", path))?;
    println!("opened {}", transport.name().unwrap_or(path));

    let reader = ReaderBuilder::new()
        .with_transport(Box::new(transport))
        .with_sink(Box::new(ConsoleSink {
            last_uid: String::new(),
        }))
        .build()?;
    let shared = SharedReader::new(reader);

    let poller = shared.clone();
    thread::spawn(move || {
        loop {
            // skipped while a command is running
            let _ = poller.try_poll();
            thread::sleep(POLL_INTERVAL);
        }
    });

    for line in io::stdin().lock().lines() {
        let line = line?;
        match run_command(&shared, line.trim()) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => println!("error: {:#}", e),
        }
    }
    Ok(())
}
