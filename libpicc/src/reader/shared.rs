// libpicc/src/reader/shared.rs

use std::sync::{Arc, Mutex, MutexGuard, TryLockError};

use log::debug;

use crate::reader::handle::{PollResult, Reader};
use crate::Result;

/// Cloneable handle for driving one [`Reader`] from several threads, e.g. a
/// periodic poll timer next to user-triggered block reads.
///
/// The reader stays single-flight: a poll that finds another round trip in
/// progress is skipped instead of queued.
#[derive(Clone)]
pub struct SharedReader {
    inner: Arc<Mutex<Reader>>,
}

impl SharedReader {
    pub fn new(reader: Reader) -> Self {
        Self {
            inner: Arc::new(Mutex::new(reader)),
        }
    }

    /// Poll unless the reader is busy. Returns `None` when the poll was
    /// skipped.
    pub fn try_poll(&self) -> Option<Result<PollResult>> {
        let mut reader = match self.inner.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) => {
                debug!("reader busy, skipping poll");
                return None;
            }
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        };
        Some(reader.poll())
    }

    /// Run `f` with exclusive access to the reader, waiting for any round
    /// trip in progress to finish.
    pub fn with_reader<T>(&self, f: impl FnOnce(&mut Reader) -> T) -> T {
        let mut reader = self.lock();
        f(&mut reader)
    }

    fn lock(&self) -> MutexGuard<'_, Reader> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
