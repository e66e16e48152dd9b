use std::io;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use crate::error::SinkError;
use crate::record::Record;
use crate::sink::Sink;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// This [Sink] keeps every record in memory
///
/// Clones share the same storage, so a clone can be handed to a logger while the original is
/// used to inspect what was dispatched.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<Record>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<Record> {
        lock(&self.records).clone()
    }

    /// Returns the records rendered in the console format
    pub fn lines(&self) -> Vec<String> {
        lock(&self.records).iter().
                map(Record::to_string).
                collect()
    }

    pub fn len(&self) -> usize {
        lock(&self.records).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.records).is_empty()
    }

    pub fn clear(&self) {
        lock(&self.records).clear();
    }
}

impl Sink for MemorySink {
    fn write(&mut self, record: &Record) -> Result<(), SinkError> {
        lock(&self.records).push(record.clone());

        Ok(())
    }
}

/// In-memory [Write] target whose clones share one buffer
///
/// Used to capture the streams of a [ConsoleSink](crate::sink::ConsoleSink).
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&lock(&self.bytes)).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.bytes).is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        lock(&self.bytes).extend_from_slice(buf);

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
