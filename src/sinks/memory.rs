//! In-memory sink that captures lines for inspection

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Captures every line written to it.
///
/// Clones share the same buffer, so a test can keep one clone and hand the
/// other to a logger.
///
/// ```
/// use leveled_logger::{Logger, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder().sink(sink.clone()).colorize(false).build();
/// logger.info("ready");
/// assert!(sink.contents().ends_with("ready\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inner: Arc<Mutex<Captured>>,
}

#[derive(Debug, Default)]
struct Captured {
    bytes: Vec<u8>,
    writes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock().bytes).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    /// Number of `write_line` calls received.
    pub fn write_count(&self) -> usize {
        self.inner.lock().writes
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().bytes.is_empty()
    }

    pub fn clear(&self) {
        let mut captured = self.inner.lock();
        captured.bytes.clear();
        captured.writes = 0;
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &[u8]) -> Result<()> {
        let mut captured = self.inner.lock();
        captured.bytes.extend_from_slice(line);
        captured.writes += 1;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
