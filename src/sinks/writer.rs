//! Sink over any `std::io::Write` destination

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Serializes writes to an arbitrary writer behind a dedicated write lock.
///
/// Lines are not buffered: each one is handed to the writer as a single
/// `write_all` and the writer is flushed.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self::with_name(writer, "writer")
    }

    pub fn with_name(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer: Mutex::new(writer),
            name: name.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl WriterSink<File> {
    /// Open (or create) `path` for appending.
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::with_name(file, path.display().to_string()))
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&self, line: &[u8]) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line)?;
        writer.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
