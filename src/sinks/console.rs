//! Console sinks for the process's standard streams

use crate::core::{LoggerError, Result, Sink, SinkKind};
use std::io::{self, Write};

/// Writes lines to standard output or standard error.
///
/// Each line is written while holding the stream's lock, so concurrent lines
/// never tear, and flushed immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleSink {
    kind: SinkKind,
}

impl ConsoleSink {
    pub fn new(kind: SinkKind) -> Self {
        Self { kind }
    }

    pub fn stdout() -> Self {
        Self::new(SinkKind::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(SinkKind::Stderr)
    }

    pub fn kind(&self) -> SinkKind {
        self.kind
    }

    fn write_locked(out: &mut impl Write, line: &[u8]) -> io::Result<()> {
        out.write_all(line)?;
        out.flush()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&self, line: &[u8]) -> Result<()> {
        let written = match self.kind {
            SinkKind::Stdout => Self::write_locked(&mut io::stdout().lock(), line),
            SinkKind::Stderr => Self::write_locked(&mut io::stderr().lock(), line),
        };
        written.map_err(|e| LoggerError::io_operation(format!("writing to {}", self.kind), e))
    }

    fn flush(&self) -> Result<()> {
        match self.kind {
            SinkKind::Stdout => io::stdout().flush()?,
            SinkKind::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        self.kind.as_str()
    }

    fn is_stderr(&self) -> bool {
        self.kind == SinkKind::Stderr
    }
}
