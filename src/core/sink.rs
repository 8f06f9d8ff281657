//! Sink trait for log output destinations

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A byte-append destination for fully assembled log lines.
///
/// Implementations must write each line with a single, uninterrupted write so
/// lines from concurrent callers never interleave within a line.
pub trait Sink: Send + Sync {
    fn write_line(&self, line: &[u8]) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;

    /// Whether this sink writes to the process's standard error.
    fn is_stderr(&self) -> bool {
        false
    }
}

/// Selector for the two process streams a registry binds loggers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SinkKind {
    Stdout,
    Stderr,
}

impl SinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Stdout => "stdout",
            SinkKind::Stderr => "stderr",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SinkKind {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "stdout" | "std" | "out" => Ok(SinkKind::Stdout),
            "stderr" | "err" => Ok(SinkKind::Stderr),
            _ => Err(LoggerError::unknown_sink(s)),
        }
    }
}
