//! Logger metrics for observability
//!
//! Counters for lines written, lines dropped by the severity filter and sink
//! write failures.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use leveled_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_written();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.lines_filtered(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines handed to the sink successfully
    lines_written: AtomicU64,

    /// Lines below the minimum severity
    lines_filtered: AtomicU64,

    /// Lines the sink failed to write
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            lines_filtered: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lines_filtered(&self) -> u64 {
        self.lines_filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Record a written line, returning the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a filtered line, returning the previous count
    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.lines_filtered.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed write, returning the previous count
    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            lines_written: AtomicU64::new(self.lines_written()),
            lines_filtered: AtomicU64::new(self.lines_filtered()),
            write_failures: AtomicU64::new(self.write_failures()),
        }
    }
}
