//! Registry of the standard and error loggers
//!
//! [`Registry::setup`] builds two independent loggers from one set of
//! [`LoggerOptions`]: one bound to standard output, one to standard error.
//! Callers log through [`LogHandle`]s, each permanently bound to the logger
//! that existed when it was issued.

use super::logger::{Logger, LoggerSettings};
use super::severity::Severity;
use super::sink::{Sink, SinkKind};
use crate::sinks::ConsoleSink;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Seed configuration for the loggers built by [`Registry::setup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerOptions {
    pub colorize: bool,
    pub min_level: Severity,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            colorize: true,
            min_level: Severity::Debug,
        }
    }
}

impl LoggerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    #[must_use]
    pub fn with_min_level(mut self, level: Severity) -> Self {
        self.min_level = level;
        self
    }

    fn settings(&self) -> LoggerSettings {
        LoggerSettings::default()
            .with_colorize(self.colorize)
            .with_min_level(self.min_level)
    }
}

/// A cloneable reference to one registry logger.
///
/// Dereferences to [`Logger`], so every emit and setter operation is
/// available directly on the handle.
#[derive(Clone)]
pub struct LogHandle {
    kind: SinkKind,
    logger: Arc<Logger>,
}

impl LogHandle {
    fn new(kind: SinkKind, logger: Logger) -> Self {
        Self {
            kind,
            logger: Arc::new(logger),
        }
    }

    /// Which registry slot this handle was issued for.
    pub fn kind(&self) -> SinkKind {
        self.kind
    }

    /// Whether both handles refer to the same logger.
    pub fn same_logger(&self, other: &LogHandle) -> bool {
        Arc::ptr_eq(&self.logger, &other.logger)
    }
}

impl Deref for LogHandle {
    type Target = Logger;

    fn deref(&self) -> &Logger {
        &self.logger
    }
}

impl fmt::Debug for LogHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogHandle")
            .field("kind", &self.kind)
            .field("logger", &*self.logger)
            .finish()
    }
}

/// The standard and error loggers of a process.
///
/// # Example
///
/// ```no_run
/// use leveled_logger::{LoggerOptions, Registry, Severity};
///
/// let registry = Registry::setup(Some(LoggerOptions::new().with_min_level(Severity::Info)));
/// let out = registry.stdout();
/// let err = registry.stderr();
///
/// leveled_logger::info!(out, "listening on {}", 8080);
/// leveled_logger::error!(err, "failed to bind: {}", "address in use");
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    standard: LogHandle,
    error: LogHandle,
}

impl Registry {
    /// Build loggers for standard output and standard error.
    ///
    /// `None` selects [`LoggerOptions::default`].
    pub fn setup(options: Option<LoggerOptions>) -> Self {
        Self::with_sinks(options, ConsoleSink::stdout(), ConsoleSink::stderr())
    }

    /// Build the two loggers over caller-supplied sinks.
    pub fn with_sinks(
        options: Option<LoggerOptions>,
        standard: impl Sink + 'static,
        error: impl Sink + 'static,
    ) -> Self {
        let options = options.unwrap_or_default();
        Self {
            standard: LogHandle::new(
                SinkKind::Stdout,
                Logger::with_settings(standard, options.settings()),
            ),
            error: LogHandle::new(
                SinkKind::Stderr,
                Logger::with_settings(error, options.settings()),
            ),
        }
    }

    pub fn stdout(&self) -> LogHandle {
        self.standard.clone()
    }

    pub fn stderr(&self) -> LogHandle {
        self.error.clone()
    }

    pub fn handle(&self, kind: SinkKind) -> LogHandle {
        match kind {
            SinkKind::Stdout => self.stdout(),
            SinkKind::Stderr => self.stderr(),
        }
    }

    /// Look up a handle by selector name (`"stdout"`, `"stderr"`, ...).
    ///
    /// # Panics
    ///
    /// Panics if `name` selects neither stream; an unknown selector is a usage
    /// error, not a runtime condition.
    #[track_caller]
    pub fn handle_named(&self, name: &str) -> LogHandle {
        match name.parse::<SinkKind>() {
            Ok(kind) => self.handle(kind),
            Err(e) => panic!("{}", e),
        }
    }
}
