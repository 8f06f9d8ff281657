//! Main logger implementation
//!
//! A [`Logger`] owns one sink and an immutable [`LoggerSettings`] snapshot.
//! Setters build a new snapshot and swap it in under a short write lock; every
//! emit call reads the current snapshot once and uses it for the level check,
//! the header and the write, so a single line never mixes old and new settings.
//! The sink is never written while the settings lock is held.

use super::{
    error::Result,
    header::{self, HeaderTemplate},
    location::CallSite,
    metrics::LoggerMetrics,
    severity::Severity,
    sink::Sink,
    timestamp::TimestampFormat,
};
use crate::sinks::ConsoleSink;
use parking_lot::RwLock;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Exit status used when a fatal line terminates the process.
pub const FATAL_EXIT_CODE: i32 = 255;

/// Configuration snapshot of one logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerSettings {
    min_level: Severity,
    default_level: Severity,
    colorize: bool,
    header_override: Option<String>,
    header_template: Arc<HeaderTemplate>,
    timestamp_format: TimestampFormat,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            min_level: Severity::Debug,
            default_level: Severity::Info,
            colorize: true,
            header_override: None,
            header_template: Arc::new(HeaderTemplate::builtin()),
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl LoggerSettings {
    pub fn min_level(&self) -> Severity {
        self.min_level
    }

    pub fn default_level(&self) -> Severity {
        self.default_level
    }

    pub fn colorize(&self) -> bool {
        self.colorize
    }

    /// The active override; never `Some("")`.
    pub fn header_override(&self) -> Option<&str> {
        self.header_override.as_deref()
    }

    pub fn header_template(&self) -> &HeaderTemplate {
        &self.header_template
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    pub fn is_enabled(&self, level: Severity) -> bool {
        level >= self.min_level
    }

    #[must_use]
    pub fn with_min_level(mut self, level: Severity) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_default_level(mut self, level: Severity) -> Self {
        self.default_level = level;
        self
    }

    #[must_use]
    pub fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Replace the computed header; an empty string clears the override.
    #[must_use]
    pub fn with_header_override(mut self, header: impl Into<String>) -> Self {
        let header = header.into();
        self.header_override = if header.is_empty() { None } else { Some(header) };
        self
    }

    #[must_use]
    pub fn with_header_template(mut self, template: HeaderTemplate) -> Self {
        self.header_template = Arc::new(template);
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

pub struct Logger {
    settings: RwLock<Arc<LoggerSettings>>,
    sink: Box<dyn Sink>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger over `sink` with default settings.
    #[must_use]
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self::with_settings(sink, LoggerSettings::default())
    }

    #[must_use]
    pub fn with_settings(sink: impl Sink + 'static, settings: LoggerSettings) -> Self {
        Self::from_boxed(Box::new(sink), settings)
    }

    fn from_boxed(sink: Box<dyn Sink>, settings: LoggerSettings) -> Self {
        Self {
            settings: RwLock::new(Arc::new(settings)),
            sink,
            metrics: LoggerMetrics::new(),
        }
    }

    /// Current settings snapshot.
    pub fn settings(&self) -> Arc<LoggerSettings> {
        Arc::clone(&self.settings.read())
    }

    fn update(&self, change: impl FnOnce(LoggerSettings) -> LoggerSettings) {
        let mut settings = self.settings.write();
        let next = change(LoggerSettings::clone(&settings));
        *settings = Arc::new(next);
    }

    /// Set a header that replaces the computed one verbatim.
    ///
    /// An empty string clears the override.
    pub fn set_header_override(&self, header: impl Into<String>) {
        let header = header.into();
        self.update(|settings| settings.with_header_override(header));
    }

    pub fn clear_header_override(&self) {
        self.set_header_override(String::new());
    }

    pub fn set_min_level(&self, level: Severity) {
        self.update(|settings| settings.with_min_level(level));
    }

    pub fn set_default_level(&self, level: Severity) {
        self.update(|settings| settings.with_default_level(level));
    }

    pub fn set_colorize(&self, colorize: bool) {
        self.update(|settings| settings.with_colorize(colorize));
    }

    /// Parse and install a header template.
    ///
    /// On error the current template stays in effect.
    pub fn set_header_template(&self, template: &str) -> Result<()> {
        let template = HeaderTemplate::parse(template)?;
        self.update(|settings| settings.with_header_template(template));
        Ok(())
    }

    pub fn set_timestamp_format(&self, format: TimestampFormat) {
        self.update(|settings| settings.with_timestamp_format(format));
    }

    pub fn min_level(&self) -> Severity {
        self.settings.read().min_level
    }

    pub fn default_level(&self) -> Severity {
        self.settings.read().default_level
    }

    pub fn colorize(&self) -> bool {
        self.settings.read().colorize
    }

    pub fn header_override(&self) -> Option<String> {
        self.settings.read().header_override.clone()
    }

    pub fn is_enabled(&self, level: Severity) -> bool {
        self.settings.read().is_enabled(level)
    }

    /// Name of the sink this logger writes to.
    pub fn sink_name(&self) -> &str {
        self.sink.name()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }

    /// Log `message` at `level`, attributing it to the caller.
    ///
    /// A [`Severity::Fatal`] line terminates the process after it is written.
    #[track_caller]
    pub fn log(&self, level: Severity, message: impl fmt::Display) {
        self.log_at(level, CallSite::caller(), format_args!("{}", message));
    }

    /// Log preformatted arguments with an explicit call site.
    ///
    /// This is what the logging macros expand to.
    pub fn log_at(&self, level: Severity, call_site: CallSite, args: fmt::Arguments<'_>) {
        self.emit(level, &call_site, args);
        if level == Severity::Fatal {
            self.terminate();
        }
    }

    /// Log at the configured default level.
    #[track_caller]
    pub fn log_default(&self, message: impl fmt::Display) {
        self.log_default_at(CallSite::caller(), format_args!("{}", message));
    }

    pub fn log_default_at(&self, call_site: CallSite, args: fmt::Arguments<'_>) {
        let level = self.default_level();
        self.log_at(level, call_site, args);
    }

    /// Log at fatal severity, then exit with [`FATAL_EXIT_CODE`].
    pub fn fatal_at(&self, call_site: CallSite, args: fmt::Arguments<'_>) -> ! {
        self.emit(Severity::Fatal, &call_site, args);
        self.terminate()
    }

    fn emit(&self, level: Severity, call_site: &CallSite, args: fmt::Arguments<'_>) {
        let settings = self.settings();
        if !settings.is_enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        let header = header::render(&settings, level, call_site);
        let message = fmt::format(args);

        let mut line = String::with_capacity(header.len() + message.len() + 1);
        line.push_str(&header);
        line.push_str(&message);
        line.push('\n');

        self.write_line(line.as_bytes());
    }

    fn write_line(&self, line: &[u8]) {
        match self.sink.write_line(line) {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => {
                let failed = self.metrics.record_write_failure();
                // Report the first failure and every thousandth after it
                if failed == 0 || (failed + 1) % 1000 == 0 {
                    self.report(format_args!(
                        "[LOGGER ERROR] Sink '{}' failed ({} failed writes): {}",
                        self.sink.name(),
                        failed + 1,
                        e
                    ));
                }
            }
        }
    }

    fn terminate(&self) -> ! {
        if let Err(e) = self.sink.flush() {
            self.report(format_args!(
                "[LOGGER ERROR] Sink '{}' flush failed: {}",
                self.sink.name(),
                e
            ));
        }
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Write a diagnostic about this logger to stderr.
    ///
    /// Never panics. Skipped when the sink itself is stderr.
    fn report(&self, args: fmt::Arguments<'_>) {
        if self.sink.is_stderr() {
            return;
        }
        let _ = writeln!(io::stderr(), "{}", args);
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(Severity::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Severity::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Severity::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn notice(&self, message: impl fmt::Display) {
        self.log(Severity::Notice, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Severity::Warning, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Severity::Error, message);
    }

    /// Log at fatal severity and terminate the process.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.fatal_at(CallSite::caller(), format_args!("{}", message))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("sink", &self.sink.name())
            .field("settings", &self.settings())
            .finish()
    }
}

/// Builder for creating a Logger with custom configuration
///
/// # Example
///
/// ```
/// use leveled_logger::{Logger, MemorySink, Severity};
///
/// let logger = Logger::builder()
///     .sink(MemorySink::new())
///     .min_level(Severity::Info)
///     .colorize(false)
///     .build();
/// assert_eq!(logger.min_level(), Severity::Info);
/// ```
pub struct LoggerBuilder {
    settings: LoggerSettings,
    sink: Option<Box<dyn Sink>>,
}

impl LoggerBuilder {
    /// Create a new builder with default settings, writing to standard error
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: LoggerSettings::default(),
            sink: None,
        }
    }

    #[must_use]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use]
    pub fn min_level(mut self, level: Severity) -> Self {
        self.settings = self.settings.with_min_level(level);
        self
    }

    #[must_use]
    pub fn default_level(mut self, level: Severity) -> Self {
        self.settings = self.settings.with_default_level(level);
        self
    }

    #[must_use]
    pub fn colorize(mut self, colorize: bool) -> Self {
        self.settings = self.settings.with_colorize(colorize);
        self
    }

    #[must_use]
    pub fn header_override(mut self, header: impl Into<String>) -> Self {
        self.settings = self.settings.with_header_override(header);
        self
    }

    #[must_use]
    pub fn header_template(mut self, template: HeaderTemplate) -> Self {
        self.settings = self.settings.with_header_template(template);
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.settings = self.settings.with_timestamp_format(format);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(ConsoleSink::stderr()));
        Logger::from_boxed(sink, self.settings)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a new logger builder
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
