//! Logging macros for ergonomic log message formatting.
//!
//! These macros take a logger (a [`Logger`](crate::Logger) or a
//! [`LogHandle`](crate::LogHandle)) followed by `format!`-style arguments, and
//! record the file and line where they are written.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::info;
//!
//! let logger = Logger::builder().sink(MemorySink::new()).build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit severity.
///
/// A [`Severity::Fatal`](crate::Severity::Fatal) message terminates the process.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use leveled_logger::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at(
            $level,
            $crate::CallSite::new(file!(), line!()),
            format_args!($($arg)+),
        )
    };
}

/// Log a message at the logger's default severity.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use leveled_logger::log_default;
/// log_default!(logger, "{} jobs queued", 3);
/// ```
#[macro_export]
macro_rules! log_default {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_default_at(
            $crate::CallSite::new(file!(), line!()),
            format_args!($($arg)+),
        )
    };
}

/// Log a trace-level message.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).min_level(Severity::Trace).build();
/// use leveled_logger::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Notice, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use leveled_logger::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a fatal-level message and exit the process.
///
/// Expands to an expression of type `!`.
///
/// ```no_run
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::builder().sink(MemorySink::new()).build();
/// use leveled_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_at(
            $crate::CallSite::new(file!(), line!()),
            format_args!($($arg)+),
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Logger, Severity};
    use crate::sinks::MemorySink;

    fn capture() -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .sink(sink.clone())
            .min_level(Severity::Trace)
            .colorize(false)
            .build();
        (logger, sink)
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = capture();
        log!(logger, Severity::Info, "Test message");
        log!(logger, Severity::Info, "Formatted: {}", 42);
        let lines = sink.lines();
        assert!(lines[0].ends_with("): Test message"));
        assert!(lines[1].ends_with("): Formatted: 42"));
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = capture();
        trace!(logger, "t {}", 1);
        debug!(logger, "d {}", 2);
        info!(logger, "i {}", 3);
        notice!(logger, "n {}", 4);
        warn!(logger, "w {}", 5);
        error!(logger, "e {}", 6);

        let labels: Vec<String> = sink
            .lines()
            .iter()
            .map(|line| line[1..7].to_string())
            .collect();
        assert_eq!(
            labels,
            vec![" trace", " debug", "  info", "notice", "  warn", " error"]
        );
    }

    #[test]
    fn test_macro_records_call_site() {
        let (logger, sink) = capture();
        let line = line!() + 1;
        info!(logger, "where");
        assert!(sink
            .contents()
            .contains(&format!("(macros.rs:{}): where", line)));
    }

    #[test]
    fn test_log_default_macro() {
        let (logger, sink) = capture();
        logger.set_default_level(Severity::Warning);
        log_default!(logger, "{} left", 2);
        assert!(sink.contents().starts_with("[  warn] "));
        assert!(sink.contents().ends_with("2 left\n"));
    }

    #[test]
    fn test_macros_accept_handles() {
        let out = MemorySink::new();
        let registry = crate::Registry::with_sinks(
            Some(crate::LoggerOptions::new().with_colorize(false)),
            out.clone(),
            MemorySink::new(),
        );
        let handle = registry.stdout();
        info!(handle, "via handle");
        assert!(out.contents().ends_with("via handle\n"));
    }
}
