//! Error types for the logger system
//!
//! Emit and configuration operations never return these; they surface only
//! from parsing (templates, severities, sink selectors), sink I/O and the
//! fallible accessors of the global registry.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Header template failed to parse
    #[error("Invalid header template '{template}' at byte {position}: {message}")]
    Template {
        template: String,
        position: usize,
        message: String,
    },

    /// Sink selector that names neither standard output nor standard error
    #[error("Unknown sink '{0}': expected \"stdout\" or \"stderr\"")]
    UnknownSink(String),

    /// Severity name that could not be parsed
    #[error("Invalid severity: '{0}'")]
    InvalidSeverity(String),

    /// Global registry used before `setup()`
    #[error("The logger is not initialized. Please call setup().")]
    NotInitialized,

    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    IoOperation {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create a template error pointing at a byte offset of the template
    pub fn template(
        template: impl Into<String>,
        position: usize,
        message: impl Into<String>,
    ) -> Self {
        LoggerError::Template {
            template: template.into(),
            position,
            message: message.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            source,
        }
    }

    pub fn unknown_sink(name: impl Into<String>) -> Self {
        LoggerError::UnknownSink(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::template("[{lvl}]", 1, "unknown parameter 'lvl'");
        assert!(matches!(err, LoggerError::Template { position: 1, .. }));

        let err = LoggerError::unknown_sink("syslog");
        assert!(matches!(err, LoggerError::UnknownSink(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::template("[{lvl}]", 1, "unknown parameter 'lvl'");
        assert_eq!(
            err.to_string(),
            "Invalid header template '[{lvl}]' at byte 1: unknown parameter 'lvl'"
        );

        let err = LoggerError::unknown_sink("syslog");
        assert_eq!(
            err.to_string(),
            "Unknown sink 'syslog': expected \"stdout\" or \"stderr\""
        );

        assert_eq!(
            LoggerError::NotInitialized.to_string(),
            "The logger is not initialized. Please call setup()."
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::io_operation("writing to stdout", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing to stdout"));
        assert!(err.to_string().contains("pipe closed"));
    }
}
