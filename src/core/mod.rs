//! Core logger types and traits

pub mod error;
pub mod header;
pub mod location;
pub mod logger;
pub mod metrics;
pub mod registry;
pub mod severity;
pub mod sink;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use header::{HeaderParam, HeaderParams, HeaderTemplate, DEFAULT_HEADER_TEMPLATE};
pub use location::CallSite;
pub use logger::{Logger, LoggerBuilder, LoggerSettings, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use registry::{LogHandle, LoggerOptions, Registry};
pub use severity::{Color, Paint, Severity};
pub use sink::{Sink, SinkKind};
pub use timestamp::TimestampFormat;
