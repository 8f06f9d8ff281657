//! # Leveled Logger
//!
//! A small leveled logger that writes templated, optionally colorized lines to
//! standard output and standard error.
//!
//! ```text
//! [  info] 2025-01-08 10:30:45 (main.rs:12): server started
//! ```
//!
//! ## Features
//!
//! - **Severity filtering**: `trace` through `fatal`, with a per-logger minimum
//! - **Templated headers**: level, local time and caller location, or a fixed override
//! - **Two sinks**: a [`Registry`] hands out independent stdout and stderr handles
//! - **Thread safe**: lines are written whole; settings changes are atomic snapshots
//!
//! ## Example
//!
//! ```no_run
//! use leveled_logger::prelude::*;
//! use leveled_logger::{error, info};
//!
//! let registry = Registry::setup(Some(LoggerOptions::new().with_min_level(Severity::Info)));
//! let out = registry.stdout();
//! let err = registry.stderr();
//!
//! info!(out, "processing {} items", 100);
//! error!(err, "fail {}", 3);
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallSite, HeaderTemplate, LogHandle, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
        LoggerOptions, LoggerSettings, Registry, Result, Severity, Sink, SinkKind,
        TimestampFormat, FATAL_EXIT_CODE,
    };
    pub use crate::sinks::{ConsoleSink, MemorySink, WriterSink};
}

pub use crate::core::{
    CallSite, Color, HeaderParam, HeaderParams, HeaderTemplate, LogHandle, Logger, LoggerBuilder,
    LoggerError, LoggerMetrics, LoggerOptions, LoggerSettings, Paint, Registry, Result, Severity,
    Sink, SinkKind, TimestampFormat, DEFAULT_HEADER_TEMPLATE, FATAL_EXIT_CODE,
};
pub use sinks::{ConsoleSink, MemorySink, WriterSink};
