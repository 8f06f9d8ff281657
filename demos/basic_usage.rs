//! Basic logger usage example
//!
//! Demonstrates the standard and error loggers, severity filtering and
//! header overrides.
//!
//! Run with: cargo run --example basic_usage

use leveled_logger::prelude::*;
use leveled_logger::{debug, error, info, notice, trace, warn};

fn main() {
    println!("=== Leveled Logger - Basic Usage Example ===\n");

    let registry = Registry::setup(Some(LoggerOptions::new().with_min_level(Severity::Trace)));
    let out = registry.stdout();
    let err = registry.stderr();

    println!("1. Logging at different levels:");
    trace!(out, "This is a trace message");
    debug!(out, "This is a debug message");
    info!(out, "This is an info message");
    notice!(out, "This is a notice message");
    warn!(out, "This is a warning message");
    error!(err, "This is an error message on stderr");

    println!("\n2. Logging with different minimum levels:");
    out.set_min_level(Severity::Info);
    println!("   Minimum level set to INFO - trace and debug won't show:");
    trace!(out, "Trace message (hidden)");
    debug!(out, "Debug message (hidden)");
    info!(out, "Info message (visible)");

    println!("\n3. Without colors and with a fixed header:");
    out.set_colorize(false);
    info!(out, "plain header");
    out.set_header_override("basic_usage> ");
    info!(out, "override header");
    out.clear_header_override();

    println!("\n4. Default level:");
    out.set_default_level(Severity::Notice);
    out.log_default("logged at the default level");

    println!("\n=== Example completed successfully! ===");
}
