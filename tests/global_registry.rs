//! Tests for the process-wide registry
//!
//! All assertions live in one test because the registry is shared by every
//! test in this binary.

use leveled_logger::prelude::*;
use leveled_logger::{global, info};

#[test]
fn test_global_setup_and_resetup() {
    let first = global::setup(Some(LoggerOptions::new().with_min_level(Severity::Info)));
    assert!(global::is_initialized());
    assert!(global::stdout().same_logger(&first.stdout()));
    assert!(global::stderr().same_logger(&first.stderr()));
    assert_eq!(global::stdout().min_level(), Severity::Info);

    let held = global::stdout();

    // Re-setup replaces the registry; handles issued earlier keep their logger.
    let out = MemorySink::new();
    global::install(Registry::with_sinks(
        Some(LoggerOptions::new().with_colorize(false).with_min_level(Severity::Trace)),
        out.clone(),
        MemorySink::new(),
    ));

    assert!(!held.same_logger(&global::stdout()));
    assert_eq!(held.min_level(), Severity::Info);
    assert_eq!(held.sink_name(), "stdout");

    let current = global::try_stdout().expect("registry installed");
    info!(current, "through the global registry");
    assert!(out.contents().ends_with("through the global registry\n"));

    assert!(global::try_stderr().is_ok());
    assert!(global::registry().handle_named("stdout").same_logger(&current));
}
