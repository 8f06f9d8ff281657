//! Integration tests for the logger system
//!
//! These tests verify:
//! - Severity filtering per logger
//! - Exact line layout (header, body, newline)
//! - Header overrides and templates
//! - Independent standard and error loggers
//! - File sinks

use leveled_logger::prelude::*;
use leveled_logger::{error, info, notice, warn};
use std::fs;
use tempfile::TempDir;

fn plain_registry(min_level: Severity) -> (Registry, MemorySink, MemorySink) {
    let out = MemorySink::new();
    let err = MemorySink::new();
    let registry = Registry::with_sinks(
        Some(
            LoggerOptions::new()
                .with_colorize(false)
                .with_min_level(min_level),
        ),
        out.clone(),
        err.clone(),
    );
    (registry, out, err)
}

/// Split a default-template line into (label, date, caller, body).
fn parse_line(line: &str) -> (&str, &str, &str, &str) {
    let rest = line.strip_prefix('[').expect("line starts with '['");
    let (label, rest) = rest.split_once("] ").expect("label terminator");
    let (date, rest) = rest.split_once(" (").expect("date terminator");
    let (caller, body) = rest.split_once("): ").expect("caller terminator");
    (label, date, caller, body)
}

#[test]
fn test_info_threshold_drops_debug() {
    let (registry, out, _err) = plain_registry(Severity::Info);
    let log = registry.stdout();

    log.debug("x");
    assert!(out.is_empty(), "debug below Info must write nothing");

    log.info("y");
    let contents = out.contents();
    assert!(contents.ends_with("y\n"));
    assert_eq!(contents.lines().count(), 1);
    let (label, _, _, _) = parse_line(contents.trim_end_matches('\n'));
    assert_eq!(label, "  info");
}

#[test]
fn test_formatted_body_is_exact() {
    let (registry, _out, err) = plain_registry(Severity::Trace);
    let log = registry.stderr();

    error!(log, "fail {}", 3);

    let contents = err.contents();
    assert_eq!(err.write_count(), 1);
    assert_eq!(contents.matches('\n').count(), 1);
    let (label, _, _, body) = parse_line(contents.trim_end_matches('\n'));
    assert_eq!(label, " error");
    assert_eq!(body, "fail 3");
}

#[test]
fn test_line_layout() {
    let (registry, out, _err) = plain_registry(Severity::Trace);
    let log = registry.stdout();

    let line_no = line!() + 1;
    warn!(log, "disk at {}%", 91);

    let contents = out.contents();
    let (label, date, caller, body) = parse_line(contents.trim_end_matches('\n'));
    assert_eq!(label, "  warn");
    assert_eq!(caller, format!("integration_tests.rs:{}", line_no));
    assert_eq!(body, "disk at 91%");

    // YYYY-MM-DD HH:MM:SS
    assert_eq!(date.len(), 19);
    assert!(chrono::NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").is_ok());
}

#[test]
fn test_message_newlines_are_preserved() {
    let (registry, out, _err) = plain_registry(Severity::Trace);
    registry.stdout().info("first\nsecond");
    assert!(out.contents().ends_with("first\nsecond\n"));
    assert_eq!(out.write_count(), 1);
}

#[test]
fn test_independent_loggers() {
    let (registry, out, err) = plain_registry(Severity::Trace);
    let std_log = registry.stdout();
    let err_log = registry.stderr();

    err_log.set_min_level(Severity::Fatal);

    std_log.notice("std notice");
    err_log.notice("err notice");

    assert!(out.contents().ends_with("std notice\n"));
    assert!(err.is_empty());
    assert_eq!(std_log.min_level(), Severity::Trace);
}

#[test]
fn test_header_override_lifecycle() {
    let (registry, out, _err) = plain_registry(Severity::Trace);
    let log = registry.stdout();

    log.set_header_override("APP | ");
    log.set_colorize(true);
    notice!(log, "one");
    log.error("two");
    assert_eq!(out.contents(), "APP | one\nAPP | two\n");

    log.set_header_override("");
    out.clear();
    log.info("three");
    assert!(out.contents().starts_with("[  info] "));
}

#[test]
fn test_custom_template_and_timestamp() {
    let (registry, out, _err) = plain_registry(Severity::Trace);
    let log = registry.stdout();

    log.set_header_template("{date}|{level}|{caller}> ").unwrap();
    log.set_timestamp_format(TimestampFormat::Unix);

    let line_no = line!() + 1;
    info!(log, "templated");

    let contents = out.contents();
    let mut parts = contents.trim_end().splitn(3, '|');
    let date = parts.next().unwrap();
    assert!(date.parse::<i64>().is_ok(), "unix timestamp, got {}", date);
    assert_eq!(parts.next(), Some("  info"));
    assert_eq!(
        parts.next(),
        Some(format!("integration_tests.rs:{}> templated", line_no).as_str())
    );
}

#[test]
fn test_handles_stay_bound_after_new_registry() {
    let (first, first_out, _) = plain_registry(Severity::Trace);
    let held = first.stdout();

    let (second, second_out, _) = plain_registry(Severity::Error);
    drop(first);

    held.info("old registry");
    second.stdout().info("filtered by new registry");

    assert!(first_out.contents().ends_with("old registry\n"));
    assert!(second_out.is_empty());
}

#[test]
fn test_file_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");

    let logger = Logger::builder()
        .sink(WriterSink::file(&log_file).expect("Failed to open log file"))
        .colorize(false)
        .build();

    for i in 0..5 {
        info!(logger, "Message {}", i);
    }
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[4].ends_with("Message 4"));
}

#[cfg(feature = "console")]
#[test]
fn test_colorized_output() {
    colored::control::set_override(true);

    let out = MemorySink::new();
    let registry = Registry::with_sinks(None, out.clone(), MemorySink::new());
    registry.stdout().info("colored");

    let contents = out.contents();
    assert!(contents.contains(&Severity::Info.colored_label()));
    assert!(contents.contains("\x1b[36m"), "caller should be cyan: {:?}", contents);
    assert!(contents.ends_with("colored\n"));
}

#[test]
fn test_metrics() {
    let (registry, _out, _err) = plain_registry(Severity::Warning);
    let log = registry.stdout();

    log.info("filtered");
    log.warn("written");
    log.error("written");

    assert_eq!(log.metrics().lines_filtered(), 1);
    assert_eq!(log.metrics().lines_written(), 2);
    assert_eq!(log.metrics().write_failures(), 0);
}
