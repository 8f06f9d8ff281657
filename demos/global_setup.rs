//! Process-wide registry example
//!
//! Run with: cargo run --example global_setup

use leveled_logger::{error, global, info, LoggerOptions, Severity};

fn connect(attempt: u32) -> bool {
    let log = global::stderr();
    if attempt < 3 {
        error!(log, "connection attempt {} failed", attempt);
        false
    } else {
        true
    }
}

fn main() {
    global::setup(Some(LoggerOptions::new().with_min_level(Severity::Info)));

    let out = global::stdout();
    info!(out, "starting");

    let mut attempt = 1;
    while !connect(attempt) {
        attempt += 1;
    }
    info!(out, "connected after {} attempts", attempt);
}
