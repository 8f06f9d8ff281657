//! File logging example
//!
//! Writes lines to a file through a `WriterSink`, with a custom header
//! template and timestamp format.
//!
//! Run with: cargo run --example file_logging

use leveled_logger::prelude::*;
use leveled_logger::{info, warn};

fn main() -> Result<()> {
    let path = std::env::temp_dir().join("leveled_logger_demo.log");
    println!("Writing to {}", path.display());

    let logger = Logger::builder()
        .sink(WriterSink::file(&path)?)
        .colorize(false)
        .timestamp_format(TimestampFormat::Rfc3339)
        .build();
    logger.set_header_template("{date} {level} {caller} | ")?;

    for i in 0..5 {
        info!(logger, "Processing batch {}", i);
    }
    warn!(logger, "Batch 5 skipped");
    logger.flush()?;

    let content = std::fs::read_to_string(&path)?;
    print!("{}", content);
    println!(
        "{} lines written, {} filtered",
        logger.metrics().lines_written(),
        logger.metrics().lines_filtered()
    );

    Ok(())
}
