//! File logging example
//!
//! Demonstrates the main log, keyed logs, secret redaction and the error
//! summary.
//!
//! Run with: cargo run --example file_logging

use boxed_logger::prelude::*;
use std::fs;

fn main() -> Result<()> {
    println!("=== Boxed Logger - File Logging Example ===\n");

    let base_dir = std::env::temp_dir().join("boxed_logger_files");
    let config = LoggerConfig::new("files")
        .with_base_dir(&base_dir)
        .with_log_file("sync.log")
        .with_screen_width(70);
    let mut logger = Logger::new(config)?;
    logger.add_main()?;
    logger.set_save_errors(true);

    println!("1. Main log at {}", logger.main_log().display());
    logger.separator(Some("Sync Run"), SeparatorOptions::new());
    logger.info("Connecting to server");

    println!("2. Secrets are redacted everywhere:");
    logger.secret("hunter2-api-key");
    logger.info("Using token hunter2-api-key");

    println!("3. Keyed logs for a single library:");
    logger.add_keyed("movies")?;
    logger.info("Movies: 1203 items scanned");
    logger.error("Movies: poster upload failed\nHTTPConnectionPool(host='10.0.0.2', port=8096): Read timed out");
    logger.remove_keyed("movies");
    logger.info("Back to the main log only");

    println!("4. Error summary:");
    let summary = logger.saved_errors().to_vec();
    logger.separator(Some("Errors"), SeparatorOptions::new().level(LogLevel::Warning));
    for error in &summary {
        logger.warning(error.lines().next().unwrap_or_default());
    }
    logger.flush()?;

    println!("\nContents of {}:", logger.main_log().display());
    println!("{}", fs::read_to_string(logger.main_log())?);

    println!("=== Example completed successfully! ===");

    Ok(())
}
