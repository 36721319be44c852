//! Basic logger usage example
//!
//! Demonstrates boxed console output at different log levels.
//!
//! Run with: cargo run --example basic_usage

use boxed_logger::prelude::*;
use boxed_logger::{dryrun, info};

fn main() -> Result<()> {
    println!("=== Boxed Logger - Basic Usage Example ===\n");

    let base_dir = std::env::temp_dir().join("boxed_logger_basic");
    let config = LoggerConfig::new("basic")
        .with_base_dir(&base_dir)
        .with_screen_width(60)
        .with_level(LogLevel::Debug);
    let mut logger = Logger::new(config)?;

    println!("1. Logging at different levels (boxes go to stderr):");
    logger.separator(Some("Levels"), SeparatorOptions::new());
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.dryrun("This is a dry-run message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");
    logger.critical("This is a critical message");

    println!("\n2. Centered text and multi-line messages:");
    logger.info_center("Centered");
    logger.info("first line\nsecond line\nthird line");
    logger.separator(
        Some("Left aligned"),
        SeparatorOptions::new().space(false).border(false).left(true),
    );

    println!("\n3. Macros with format arguments:");
    let files = 12;
    info!(logger, "Copied {} files", files);
    dryrun!(logger, "Would delete {} stale posters", 3);

    println!("\n4. Minimum level set to WARNING - debug and info won't show:");
    logger.set_level(LogLevel::Warning);
    logger.debug("Debug message (hidden)");
    logger.info("Info message (hidden)");
    logger.warning("Warning message (visible)");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
