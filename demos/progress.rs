//! Ghost line example
//!
//! Demonstrates transient progress output that later lines overwrite.
//!
//! Run with: cargo run --example progress

use boxed_logger::prelude::*;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    let base_dir = std::env::temp_dir().join("boxed_logger_progress");
    let config = LoggerConfig::new("progress")
        .with_base_dir(&base_dir)
        .with_screen_width(60);
    let mut logger = Logger::new(config)?;

    logger.separator(Some("Scanning"), SeparatorOptions::new());
    for library in ["Movies", "Shows", "Music"] {
        for i in 1..=20 {
            logger.ghost(format!("{}: {}/20", library, i));
            thread::sleep(Duration::from_millis(25));
        }
        // The ghost is cleared before this line is written
        logger.info(format!("{} scanned", library));
    }

    logger.ghost("Finishing up");
    thread::sleep(Duration::from_millis(200));
    logger.exorcise();

    let title = logger.insert_space("Done", 10);
    logger.info(title);
    Ok(())
}
