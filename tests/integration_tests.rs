//! Integration tests for boxed_logger
//!
//! These tests verify:
//! - File layout of headers, bodies and continuation lines
//! - Main and keyed file sinks
//! - Size-based rotation through the logger
//! - Secret redaction on every sink
//! - Ghost lines interleaved with persisted lines

use boxed_logger::appenders::{ConsoleAppender, RotatingFileAppender, RotationPolicy, SharedBuffer};
use boxed_logger::core::config::LoggerConfig;
use boxed_logger::core::log_level::LogLevel;
use boxed_logger::core::logger::{Logger, SeparatorOptions};
use std::fs;
use tempfile::TempDir;

/// Column where the message body starts in a file line with the default
/// timestamp format: `[` + 23 + `] ` + 27 + ` ` + 10 + ` `
const FILE_HEADER_WIDTH: usize = 65;

fn build(dir: &TempDir, width: usize) -> (Logger, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let config = LoggerConfig::new("it")
        .with_base_dir(dir.path())
        .with_screen_width(width)
        .with_level(LogLevel::Debug);
    let logger = Logger::builder(config)
        .console(ConsoleAppender::with_writer(buffer.clone()))
        .build()
        .expect("Failed to build logger");
    (logger, buffer)
}

fn read_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read log file")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_main_log_line_layout() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (mut logger, _) = build(&temp_dir, 20);
    logger.add_main().expect("Failed to attach main log");

    logger.warning("disk low");
    logger.flush().expect("Failed to flush");

    let lines = read_lines(logger.main_log());
    assert_eq!(lines.len(), 1);
    let line = &lines[0];

    assert!(line.starts_with('['));
    assert_eq!(&line[24..26], "] ");
    assert!(line[26..].starts_with("[integration_tests.rs:"));
    assert_eq!(&line[54..64], "[WARNING] ");
    assert_eq!(&line[FILE_HEADER_WIDTH..], "| disk low           |");
}

#[test]
fn test_multiline_message_in_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (mut logger, buffer) = build(&temp_dir, 20);
    logger.add_main().expect("Failed to attach main log");

    logger.info("first\nsecond\nthird");
    logger.info("after");
    logger.flush().expect("Failed to flush");

    let lines = read_lines(logger.main_log());
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with("| first              |"));
    assert_eq!(lines[1], format!("{}| second", " ".repeat(FILE_HEADER_WIDTH)));
    assert_eq!(lines[2], format!("{}| third", " ".repeat(FILE_HEADER_WIDTH)));
    // Bordered layout is back for the next record
    assert!(lines[3].ends_with("| after              |"));
    assert!(lines[3].contains("[INFO]"));

    assert_eq!(buffer.lines().len(), 4);
}

#[test]
fn test_level_change_applies_to_all_sinks() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (mut logger, buffer) = build(&temp_dir, 30);
    logger.add_main().expect("Failed to attach main log");
    logger.set_level(LogLevel::Info);
    logger.debug("hidden");
    logger.set_level(LogLevel::Debug);

    logger.debug("detail");
    logger.flush().expect("Failed to flush");

    assert!(buffer.contents().contains("detail"));
    assert!(!buffer.contents().contains("hidden"));
    let file = fs::read_to_string(logger.main_log()).unwrap();
    assert!(file.contains("[DEBUG]"));
    assert!(!file.contains("hidden"));
}

#[test]
fn test_remove_main_stops_file_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (mut logger, _) = build(&temp_dir, 30);
    logger.add_main().expect("Failed to attach main log");
    logger.info("kept");
    assert!(logger.remove_main());
    logger.info("dropped");

    let contents = fs::read_to_string(logger.main_log()).unwrap();
    assert!(contents.contains("kept"));
    assert!(!contents.contains("dropped"));
    assert!(!logger.remove_main());
}

#[test]
fn test_keyed_logs() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (mut logger, _) = build(&temp_dir, 30);

    logger.add_keyed("movies").expect("Failed to attach keyed log");
    logger.info("movie one");
    assert!(logger.remove_keyed("movies"));
    logger.info("between");
    logger.add_keyed("movies").expect("Failed to attach keyed log");
    logger.info("movie two");
    logger.flush().expect("Failed to flush");

    let path = temp_dir.path().join("logs").join("movies.log");
    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("movie one"));
    assert!(contents.contains("movie two"));
    assert!(!contents.contains("between"));
    assert!(!logger.remove_keyed("shows"));
}

#[test]
fn test_separator_in_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (mut logger, _) = build(&temp_dir, 20);
    logger.add_main().expect("Failed to attach main log");

    let emitted = logger.separator(Some("Start"), SeparatorOptions::new());
    logger.flush().expect("Failed to flush");

    let lines = read_lines(logger.main_log());
    assert_eq!(lines.len(), emitted.len());
    for (line, banner) in lines.iter().zip(&emitted) {
        assert_eq!(&line[FILE_HEADER_WIDTH..], banner.as_str());
    }
    assert_eq!(emitted[0], format!("|{}|", "=".repeat(20)));
}

#[test]
fn test_redaction_reaches_every_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (mut logger, buffer) = build(&temp_dir, 40);
    logger.add_main().expect("Failed to attach main log");
    logger.add_keyed("api").expect("Failed to attach keyed log");

    logger.secret("sk-12345");
    logger.info("token=sk-12345 ok");
    logger.error("retrying\nwith sk-12345 again");
    logger.flush().expect("Failed to flush");

    let main = fs::read_to_string(logger.main_log()).unwrap();
    let keyed = fs::read_to_string(temp_dir.path().join("logs").join("api.log")).unwrap();
    for output in [buffer.contents(), main, keyed] {
        assert!(!output.contains("sk-12345"));
        assert!(output.contains("token=(redacted) ok"));
        assert!(output.contains("with (redacted) again"));
    }
}

#[test]
fn test_connection_pool_details_redacted() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (mut logger, buffer) = build(&temp_dir, 40);

    logger.error("HTTPSConnectionPool(host='plex.local', port=32400): Max retries");
    assert!(buffer
        .contents()
        .contains("HTTPSConnectionPool(redacted): Max retries"));
    assert!(!buffer.contents().contains("plex.local"));
}

#[test]
fn test_ghost_never_reaches_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (mut logger, buffer) = build(&temp_dir, 30);
    logger.add_main().expect("Failed to attach main log");

    logger.ghost("Scanning 1/3");
    logger.ghost("Scanning 2/3");
    logger.info("scan done");
    logger.flush().expect("Failed to flush");

    let console = buffer.contents();
    assert!(console.starts_with("| Scanning 1/3\r| Scanning 2/3\r"));
    assert!(console.contains(&format!("{}\r| scan done", " ".repeat(14))));

    let file = fs::read_to_string(logger.main_log()).unwrap();
    assert!(!file.contains("Scanning"));
    assert_eq!(file.lines().count(), 1);
}

#[test]
fn test_rotation_through_custom_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (mut logger, _) = build(&temp_dir, 20);
    let path = temp_dir.path().join("small.log");
    let policy = RotationPolicy::new().with_max_size(200).with_max_backups(2);
    logger.attach_sink(
        "small",
        RotatingFileAppender::with_policy(&path, policy),
        LogLevel::Debug,
    );

    for i in 0..20 {
        logger.info(format!("record {}", i));
    }
    logger.flush().expect("Failed to flush");

    assert!(path.exists());
    assert!(temp_dir.path().join("small.log.1").exists());
    assert!(temp_dir.path().join("small.log.2").exists());
    assert!(!temp_dir.path().join("small.log.3").exists());
    let newest = fs::read_to_string(&path).unwrap();
    assert!(newest.contains("record 19"));
}

#[test]
fn test_saved_errors_summary() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (mut logger, _) = build(&temp_dir, 30);
    logger.set_save_errors(true);

    logger.error("boom");
    logger.clear_errors();
    logger.error("bang");
    logger.critical("fatal");
    logger.info("fine");

    assert_eq!(logger.saved_errors(), ["bang".to_string(), "fatal".to_string()]);
}

#[test]
fn test_center_scenario() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (logger, _) = build(&temp_dir, 80);
    let centered = logger.center("Done", ' ', true, false);
    assert_eq!(centered, format!("{}Done{}", " ".repeat(37), " ".repeat(37)));
}
