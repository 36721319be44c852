//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. The call site is
//! captured with `file!()`, `line!()` and `module_path!()`.
//!
//! # Examples
//!
//! ```
//! use boxed_logger::prelude::*;
//! use boxed_logger::info;
//!
//! # let dir = tempfile::tempdir().unwrap();
//! let mut logger = Logger::new(LoggerConfig::new("app").with_base_dir(dir.path())).unwrap();
//!
//! // Basic logging
//! info!(logger, "Sync started");
//!
//! // With format arguments
//! let copied = 12;
//! info!(logger, "Copied {} files", copied);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use boxed_logger::prelude::*;
/// # let dir = tempfile::tempdir().unwrap();
/// # let mut logger = Logger::new(LoggerConfig::new("app").with_base_dir(dir.path())).unwrap();
/// use boxed_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at(
            $level,
            format!($($arg)+),
            $crate::CallerLocation::new(file!(), line!(), module_path!()),
        )
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use boxed_logger::prelude::*;
/// # let dir = tempfile::tempdir().unwrap();
/// # let mut logger = Logger::new(LoggerConfig::new("app").with_base_dir(dir.path())).unwrap();
/// use boxed_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a dry-run message: an action that would have happened.
///
/// # Examples
///
/// ```
/// # use boxed_logger::prelude::*;
/// # let dir = tempfile::tempdir().unwrap();
/// # let mut logger = Logger::new(LoggerConfig::new("app").with_base_dir(dir.path())).unwrap();
/// use boxed_logger::dryrun;
/// dryrun!(logger, "Would delete {}", "poster.jpg");
/// ```
#[macro_export]
macro_rules! dryrun {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Dryrun, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use boxed_logger::prelude::*;
/// # let dir = tempfile::tempdir().unwrap();
/// # let mut logger = Logger::new(LoggerConfig::new("app").with_base_dir(dir.path())).unwrap();
/// use boxed_logger::error;
/// error!(logger, "Failed to reach server");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::appenders::{ConsoleAppender, RotatingFileAppender, SharedBuffer};
    use crate::core::{LogLevel, Logger, LoggerConfig};
    use tempfile::TempDir;

    fn logger() -> (Logger, SharedBuffer, TempDir) {
        let dir = TempDir::new().unwrap();
        let buffer = SharedBuffer::new();
        let config = LoggerConfig::new("macros")
            .with_base_dir(dir.path())
            .with_level(LogLevel::Debug)
            .with_screen_width(40);
        let logger = Logger::builder(config)
            .console(ConsoleAppender::with_writer(buffer.clone()))
            .build()
            .unwrap();
        (logger, buffer, dir)
    }

    #[test]
    fn test_log_macro() {
        let (mut logger, buffer, _dir) = logger();
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
        assert!(buffer.contents().contains("Formatted: 42"));
    }

    #[test]
    fn test_level_macros() {
        let (mut logger, buffer, _dir) = logger();
        debug!(logger, "d {}", 1);
        info!(logger, "i {}", 2);
        dryrun!(logger, "r {}", 3);
        warning!(logger, "w {}", 4);
        error!(logger, "e {}", 5);
        critical!(logger, "c {}", 6);
        assert_eq!(buffer.lines().len(), 6);
    }

    #[test]
    fn test_macro_records_call_site() {
        let (mut logger, _, dir) = logger();
        let path = dir.path().join("macros.log");
        logger.attach_sink("file", RotatingFileAppender::new(&path), LogLevel::Debug);

        info!(logger, "where am I");
        logger.flush().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[macros.rs:"), "{}", contents);
        assert!(contents.contains("[INFO]"));
    }
}
