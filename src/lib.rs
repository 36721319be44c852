//! # Boxed Logger
//!
//! A console and file logger that draws every message inside a fixed-width
//! box, for long-running batch tools that want readable, aligned output.
//!
//! ## Features
//!
//! - **Boxed Lines**: `| message |` bodies, centered banners and separators
//! - **Rotating Files**: a main log plus keyed side logs, rotated by size
//! - **Redaction**: registered secrets never reach a sink verbatim
//! - **Ghost Lines**: transient progress text that later lines overwrite
//! - **Error Summary**: optional capture of ERROR and CRITICAL messages
//!
//! ## Example
//!
//! ```
//! use boxed_logger::prelude::*;
//!
//! # let dir = tempfile::tempdir().unwrap();
//! let config = LoggerConfig::new("sync")
//!     .with_base_dir(dir.path())
//!     .with_screen_width(60);
//! let mut logger = Logger::new(config)?;
//! logger.add_main()?;
//!
//! logger.separator(Some("Library Sync"), SeparatorOptions::new());
//! logger.info("Scanning 3 libraries");
//! logger.flush()?;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, RotatingFileAppender, RotationPolicy};
    pub use crate::core::{
        Appender, CallerLocation, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerRegistry, Result, SeparatorOptions, SharedLogger, TimestampFormat,
    };
}

pub use crate::appenders::{ConsoleAppender, RotatingFileAppender, RotationPolicy};
pub use crate::core::{
    Appender, CallerLocation, LineFormatter, LineTemplate, LogEntry, LogLevel, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerRegistry, Redactor, RenderStyle, Result,
    SeparatorOptions, SharedLogger, TimestampFormat,
};
