//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod formatter;
pub mod ghost;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod redactor;
pub mod registry;
pub mod sink_manager;
pub mod timestamp;

pub use appender::Appender;
pub use config::{LoggerConfig, LOG_DIR, MIN_SCREEN_WIDTH};
pub use error::{LoggerError, Result};
pub use formatter::{LineFormatter, LineTemplate, RenderStyle};
pub use ghost::{ascii_fallback, GhostLine};
pub use log_entry::{CallerLocation, LogEntry};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, SeparatorOptions};
pub use redactor::{Redactor, REDACTED};
pub use registry::{LoggerRegistry, SharedLogger};
pub use sink_manager::{SinkManager, CONSOLE_KEY, MAIN_KEY};
pub use timestamp::TimestampFormat;
