//! Logger configuration
//!
//! Everything a [`Logger`](super::Logger) needs at construction time. The
//! struct is serde-friendly so it can be embedded in an application's own
//! configuration file.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory, relative to `base_dir`, holding relative log files
pub const LOG_DIR: &str = "logs";

/// Smallest usable box width: two border columns and two interior columns
pub const MIN_SCREEN_WIDTH: usize = 4;

/// # Example
///
/// ```
/// use boxed_logger::{LogLevel, LoggerConfig};
///
/// let config = LoggerConfig::new("sync")
///     .with_log_file("sync.log")
///     .with_level(LogLevel::Debug)
///     .with_screen_width(100)
///     .with_separator_char('=');
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Registry key of the logger
    pub logger_name: String,
    /// Main log file; relative names land under `{base_dir}/logs/`
    pub log_file: PathBuf,
    pub log_level: LogLevel,
    pub base_dir: PathBuf,
    /// Fixed column count of every box
    pub screen_width: usize,
    /// Fill character for separators and border rules
    pub separator_char: char,
    /// Suppress ghost lines (e.g. when stdout is not a terminal)
    pub ignore_ghost: bool,
    pub debug: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            logger_name: "main".to_string(),
            log_file: PathBuf::from("main.log"),
            log_level: LogLevel::Info,
            base_dir: PathBuf::from("."),
            screen_width: 100,
            separator_char: '=',
            ignore_ghost: false,
            debug: false,
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new(logger_name: impl Into<String>) -> Self {
        Self {
            logger_name: logger_name.into(),
            ..Self::default()
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = log_file.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_screen_width(mut self, width: usize) -> Self {
        self.screen_width = width;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_separator_char(mut self, fill: char) -> Self {
        self.separator_char = fill;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_ignore_ghost(mut self, ignore: bool) -> Self {
        self.ignore_ghost = ignore;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// `{base_dir}/logs`
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join(LOG_DIR)
    }

    /// Path of a keyed log file: `{base_dir}/logs/{key}.log`
    pub fn keyed_log(&self, key: &str) -> PathBuf {
        self.log_dir().join(format!("{}.log", key))
    }

    /// Resolve the main log path.
    ///
    /// A path whose parent directory already exists is used as given;
    /// anything else is placed under the log directory.
    pub fn main_log(&self) -> PathBuf {
        resolve_log_path(&self.log_file, &self.log_dir())
    }

    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] for an empty name, an
    /// empty log file, or a screen narrower than [`MIN_SCREEN_WIDTH`].
    pub fn validate(&self) -> Result<()> {
        if self.logger_name.trim().is_empty() {
            return Err(LoggerError::config("LoggerConfig", "logger_name must not be empty"));
        }
        if self.log_file.as_os_str().is_empty() {
            return Err(LoggerError::config("LoggerConfig", "log_file must not be empty"));
        }
        if self.screen_width < MIN_SCREEN_WIDTH {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!(
                    "screen_width must be at least {}, got {}",
                    MIN_SCREEN_WIDTH, self.screen_width
                ),
            ));
        }
        Ok(())
    }
}

fn resolve_log_path(log_file: &Path, log_dir: &Path) -> PathBuf {
    match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && parent.exists() => log_file.to_path_buf(),
        _ => log_dir.join(log_file),
    }
}
