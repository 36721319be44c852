//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::panic::Location;
use std::path::Path;

/// Where a record was emitted from.
///
/// Supplied by the call site: `#[track_caller]` methods capture it
/// automatically and the logging macros pass `file!()`/`line!()`/`module_path!()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerLocation {
    pub file: String,
    pub line: u32,
    pub function: String,
}

impl CallerLocation {
    pub const UNKNOWN_FILE: &'static str = "(unknown file)";
    pub const UNKNOWN_FUNCTION: &'static str = "(unknown function)";

    pub fn new(file: &str, line: u32, function: &str) -> Self {
        Self {
            file: file.to_string(),
            line,
            function: function.to_string(),
        }
    }

    /// Location of the nearest `#[track_caller]` frame's caller
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    pub fn unknown() -> Self {
        Self::new(Self::UNKNOWN_FILE, 0, Self::UNKNOWN_FUNCTION)
    }

    /// Base name of the source file, as shown in file headers
    pub fn file_name(&self) -> &str {
        Path::new(&self.file)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.file)
    }
}

impl From<&Location<'_>> for CallerLocation {
    fn from(location: &Location<'_>) -> Self {
        if location.file().is_empty() {
            return Self::unknown();
        }
        Self::new(location.file(), location.line(), Self::UNKNOWN_FUNCTION)
    }
}

impl Default for CallerLocation {
    fn default() -> Self {
        Self::unknown()
    }
}

/// A single-line record ready to be rendered by a sink
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub location: CallerLocation,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Local::now(),
            location: CallerLocation::unknown(),
        }
    }

    pub fn with_location(mut self, location: CallerLocation) -> Self {
        self.location = location;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_captures_this_file() {
        let location = CallerLocation::caller();
        assert_eq!(location.file_name(), "log_entry.rs");
        assert!(location.line > 0);
    }

    #[test]
    fn test_unknown_sentinel() {
        let location = CallerLocation::unknown();
        assert_eq!(location.file, "(unknown file)");
        assert_eq!(location.line, 0);
        assert_eq!(location.function, "(unknown function)");
        assert_eq!(location.file_name(), "(unknown file)");
    }

    #[test]
    fn test_file_name_strips_directories() {
        let location = CallerLocation::new("src/bin/sync/main.rs", 12, "sync::main");
        assert_eq!(location.file_name(), "main.rs");
    }

    #[test]
    fn test_entry_defaults_to_unknown_location() {
        let entry = LogEntry::new(LogLevel::Info, "hello");
        assert_eq!(entry.location, CallerLocation::unknown());
        assert_eq!(entry.message, "hello");
    }
}
