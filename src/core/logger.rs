//! Main logger implementation
//!
//! [`Logger`] is the public facade: it filters by level, keeps the error
//! summary, splits multi-line messages, redacts secrets and hands each
//! single-line record to every attached sink. A visible ghost line is always
//! erased before a persisted line is written.

use super::{
    appender::Appender,
    config::LoggerConfig,
    error::{LoggerError, Result},
    formatter::{LineFormatter, RenderStyle},
    ghost::{ascii_fallback, GhostLine},
    log_entry::{CallerLocation, LogEntry},
    log_level::LogLevel,
    redactor::Redactor,
    sink_manager::{SinkManager, CONSOLE_KEY, MAIN_KEY},
};
use crate::appenders::{
    ConsoleAppender, RotatingFileAppender, RotationPolicy, MAIN_BACKUP_COUNT,
};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt::{self, Display};
use std::fs;
use std::path::{Path, PathBuf};

/// Options for [`Logger::separator`]
///
/// # Example
///
/// ```
/// use boxed_logger::{LogLevel, SeparatorOptions};
///
/// let options = SeparatorOptions::new()
///     .space(false)
///     .border(false)
///     .level(LogLevel::Debug);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorOptions {
    /// Pad with blanks instead of the separator character
    pub space: bool,
    /// Emit `|====|` rules above and below the text
    pub border: bool,
    /// Surround the text with one blank before padding
    pub side_space: bool,
    /// Left-align instead of centering
    pub left: bool,
    pub level: LogLevel,
}

impl Default for SeparatorOptions {
    fn default() -> Self {
        Self {
            space: true,
            border: true,
            side_space: true,
            left: false,
            level: LogLevel::Info,
        }
    }
}

impl SeparatorOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn space(mut self, space: bool) -> Self {
        self.space = space;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn side_space(mut self, side_space: bool) -> Self {
        self.side_space = side_space;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn left(mut self, left: bool) -> Self {
        self.left = left;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }
}

pub struct Logger {
    config: LoggerConfig,
    level: LogLevel,
    formatter: LineFormatter,
    sinks: SinkManager,
    redactor: Redactor,
    ghost: GhostLine,
    save_errors: bool,
    saved_errors: Vec<String>,
    main_log: PathBuf,
}

impl Logger {
    /// Create a logger writing boxed lines to stderr.
    ///
    /// Creates `{base_dir}/logs` but no log file; see [`add_main`](Self::add_main).
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the log
    /// directory cannot be created.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    #[must_use]
    pub fn builder(config: LoggerConfig) -> LoggerBuilder {
        LoggerBuilder::new(config)
    }

    pub fn name(&self) -> &str {
        &self.config.logger_name
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Change the logger threshold; the console follows it
    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
        self.sinks.set_threshold(CONSOLE_KEY, level);
    }

    pub fn is_enabled_for(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    pub fn is_debug(&self) -> bool {
        self.config.debug
    }

    pub fn formatter(&self) -> &LineFormatter {
        &self.formatter
    }

    pub fn sinks(&self) -> &SinkManager {
        &self.sinks
    }

    // ---------------------------------------------------------------------
    // Sinks
    // ---------------------------------------------------------------------

    /// Resolved path of the main log file
    pub fn main_log(&self) -> &Path {
        &self.main_log
    }

    /// Attach the main log file with the default 9 backups
    ///
    /// # Errors
    ///
    /// See [`add_main_at`](Self::add_main_at).
    pub fn add_main(&mut self) -> Result<()> {
        let path = self.main_log.clone();
        self.add_main_at(path, MAIN_BACKUP_COUNT)
    }

    /// Attach a fresh main log sink at `path`, replacing any previous one.
    ///
    /// The file itself is created on the first write.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::FileAppenderError`] if `path` is empty or names
    /// a directory.
    pub fn add_main_at(&mut self, path: impl AsRef<Path>, backups: usize) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() || path.is_dir() {
            return Err(LoggerError::file_appender(
                path.display().to_string(),
                "main log path must name a file",
            ));
        }
        let policy = RotationPolicy::new().with_max_backups(backups);
        let appender = RotatingFileAppender::with_policy(path, policy);
        self.sinks.attach(MAIN_KEY, Box::new(appender), LogLevel::Debug);
        Ok(())
    }

    pub fn remove_main(&mut self) -> bool {
        self.sinks.remove(MAIN_KEY).is_some()
    }

    /// Attach `{base_dir}/logs/{key}.log`.
    ///
    /// A key that was attached before and then removed resumes the same sink.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] for an empty key or one
    /// of the reserved `"console"` and `"main"` keys.
    pub fn add_keyed(&mut self, key: &str) -> Result<()> {
        if key.is_empty() || is_reserved_key(key) {
            return Err(LoggerError::config(
                "keyed log",
                format!("'{}' cannot be used as a log key", key),
            ));
        }
        if self.sinks.reattach(key) {
            return Ok(());
        }
        let appender = RotatingFileAppender::new(self.config.keyed_log(key));
        self.sinks.attach(key, Box::new(appender), LogLevel::Debug);
        Ok(())
    }

    /// Detach a keyed log; reserved keys are never detached
    pub fn remove_keyed(&mut self, key: &str) -> bool {
        !is_reserved_key(key) && self.sinks.detach(key)
    }

    /// Attach a custom sink under `key`
    pub fn attach_sink<A: Appender + 'static>(&mut self, key: &str, appender: A, threshold: LogLevel) {
        self.sinks.attach(key, Box::new(appender), threshold);
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sinks.flush()
    }

    // ---------------------------------------------------------------------
    // Errors and secrets
    // ---------------------------------------------------------------------

    /// Keep raw ERROR/CRITICAL messages for a post-run summary
    pub fn set_save_errors(&mut self, save: bool) {
        self.save_errors = save;
    }

    pub fn is_saving_errors(&self) -> bool {
        self.save_errors
    }

    pub fn saved_errors(&self) -> &[String] {
        &self.saved_errors
    }

    pub fn clear_errors(&mut self) {
        self.saved_errors.clear();
    }

    /// Register a value that must never reach a sink verbatim
    pub fn secret(&mut self, text: impl Display) -> bool {
        self.redactor.add_secret(text.to_string())
    }

    // ---------------------------------------------------------------------
    // Logging
    // ---------------------------------------------------------------------

    #[track_caller]
    #[inline]
    pub fn debug(&mut self, message: impl Display) {
        self.log(LogLevel::Debug, message);
    }

    #[track_caller]
    #[inline]
    pub fn info(&mut self, message: impl Display) {
        self.log(LogLevel::Info, message);
    }

    #[track_caller]
    #[inline]
    pub fn dryrun(&mut self, message: impl Display) {
        self.log(LogLevel::Dryrun, message);
    }

    #[track_caller]
    #[inline]
    pub fn warning(&mut self, message: impl Display) {
        self.log(LogLevel::Warning, message);
    }

    #[track_caller]
    #[inline]
    pub fn error(&mut self, message: impl Display) {
        self.log(LogLevel::Error, message);
    }

    #[track_caller]
    #[inline]
    pub fn critical(&mut self, message: impl Display) {
        self.log(LogLevel::Critical, message);
    }

    #[track_caller]
    pub fn log(&mut self, level: LogLevel, message: impl Display) {
        self.log_at(level, message, CallerLocation::caller());
    }

    /// Log with an explicit call site; used by the logging macros
    pub fn log_at(&mut self, level: LogLevel, message: impl Display, location: CallerLocation) {
        let message = message.to_string();
        if self.save_errors && level.is_error() {
            self.saved_errors.push(message.clone());
        }
        if self.is_enabled_for(level) {
            self.route(level, &message, &location, RenderStyle::BORDERED);
        }
    }

    /// Log `message` at `level` without touching the error summary.
    ///
    /// Returns the text that was submitted.
    #[track_caller]
    pub fn print_line(&mut self, message: impl Display, level: LogLevel) -> Vec<String> {
        let message = message.to_string();
        if self.is_enabled_for(level) {
            self.route(level, &message, &CallerLocation::caller(), RenderStyle::BORDERED);
        }
        vec![message]
    }

    /// INFO line centered in the box
    #[track_caller]
    pub fn info_center(&mut self, message: impl Display) {
        let centered = self.center(&message.to_string(), ' ', true, false);
        self.log(LogLevel::Info, centered);
    }

    /// Center `text` in the box interior; see [`LineFormatter::center`]
    pub fn center(&self, text: &str, fill: char, side_space: bool, left: bool) -> String {
        self.formatter.center(text, fill, side_space, left)
    }

    /// Emit a boxed banner and return the lines it produced.
    ///
    /// Lines are rendered without the usual `| ... |` body borders, since
    /// the banner draws its own.
    #[track_caller]
    pub fn separator(&mut self, text: Option<&str>, options: SeparatorOptions) -> Vec<String> {
        let location = CallerLocation::caller();
        let fill = if options.space {
            ' '
        } else {
            self.config.separator_char
        };
        let rule = self.formatter.border_line(self.config.separator_char);

        let mut lines = Vec::new();
        if options.border {
            lines.push(rule.clone());
        }
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            for segment in text.split('\n') {
                let centered =
                    self.formatter
                        .center(segment, fill, options.side_space, options.left);
                lines.push(format!("|{fill}{centered}{fill}|"));
            }
            if options.border {
                lines.push(rule);
            }
        }

        if self.is_enabled_for(options.level) {
            for line in &lines {
                self.route(options.level, line, &location, RenderStyle::PLAIN);
            }
        }
        lines
    }

    /// Log `error`, its source chain and (when enabled) a backtrace at DEBUG.
    ///
    /// With no error a short placeholder is logged instead.
    #[track_caller]
    pub fn stacktrace(&mut self, error: Option<&(dyn Error + 'static)>) {
        let report = ErrorReport(error).to_string();
        self.log(LogLevel::Debug, report);
    }

    // ---------------------------------------------------------------------
    // Ghost line
    // ---------------------------------------------------------------------

    /// Show transient status text on the console, replacing the previous one
    pub fn ghost(&mut self, text: impl Display) {
        if let Some(line) = self.ghost.render_write(&text.to_string()) {
            self.write_transient(&line);
        }
    }

    /// Erase the ghost line
    pub fn exorcise(&mut self) {
        if let Some(line) = self.ghost.render_clear() {
            self.write_transient(&line);
        }
    }

    pub fn ghost_width(&self) -> usize {
        self.ghost.width()
    }

    /// See [`GhostLine::insert_space`]
    pub fn insert_space(&self, text: &str, space_length: usize) -> String {
        self.ghost.insert_space(text, space_length)
    }

    fn write_transient(&mut self, line: &str) {
        if self.sinks.write_console(line).is_err() {
            // Second failure is dropped
            let _ = self.sinks.write_console(&ascii_fallback(line));
        }
    }

    // ---------------------------------------------------------------------
    // Routing
    // ---------------------------------------------------------------------

    fn route(&mut self, level: LogLevel, message: &str, location: &CallerLocation, style: RenderStyle) {
        if self.ghost.is_active() {
            self.exorcise();
        }

        if message.contains('\n') {
            for (i, segment) in message.split('\n').enumerate() {
                let style = if i == 0 { style } else { style.continued() };
                self.route(level, segment, location, style);
            }
            return;
        }

        let redacted = self.redactor.redact(message);
        let entry = LogEntry::new(level, redacted.into_owned()).with_location(location.clone());
        self.sinks.dispatch(&self.formatter, style, &entry);
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

fn is_reserved_key(key: &str) -> bool {
    key == CONSOLE_KEY || key == MAIN_KEY
}

/// Human-readable rendering of an error chain for [`Logger::stacktrace`]
struct ErrorReport<'a>(Option<&'a (dyn Error + 'static)>);

impl Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(error) = self.0 else {
            return write!(f, "No active error");
        };

        write!(f, "Error: {}", error)?;
        let mut source = error.source();
        if source.is_some() {
            write!(f, "\nCaused by:")?;
        }
        while let Some(cause) = source {
            write!(f, "\n    {}", cause)?;
            source = cause.source();
        }

        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            write!(f, "\nStack backtrace:\n{}", backtrace.to_string().trim_end())?;
        }
        Ok(())
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
///
/// ```
/// use boxed_logger::appenders::SharedBuffer;
/// use boxed_logger::prelude::*;
///
/// let dir = tempfile::tempdir().unwrap();
/// let console = SharedBuffer::new();
/// let mut logger = Logger::builder(LoggerConfig::new("demo").with_base_dir(dir.path()))
///     .console(ConsoleAppender::with_writer(console.clone()))
///     .main_log(true)
///     .build()
///     .unwrap();
///
/// logger.info("ready");
/// assert!(console.contents().contains("ready"));
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    console: Option<Box<dyn Appender>>,
    main_log: bool,
}

impl LoggerBuilder {
    /// Create a new builder; the console defaults to stderr
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            console: Some(Box::new(ConsoleAppender::new())),
            main_log: false,
        }
    }

    /// Use `appender` as the console sink
    #[must_use = "builder methods return a new value"]
    pub fn console<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.console = Some(Box::new(appender));
        self
    }

    /// Build without a console sink (no ghost lines either)
    #[must_use = "builder methods return a new value"]
    pub fn without_console(mut self) -> Self {
        self.console = None;
        self
    }

    /// Attach the main log file right away
    #[must_use = "builder methods return a new value"]
    pub fn main_log(mut self, attach: bool) -> Self {
        self.main_log = attach;
        self
    }

    /// Build the Logger
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the log
    /// directory cannot be created.
    pub fn build(self) -> Result<Logger> {
        self.config.validate()?;

        let log_dir = self.config.log_dir();
        fs::create_dir_all(&log_dir).map_err(|e| {
            LoggerError::io_operation(
                "create log directory",
                format!("Failed to create directory '{}'", log_dir.display()),
                e,
            )
        })?;

        let mut sinks = SinkManager::new();
        if let Some(console) = self.console {
            sinks.attach(CONSOLE_KEY, console, self.config.log_level);
        }

        let mut logger = Logger {
            level: self.config.log_level,
            formatter: LineFormatter::new(self.config.screen_width),
            ghost: GhostLine::new(self.config.ignore_ghost),
            main_log: self.config.main_log(),
            redactor: Redactor::new(),
            save_errors: false,
            saved_errors: Vec::new(),
            sinks,
            config: self.config,
        };

        if self.main_log {
            logger.add_main()?;
        }
        Ok(logger)
    }
}
