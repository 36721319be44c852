//! Named output destinations
//!
//! Sinks are keyed: `"console"`, `"main"`, or any caller-chosen key for
//! secondary log files. Detached sinks are kept in a cache so re-attaching a
//! key resumes the same file with its size accounting intact.

use super::appender::Appender;
use super::error::{LoggerError, Result};
use super::formatter::{LineFormatter, RenderStyle};
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use std::collections::HashMap;

pub const CONSOLE_KEY: &str = "console";
pub const MAIN_KEY: &str = "main";

struct Sink {
    key: String,
    threshold: LogLevel,
    appender: Box<dyn Appender>,
}

#[derive(Default)]
pub struct SinkManager {
    attached: Vec<Sink>,
    detached: HashMap<String, Sink>,
}

impl SinkManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `appender` under `key`, replacing (and returning) any sink
    /// already attached or cached under that key.
    pub fn attach(
        &mut self,
        key: impl Into<String>,
        appender: Box<dyn Appender>,
        threshold: LogLevel,
    ) -> Option<Box<dyn Appender>> {
        let key = key.into();
        let previous = self.remove(&key);
        self.attached.push(Sink {
            key,
            threshold,
            appender,
        });
        previous
    }

    /// Re-attach a previously detached sink. Returns `true` if `key` is
    /// attached afterwards.
    pub fn reattach(&mut self, key: &str) -> bool {
        if self.is_attached(key) {
            return true;
        }
        match self.detached.remove(key) {
            Some(sink) => {
                self.attached.push(sink);
                true
            }
            None => false,
        }
    }

    /// Stop routing to `key`, keeping the sink cached for [`reattach`](Self::reattach)
    pub fn detach(&mut self, key: &str) -> bool {
        match self.attached.iter().position(|s| s.key == key) {
            Some(idx) => {
                let mut sink = self.attached.remove(idx);
                if let Err(e) = sink.appender.flush() {
                    eprintln!("[LOGGER ERROR] Sink '{}' flush failed: {}", sink.key, e);
                }
                self.detached.insert(sink.key.clone(), sink);
                true
            }
            None => false,
        }
    }

    /// Drop the sink under `key` entirely, attached or cached
    pub fn remove(&mut self, key: &str) -> Option<Box<dyn Appender>> {
        if let Some(idx) = self.attached.iter().position(|s| s.key == key) {
            return Some(self.attached.remove(idx).appender);
        }
        self.detached.remove(key).map(|s| s.appender)
    }

    pub fn is_attached(&self, key: &str) -> bool {
        self.attached.iter().any(|s| s.key == key)
    }

    pub fn is_cached(&self, key: &str) -> bool {
        self.detached.contains_key(key)
    }

    /// Keys of attached sinks, in attach order
    pub fn keys(&self) -> Vec<&str> {
        self.attached.iter().map(|s| s.key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    pub fn set_threshold(&mut self, key: &str, level: LogLevel) -> bool {
        match self.attached.iter_mut().find(|s| s.key == key) {
            Some(sink) => {
                sink.threshold = level;
                true
            }
            None => false,
        }
    }

    pub fn threshold(&self, key: &str) -> Option<LogLevel> {
        self.attached
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.threshold)
    }

    /// Render `entry` once per attached sink and write it.
    ///
    /// One failing (or panicking) sink never keeps the record from the
    /// others. Returns the number of sinks that accepted the line.
    pub fn dispatch(
        &mut self,
        formatter: &LineFormatter,
        style: RenderStyle,
        entry: &LogEntry,
    ) -> usize {
        let mut written = 0;

        for sink in self.attached.iter_mut() {
            if entry.level < sink.threshold {
                continue;
            }

            let appender = &mut sink.appender;
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                let line = formatter.render(appender.template(), style, entry);
                appender.write_line(&line)
            }));

            match result {
                Ok(Ok(())) => written += 1,
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.key, e);
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Sink '{}' panicked: {}. \
                         Other sinks continue to function.",
                        sink.key, panic_msg
                    );
                }
            }
        }

        written
    }

    /// Write text verbatim to the console sink
    pub fn write_console(&mut self, text: &str) -> Result<()> {
        match self.attached.iter_mut().find(|s| s.key == CONSOLE_KEY) {
            Some(sink) => sink.appender.write_raw(text),
            None => Err(LoggerError::writer("no console sink attached")),
        }
    }

    /// Flush every attached sink, reporting the first failure
    pub fn flush(&mut self) -> Result<()> {
        let mut first_error = None;
        for sink in self.attached.iter_mut() {
            if let Err(e) = sink.appender.flush() {
                eprintln!("[LOGGER ERROR] Sink '{}' flush failed: {}", sink.key, e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
