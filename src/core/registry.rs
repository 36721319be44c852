//! Process-wide lookup of named loggers
//!
//! A [`Logger`] takes `&mut self` for every write. Sharing one across threads
//! goes through the [`SharedLogger`] handle handed out here, whose mutex keeps
//! each record (and every segment of a multi-line record) contiguous.

use super::config::LoggerConfig;
use super::error::Result;
use super::logger::Logger;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

pub type SharedLogger = Arc<Mutex<Logger>>;

#[derive(Default)]
pub struct LoggerRegistry {
    loggers: HashMap<String, SharedLogger>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the logger registered under `config.logger_name`, creating it
    /// on first use. An existing logger keeps its original configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a new logger cannot be built.
    pub fn get_or_create(&mut self, config: LoggerConfig) -> Result<SharedLogger> {
        if let Some(logger) = self.loggers.get(&config.logger_name) {
            return Ok(Arc::clone(logger));
        }
        let logger = Logger::new(config)?;
        Ok(self.register(logger))
    }

    /// Register `logger` under its own name, replacing any previous entry
    pub fn register(&mut self, logger: Logger) -> SharedLogger {
        let name = logger.name().to_string();
        let shared = Arc::new(Mutex::new(logger));
        self.loggers.insert(name, Arc::clone(&shared));
        shared
    }

    pub fn get(&self, name: &str) -> Option<SharedLogger> {
        self.loggers.get(name).cloned()
    }

    pub fn remove(&mut self, name: &str) -> Option<SharedLogger> {
        self.loggers.remove(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.loggers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    /// Flush every registered logger and empty the registry.
    ///
    /// All loggers are flushed even if one fails; the first error is returned.
    pub fn shutdown(&mut self) -> Result<()> {
        let mut first_error = None;
        for (_, logger) in self.loggers.drain() {
            if let Err(e) = logger.lock().flush() {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
