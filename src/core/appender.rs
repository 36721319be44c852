//! Appender trait for log output destinations

use super::error::{LoggerError, Result};
use super::formatter::LineTemplate;

pub trait Appender: Send {
    /// Layout this destination renders records with
    fn template(&self) -> &LineTemplate;

    /// Write one rendered line; the appender adds the line terminator
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Write text verbatim, without a terminator. Only terminals support this.
    fn write_raw(&mut self, _text: &str) -> Result<()> {
        Err(LoggerError::writer(format!(
            "{} does not accept raw writes",
            self.name()
        )))
    }

    fn flush(&mut self) -> Result<()>;

    fn name(&self) -> &str;
}
