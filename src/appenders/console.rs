//! Console appender implementation

use crate::core::{Appender, LineTemplate, Result};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

pub struct ConsoleAppender {
    writer: Box<dyn Write + Send>,
    template: LineTemplate,
    name: String,
}

impl ConsoleAppender {
    /// Console appender on stderr
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Console appender on stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Console appender on any writer
    ///
    /// # Example
    ///
    /// ```
    /// use boxed_logger::appenders::{ConsoleAppender, SharedBuffer};
    ///
    /// let buffer = SharedBuffer::new();
    /// let appender = ConsoleAppender::with_writer(buffer.clone());
    /// ```
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
            template: LineTemplate::Console,
            name: "console".to_string(),
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn template(&self) -> &LineTemplate {
        &self.template
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_raw(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Cloneable in-memory writer, handy for capturing console output
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    /// Newline-terminated lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
