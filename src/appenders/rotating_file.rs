//! Rotating file appender with size-based backup retention
//!
//! The file is opened lazily: nothing touches the filesystem until the first
//! line is written. Before each write the appender checks whether the line
//! would push the file past its size limit and, if so, shifts
//! `app.log.N-1 → app.log.N … app.log → app.log.1` first, so a line is never
//! split across two files.

use crate::core::appender::Appender;
use crate::core::error::{LoggerError, Result};
use crate::core::formatter::LineTemplate;
use crate::core::timestamp::TimestampFormat;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default rotation threshold (2 MiB)
pub const DEFAULT_MAX_BYTES: u64 = 2 * 1024 * 1024;

/// Backups kept for the main log
pub const MAIN_BACKUP_COUNT: usize = 9;

/// Backups kept for keyed logs
pub const KEYED_BACKUP_COUNT: usize = 3;

/// Configuration for rotating file appender
///
/// # Examples
///
/// ```
/// use boxed_logger::appenders::RotationPolicy;
///
/// let policy = RotationPolicy::new()
///     .with_max_size(512 * 1024)
///     .with_max_backups(7);
/// assert_eq!(policy.max_bytes, 512 * 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Size at which the file is rotated
    pub max_bytes: u64,
    /// Maximum number of rotated files to keep; 0 truncates instead
    pub max_backup_files: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            max_backup_files: KEYED_BACKUP_COUNT,
        }
    }
}

impl RotationPolicy {
    /// Create a new rotation policy with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum file size
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_size(mut self, size: u64) -> Self {
        self.max_bytes = size;
        self
    }

    /// Set maximum backup files
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_backups(mut self, count: usize) -> Self {
        self.max_backup_files = count;
        self
    }
}

/// Rotating file appender
///
/// # Examples
///
/// ```no_run
/// use boxed_logger::appenders::{RotatingFileAppender, RotationPolicy};
///
/// let appender = RotatingFileAppender::with_policy(
///     "logs/sync.log",
///     RotationPolicy::new().with_max_backups(9),
/// );
/// ```
pub struct RotatingFileAppender {
    base_path: PathBuf,
    policy: RotationPolicy,
    writer: Option<BufWriter<File>>,
    current_size: u64,
    template: LineTemplate,
    name: String,
}

impl RotatingFileAppender {
    /// Create a rotating file appender with the default policy.
    ///
    /// No file is created until the first write.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_policy(path, RotationPolicy::default())
    }

    pub fn with_policy<P: AsRef<Path>>(path: P, policy: RotationPolicy) -> Self {
        let base_path = path.as_ref().to_path_buf();
        Self {
            name: base_path.display().to_string(),
            base_path,
            policy,
            writer: None,
            current_size: 0,
            template: LineTemplate::file(),
        }
    }

    /// Set the timestamp format used in line headers
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.template = LineTemplate::File {
            timestamp_format: format,
        };
        self
    }

    /// Open (or create) the log file, creating its parent directory if needed
    fn open(&mut self) -> Result<()> {
        if let Some(parent) = self.base_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    LoggerError::io_operation(
                        "create log directory",
                        format!("Failed to create directory '{}'", parent.display()),
                        e,
                    )
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.base_path)
            .map_err(|e| {
                LoggerError::file_appender(
                    self.base_path.display().to_string(),
                    format!("Failed to open: {}", e),
                )
            })?;

        let metadata = file.metadata().map_err(|e| {
            LoggerError::file_appender(
                self.base_path.display().to_string(),
                format!("Cannot access file metadata: {}", e),
            )
        })?;

        self.current_size = metadata.len();
        self.writer = Some(BufWriter::new(file));
        Ok(())
    }

    fn should_rotate(&self, incoming: u64) -> bool {
        self.current_size > 0 && self.current_size + incoming >= self.policy.max_bytes
    }

    /// Perform log rotation
    fn rotate(&mut self) -> Result<()> {
        // Release the handle before renaming
        if let Some(mut writer) = self.writer.take() {
            writer.flush().map_err(|e| {
                LoggerError::file_rotation(
                    self.base_path.display().to_string(),
                    format!("Failed to flush before rotation: {}", e),
                )
            })?;
        }

        if self.policy.max_backup_files > 0 {
            let oldest = self.backup_path(self.policy.max_backup_files);
            if oldest.exists() {
                if let Err(e) = fs::remove_file(&oldest) {
                    eprintln!(
                        "[WARN] Failed to remove oldest backup {}: {}",
                        oldest.display(),
                        e
                    );
                }
            }

            for i in (1..self.policy.max_backup_files).rev() {
                let old_path = self.backup_path(i);
                let new_path = self.backup_path(i + 1);
                if old_path.exists() {
                    match fs::rename(&old_path, &new_path) {
                        Ok(_) => {}
                        Err(_) => {
                            // Some platforms refuse to rename over an existing file
                            if new_path.exists() {
                                let _ = fs::remove_file(&new_path);
                            }
                            fs::rename(&old_path, &new_path).map_err(|e| {
                                LoggerError::file_rotation(
                                    old_path.display().to_string(),
                                    format!("Failed to rotate backup files: {}", e),
                                )
                            })?;
                        }
                    }
                }
            }

            if self.base_path.exists() {
                fs::rename(&self.base_path, self.backup_path(1)).map_err(|e| {
                    LoggerError::file_rotation(
                        self.base_path.display().to_string(),
                        format!("Failed to rotate current log file: {}", e),
                    )
                })?;
            }
        } else if self.base_path.exists() {
            File::create(&self.base_path).map_err(|e| {
                LoggerError::file_rotation(
                    self.base_path.display().to_string(),
                    format!("Failed to truncate log file: {}", e),
                )
            })?;
        }

        self.open()
    }

    /// Get backup file path for given index
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut path = self.base_path.clone();
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("app.log")
            .to_string();
        path.set_file_name(format!("{}.{}", filename, index));
        path
    }

    /// Bytes in the current file, as seen by this appender
    #[must_use]
    pub fn current_size(&self) -> u64 {
        self.current_size
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.base_path
    }

    #[must_use]
    pub fn policy(&self) -> &RotationPolicy {
        &self.policy
    }

    /// Whether the file has been opened yet
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }
}

impl Appender for RotatingFileAppender {
    fn template(&self) -> &LineTemplate {
        &self.template
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        if self.writer.is_none() {
            self.open()?;
        }

        let bytes_written = line.len() as u64 + 1;

        if self.should_rotate(bytes_written) {
            if let Err(e) = self.rotate() {
                eprintln!(
                    "[WARN] Log rotation failed: {}. Continuing with current file.",
                    e
                );
                if self.writer.is_none() {
                    self.open()?;
                }
                // Let the file grow past the limit rather than retrying every line
                self.current_size = 0;
            }
        }

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("Writer not initialized"))?;
        writer
            .write_all(line.as_bytes())
            .and_then(|_| writer.write_all(b"\n"))
            .and_then(|_| writer.flush())
            .map_err(|e| {
                LoggerError::file_appender(
                    self.base_path.display().to_string(),
                    format!("Failed to write log entry: {}", e),
                )
            })?;
        self.current_size += bytes_written;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush().map_err(|e| {
                LoggerError::file_appender(
                    self.base_path.display().to_string(),
                    format!("Failed to flush: {}", e),
                )
            })?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for RotatingFileAppender {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
    }
}
