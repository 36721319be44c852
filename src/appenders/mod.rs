//! Appender implementations

pub mod console;
pub mod rotating_file;

pub use console::{ConsoleAppender, SharedBuffer};
pub use rotating_file::{
    RotatingFileAppender, RotationPolicy, DEFAULT_MAX_BYTES, KEYED_BACKUP_COUNT,
    MAIN_BACKUP_COUNT,
};

pub use crate::core::Appender;
