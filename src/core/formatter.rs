//! Fixed-width line rendering
//!
//! Every persisted line is drawn inside a box `screen_width` columns wide:
//!
//! ```text
//! [2025-01-08 10:30:45,123] [main.rs:42]                [INFO]     | Copying 12 files        |
//!                                                                  | continuation of a split |
//! ```
//!
//! Rendering is a pure function of the sink's [`LineTemplate`], a per-call
//! [`RenderStyle`] and the entry. Sinks never carry mutable formatting state.

use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use std::iter;

/// Width of the `[file:line]` header column in file sinks
pub const FILE_NAME_WIDTH: usize = 27;

/// Width of the `[LEVEL]` header column in file sinks
pub const LEVEL_NAME_WIDTH: usize = 10;

/// Blank columns before `| ` on continuation lines in file sinks.
///
/// Equal to the header width with the default timestamp and a caller that
/// fits its column. It does not follow the actual header.
pub const CONTINUATION_INDENT: usize = 1 + 23 + 2 + FILE_NAME_WIDTH + 1 + LEVEL_NAME_WIDTH + 1;

/// Per-sink line layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineTemplate {
    /// Message body only
    Console,
    /// Timestamp, caller and level header, then the message body
    File { timestamp_format: TimestampFormat },
}

impl LineTemplate {
    pub fn file() -> Self {
        LineTemplate::File {
            timestamp_format: TimestampFormat::default(),
        }
    }
}

/// Per-call rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    /// Wrap the body in `| ... |`
    pub border: bool,
    /// Segment 2..n of a split multi-line message
    pub continuation: bool,
}

impl RenderStyle {
    pub const BORDERED: RenderStyle = RenderStyle {
        border: true,
        continuation: false,
    };

    pub const PLAIN: RenderStyle = RenderStyle {
        border: false,
        continuation: false,
    };

    #[must_use]
    pub fn continued(self) -> Self {
        RenderStyle {
            continuation: true,
            ..self
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle::BORDERED
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFormatter {
    width: usize,
}

impl LineFormatter {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Columns available to text inside the box borders
    pub fn interior(&self) -> usize {
        self.width.saturating_sub(2)
    }

    /// Center (or left-align) `text` inside the box interior.
    ///
    /// Text that already fills the interior is returned untouched; nothing is
    /// ever truncated. `side_space` surrounds the text with one blank instead
    /// of one `fill` character. An odd remainder goes to the trailing side.
    /// Text exactly one column short of the interior comes back two columns
    /// wider than the interior, since both edge characters and the odd fill
    /// are still added.
    ///
    /// ```
    /// use boxed_logger::LineFormatter;
    ///
    /// let formatter = LineFormatter::new(20);
    /// assert_eq!(formatter.center("Done", '=', true, false), "====== Done ======");
    /// ```
    pub fn center(&self, text: &str, fill: char, side_space: bool, left: bool) -> String {
        let len = text.chars().count();
        if len >= self.interior() {
            return text.to_string();
        }

        let mut space = self.interior() - len;
        let edge = if side_space { ' ' } else { fill };

        let mut framed = String::with_capacity(text.len() + 3);
        framed.push(edge);
        framed.push_str(text);
        framed.push(edge);
        if space % 2 == 1 {
            framed.push(fill);
            space -= 1;
        }

        let pad: String = iter::repeat(fill).take((space / 2).saturating_sub(1)).collect();
        if left {
            format!("{framed}{pad}{pad}")
        } else {
            format!("{pad}{framed}{pad}")
        }
    }

    /// `| {message} |` padded to the interior, or the bare padded message
    pub fn body(&self, message: &str, border: bool) -> String {
        let width = self.interior();
        if border {
            format!("| {:<width$} |", message)
        } else {
            format!("{:<width$}", message)
        }
    }

    /// `[{timestamp}] {[file:line]:<27} {[LEVEL]:<10} `
    pub fn file_header(&self, timestamp_format: &TimestampFormat, entry: &LogEntry) -> String {
        let caller = format!(
            "[{}:{}]",
            entry.location.file_name(),
            entry.location.line
        );
        let level = format!("[{}]", entry.level);
        format!(
            "[{}] {:<name_w$} {:<level_w$} ",
            timestamp_format.format(&entry.timestamp),
            caller,
            level,
            name_w = FILE_NAME_WIDTH,
            level_w = LEVEL_NAME_WIDTH,
        )
    }

    /// Render one entry for a sink with the given template
    pub fn render(&self, template: &LineTemplate, style: RenderStyle, entry: &LogEntry) -> String {
        match template {
            LineTemplate::Console => self.body(&entry.message, style.border),
            LineTemplate::File { .. } if style.continuation => {
                format!("{:indent$}| {}", "", entry.message, indent = CONTINUATION_INDENT)
            }
            LineTemplate::File { timestamp_format } => {
                let header = self.file_header(timestamp_format, entry);
                format!("{}{}", header, self.body(&entry.message, style.border))
            }
        }
    }

    /// `|{fill × width}|`
    pub fn border_line(&self, fill: char) -> String {
        let mut line = String::with_capacity(self.width + 2);
        line.push('|');
        line.extend(iter::repeat(fill).take(self.width));
        line.push('|');
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_entry::CallerLocation;
    use crate::core::log_level::LogLevel;
    use chrono::{Local, TimeZone};

    fn entry(level: LogLevel, message: &str) -> LogEntry {
        let at = Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime");
        LogEntry::new(level, message)
            .with_timestamp(at)
            .with_location(CallerLocation::new("src/sync/run.rs", 42, "sync::run"))
    }

    #[test]
    fn test_center_done_at_width_80() {
        let formatter = LineFormatter::new(80);
        let centered = formatter.center("Done", ' ', true, false);
        assert_eq!(centered, format!("{}Done{}", " ".repeat(37), " ".repeat(37)));
        assert_eq!(centered.len(), 78);
    }

    #[test]
    fn test_center_odd_remainder_goes_to_trailing_side() {
        let formatter = LineFormatter::new(80);
        let centered = formatter.center("Hello", '-', false, false);
        assert_eq!(centered.len(), 78);
        assert!(centered.starts_with(&"-".repeat(36)));
        assert!(centered.ends_with(&"-".repeat(37)));
        assert!(centered.contains("-Hello-"));
    }

    #[test]
    fn test_center_left_aligned() {
        let formatter = LineFormatter::new(20);
        assert_eq!(formatter.center("Done", '=', true, true), " Done ============");
    }

    #[test]
    fn test_center_never_truncates() {
        let formatter = LineFormatter::new(10);
        assert_eq!(formatter.center("12345678", ' ', true, false), "12345678");
        assert_eq!(
            formatter.center("a much longer line", ' ', true, false),
            "a much longer line"
        );
    }

    #[test]
    fn test_console_template() {
        let formatter = LineFormatter::new(12);
        let line = formatter.render(&LineTemplate::Console, RenderStyle::BORDERED, &entry(LogLevel::Info, "hi"));
        assert_eq!(line, "| hi         |");

        let plain = formatter.render(&LineTemplate::Console, RenderStyle::PLAIN, &entry(LogLevel::Info, "hi"));
        assert_eq!(plain, "hi        ");
    }

    #[test]
    fn test_file_template_is_bit_exact() {
        let formatter = LineFormatter::new(12);
        let line = formatter.render(&LineTemplate::file(), RenderStyle::BORDERED, &entry(LogLevel::Dryrun, "hi"));
        assert_eq!(
            line,
            "[2025-01-08 10:30:45,000] [run.rs:42]                 [DRYRUN]   | hi         |"
        );
    }

    #[test]
    fn test_file_continuation_aligns_under_header() {
        let formatter = LineFormatter::new(12);
        let style = RenderStyle::BORDERED.continued();
        let line = formatter.render(&LineTemplate::file(), style, &entry(LogLevel::Info, "next"));
        assert_eq!(line, format!("{}| next", " ".repeat(65)));
    }

    #[test]
    fn test_continuation_indent_ignores_long_caller() {
        let formatter = LineFormatter::new(12);
        let long = entry(LogLevel::Info, "next")
            .with_location(CallerLocation::new("src/a_rather_long_module_name.rs", 1234, "m"));
        let header = formatter.file_header(&TimestampFormat::default(), &long);
        assert!(header.chars().count() > CONTINUATION_INDENT);

        let line = formatter.render(&LineTemplate::file(), RenderStyle::BORDERED.continued(), &long);
        assert_eq!(line, format!("{}| next", " ".repeat(65)));

        let custom = LineTemplate::File {
            timestamp_format: TimestampFormat::Rfc3339,
        };
        let line = formatter.render(&custom, RenderStyle::PLAIN.continued(), &long);
        assert_eq!(line, format!("{}| next", " ".repeat(65)));
    }

    #[test]
    fn test_center_one_short_of_interior() {
        let formatter = LineFormatter::new(80);
        let text = "x".repeat(77);
        let centered = formatter.center(&text, ' ', true, false);
        assert_eq!(centered, format!(" {} ", text) + " ");
        assert_eq!(centered.chars().count(), 80);
    }

    #[test]
    fn test_console_ignores_continuation() {
        let formatter = LineFormatter::new(12);
        let style = RenderStyle::BORDERED.continued();
        let line = formatter.render(&LineTemplate::Console, style, &entry(LogLevel::Info, "next"));
        assert_eq!(line, "| next       |");
    }

    #[test]
    fn test_border_line() {
        let formatter = LineFormatter::new(5);
        assert_eq!(formatter.border_line('='), "|=====|");
    }
}
