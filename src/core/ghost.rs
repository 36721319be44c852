//! Transient status line ("ghost")
//!
//! A ghost line is written to the console without a trailing newline and ends
//! in a carriage return, so the next write lands on the same terminal row.
//! The rendered width is remembered so that a shorter follow-up, or a clear,
//! blanks out every column the previous ghost used.

/// Width tracker for the current ghost line
#[derive(Debug, Clone, Default)]
pub struct GhostLine {
    width: usize,
    disabled: bool,
}

impl GhostLine {
    pub fn new(disabled: bool) -> Self {
        Self { width: 0, disabled }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Rendered width of the active ghost, 0 when none is shown
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_active(&self) -> bool {
        self.width > 0
    }

    /// Render `"| {text}"` padded to cover the previous ghost, ending in `\r`.
    ///
    /// Returns `None` when ghosting is disabled.
    pub fn render_write(&mut self, text: &str) -> Option<String> {
        if self.disabled {
            return None;
        }
        let line = self.pad_to_width(format!("| {}", text));
        self.width = text.chars().count() + 2;
        Some(line)
    }

    /// Render the blank that erases the active ghost, ending in `\r`.
    ///
    /// Returns `None` when ghosting is disabled.
    pub fn render_clear(&mut self) -> Option<String> {
        if self.disabled {
            return None;
        }
        let line = self.pad_to_width(" ".to_string());
        self.width = 0;
        Some(line)
    }

    /// Left-pad `text` so it ends where the active ghost ends.
    ///
    /// An explicit `space_length` of 0 means "pad up to the ghost width".
    pub fn insert_space(&self, text: &str, space_length: usize) -> String {
        let space_length = if space_length == 0 {
            self.width.saturating_sub(text.chars().count())
        } else {
            space_length
        };
        format!("{:space_length$}{}", "", text)
    }

    fn pad_to_width(&self, mut line: String) -> String {
        let len = line.chars().count();
        if self.width > len {
            line.extend(std::iter::repeat(' ').take(self.width - len));
        }
        line.push('\r');
        line
    }
}

/// ASCII-only rendering used when the console rejects the original text
pub fn ascii_fallback(line: &str) -> String {
    line.chars()
        .flat_map(|c| {
            if c.is_ascii() {
                vec![c]
            } else {
                c.escape_unicode().collect()
            }
        })
        .collect()
}
