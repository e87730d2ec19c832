/// A single input line with its terminator removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    raw: &'a str,
}

impl<'a> Line<'a> {
    /// Wraps `text`, dropping any trailing `\r` / `\n`.
    pub fn new(text: &'a str) -> Self {
        Self {
            raw: text.trim_end_matches(['\r', '\n']),
        }
    }

    /// The line exactly as read, minus the terminator.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The line with surrounding whitespace removed. Classification works on this.
    pub fn trimmed(&self) -> &'a str {
        self.raw.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }
}

/// Splits a whole document into lines, accepting both `\n` and `\r\n`.
pub fn lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.lines().map(Line::new)
}
