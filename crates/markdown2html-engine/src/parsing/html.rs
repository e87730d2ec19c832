use std::fmt;

use super::blocks::kinds::ListKind;

/// A piece of finished HTML, emitted by one block transition.
///
/// Text is inserted verbatim: no entity escaping happens anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub(crate) fn heading(level: u8, text: &str) -> Self {
        Self(format!("<h{level}>{text}</h{level}>\n"))
    }

    pub(crate) fn open_list(kind: ListKind) -> Self {
        Self(format!("<{}>\n", kind.tag()))
    }

    pub(crate) fn close_list(kind: ListKind) -> Self {
        Self(format!("</{}>\n", kind.tag()))
    }

    pub(crate) fn list_item(text: &str) -> Self {
        Self(format!("<li>{text}</li>\n"))
    }

    /// Wraps already rewritten lines in one `<p>` block.
    pub(crate) fn paragraph<S: AsRef<str>>(lines: &[S], line_break: &str) -> Self {
        let separator = format!("{line_break}\n");
        let body = lines
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(&separator);
        Self(format!("<p>\n{body}\n</p>\n"))
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
