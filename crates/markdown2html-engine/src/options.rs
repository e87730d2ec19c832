use serde::{Deserialize, Serialize};

/// What to do with a `#` run longer than the deepest HTML heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingOverflow {
    /// Treat the whole line as paragraph text.
    #[default]
    Paragraph,
    /// Discard the line as if it were blank.
    Drop,
}

/// Knobs that change how a document is rendered.
///
/// Fixed for the duration of one conversion. Every field has a default, so a
/// partially filled `[render]` table deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Policy for `#######` and longer.
    pub heading_overflow: HeadingOverflow,
    /// Whether a blank line ends an open list as well as an open paragraph.
    pub blank_line_closes_list: bool,
    /// Marker placed between the lines of one paragraph.
    pub line_break: String,
}

impl RenderOptions {
    pub const DEFAULT_LINE_BREAK: &'static str = "<br/>";
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            heading_overflow: HeadingOverflow::default(),
            blank_line_closes_list: false,
            line_break: Self::DEFAULT_LINE_BREAK.to_string(),
        }
    }
}
