use super::Delimited;

/// `**content**` -> `<b>content</b>`. Content may be empty.
pub struct Bold;

impl Delimited for Bold {
    const OPEN: &'static str = "**";
    const CLOSE: &'static str = "**";
    const MIN_CONTENT: usize = 0;

    fn replace(content: &str) -> String {
        format!("<b>{content}</b>")
    }
}

/// `__content__` -> `<em>content</em>`. Content may be empty.
pub struct Italic;

impl Delimited for Italic {
    const OPEN: &'static str = "__";
    const CLOSE: &'static str = "__";
    const MIN_CONTENT: usize = 0;

    fn replace(content: &str) -> String {
        format!("<em>{content}</em>")
    }
}
