use crate::options::{HeadingOverflow, RenderOptions};
use crate::parsing::lines::Line;

use super::kinds::{Heading, ListKind};

/// Classification of a single line.
///
/// Text payloads borrow from the line and are already trimmed. Inline markup
/// has not been applied yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind<'a> {
    /// `#`..`######` followed by the (possibly empty) heading text.
    Heading { level: u8, text: &'a str },
    /// `- item`
    UnorderedItem(&'a str),
    /// `* item`
    OrderedItem(&'a str),
    /// Any other non-blank line.
    ParagraphText(&'a str),
    Blank,
}

/// Classifies individual lines for the block phase.
///
/// Each line is classified on its own, without reference to earlier lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier {
    heading_overflow: HeadingOverflow,
}

impl LineClassifier {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            heading_overflow: options.heading_overflow,
        }
    }

    /// Classifies the trimmed text of `line`.
    ///
    /// Precedence: heading, unordered item, ordered item, paragraph text, blank.
    pub fn classify<'a>(&self, line: &Line<'a>) -> BlockKind<'a> {
        let text = line.trimmed();

        if let Some((run, rest)) = Heading::split(text) {
            if Heading::is_valid_level(run) {
                return BlockKind::Heading {
                    level: run as u8,
                    text: rest.trim(),
                };
            }
            return match self.heading_overflow {
                HeadingOverflow::Paragraph => BlockKind::ParagraphText(text),
                HeadingOverflow::Drop => BlockKind::Blank,
            };
        }

        if let Some(item) = ListKind::Unordered.strip_marker(text) {
            return BlockKind::UnorderedItem(item);
        }
        if let Some(item) = ListKind::Ordered.strip_marker(text) {
            return BlockKind::OrderedItem(item);
        }

        if line.is_blank() {
            BlockKind::Blank
        } else {
            BlockKind::ParagraphText(text)
        }
    }
}
