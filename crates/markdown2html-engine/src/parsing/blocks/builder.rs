use crate::options::RenderOptions;
use crate::parsing::{html::Fragment, inline::rewrite};

use super::{
    classify::BlockKind,
    kinds::{ListKind, Paragraph},
};

/// The block currently open, if any.
///
/// Holding a single value keeps "at most one open block" true by construction.
#[derive(Debug, Default)]
enum OpenBlock {
    #[default]
    None,
    List(ListKind),
    /// Buffered paragraph lines, in input order, not yet rewritten.
    Paragraph(Vec<String>),
}

/// State machine turning classified lines into HTML fragments.
///
/// One builder serves one document: create it, [`feed`](Self::feed) every line
/// in order, then [`finish`](Self::finish) it.
pub struct BlockBuilder<'o> {
    options: &'o RenderOptions,
    open: OpenBlock,
}

impl<'o> BlockBuilder<'o> {
    pub fn new(options: &'o RenderOptions) -> Self {
        Self {
            options,
            open: OpenBlock::None,
        }
    }

    /// Advances the state by one line and returns the markup to emit now.
    pub fn feed(&mut self, kind: BlockKind<'_>) -> Vec<Fragment> {
        let mut out = vec![];

        match kind {
            BlockKind::Heading { level, text } => {
                self.close_open_block(&mut out);
                out.push(Fragment::heading(level, &rewrite(text)));
            }
            BlockKind::UnorderedItem(text) => {
                self.push_list_item(ListKind::Unordered, text, &mut out);
            }
            BlockKind::OrderedItem(text) => {
                self.push_list_item(ListKind::Ordered, text, &mut out);
            }
            BlockKind::ParagraphText(text) => self.extend_paragraph(text, &mut out),
            BlockKind::Blank => {
                self.flush_paragraph(&mut out);
                if self.options.blank_line_closes_list {
                    self.close_list(&mut out);
                }
            }
        }

        out
    }

    /// Closes whatever is still open: paragraph first, then any list.
    pub fn finish(mut self) -> Vec<Fragment> {
        let mut out = vec![];
        self.flush_paragraph(&mut out);
        self.close_list(&mut out);
        out
    }

    #[cfg(test)]
    fn in_unordered_list(&self) -> bool {
        matches!(self.open, OpenBlock::List(ListKind::Unordered))
    }

    #[cfg(test)]
    fn in_ordered_list(&self) -> bool {
        matches!(self.open, OpenBlock::List(ListKind::Ordered))
    }

    #[cfg(test)]
    fn in_paragraph(&self) -> bool {
        matches!(self.open, OpenBlock::Paragraph(_))
    }

    fn push_list_item(&mut self, kind: ListKind, text: &str, out: &mut Vec<Fragment>) {
        if !matches!(self.open, OpenBlock::List(open) if open == kind) {
            self.close_open_block(out);
            log::trace!("open <{}>", kind.tag());
            out.push(Fragment::open_list(kind));
            self.open = OpenBlock::List(kind);
        }
        out.push(Fragment::list_item(&rewrite(text)));
    }

    fn extend_paragraph(&mut self, text: &str, out: &mut Vec<Fragment>) {
        if let OpenBlock::Paragraph(lines) = &mut self.open {
            lines.push(text.to_owned());
            return;
        }
        self.close_open_block(out);
        log::trace!("open <p>");
        self.open = OpenBlock::Paragraph(vec![text.to_owned()]);
    }

    fn close_open_block(&mut self, out: &mut Vec<Fragment>) {
        self.flush_paragraph(out);
        self.close_list(out);
    }

    fn flush_paragraph(&mut self, out: &mut Vec<Fragment>) {
        let prev = std::mem::take(&mut self.open);
        if let OpenBlock::Paragraph(lines) = prev {
            log::trace!("close <p> after {} line(s)", lines.len());
            out.push(Paragraph::render(&lines, &self.options.line_break));
        } else {
            self.open = prev; // put back a list
        }
    }

    fn close_list(&mut self, out: &mut Vec<Fragment>) {
        if let OpenBlock::List(kind) = self.open {
            log::trace!("close <{}>", kind.tag());
            out.push(Fragment::close_list(kind));
            self.open = OpenBlock::None;
        }
    }
}
