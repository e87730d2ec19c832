use crate::parsing::{html::Fragment, inline::rewrite};

/// Paragraph block type.
///
/// Paragraphs have no marker - they are the default for any non-blank line no
/// other block claims. Consecutive such lines share one paragraph.
pub struct Paragraph;

impl Paragraph {
    /// Rewrites each buffered line on its own, then wraps them in one `<p>`.
    pub fn render<S: AsRef<str>>(lines: &[S], line_break: &str) -> Fragment {
        let rewritten: Vec<String> = lines.iter().map(|l| rewrite(l.as_ref())).collect();
        Fragment::paragraph(&rewritten, line_break)
    }
}
