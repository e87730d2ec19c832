use super::Delimited;

/// `((content))`, replaced by the content with every `c` and `C` deleted.
pub struct ParenStrip;

impl ParenStrip {
    fn is_stripped(c: char) -> bool {
        c.eq_ignore_ascii_case(&'c')
    }
}

impl Delimited for ParenStrip {
    const OPEN: &'static str = "((";
    const CLOSE: &'static str = "))";
    const MIN_CONTENT: usize = 1;

    fn replace(content: &str) -> String {
        content.chars().filter(|&c| !Self::is_stripped(c)).collect()
    }
}
