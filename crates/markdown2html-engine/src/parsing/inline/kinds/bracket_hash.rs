use super::Delimited;

/// `[[content]]`, replaced by the lowercase hex MD5 digest of the content's
/// UTF-8 bytes.
pub struct BracketHash;

impl Delimited for BracketHash {
    const OPEN: &'static str = "[[";
    const CLOSE: &'static str = "]]";
    const MIN_CONTENT: usize = 1;

    fn replace(content: &str) -> String {
        format!("{:x}", md5::compute(content.as_bytes()))
    }
}
