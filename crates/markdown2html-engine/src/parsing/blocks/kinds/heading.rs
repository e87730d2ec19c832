/// ATX-style heading (`#`, `##`, ...).
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    /// Deepest level with a matching HTML tag (`<h6>`).
    pub const MAX_LEVEL: usize = 6;

    /// Splits a leading `#` run off `line`.
    ///
    /// Returns the run length and whatever follows it (untrimmed), or `None` when
    /// the line does not start with `#`. The run may be longer than
    /// [`Self::MAX_LEVEL`]; the caller decides what that means.
    pub fn split(line: &str) -> Option<(usize, &str)> {
        let run = line.bytes().take_while(|&b| b == Self::MARKER).count();
        if run == 0 {
            return None;
        }
        Some((run, &line[run..]))
    }

    pub fn is_valid_level(run: usize) -> bool {
        (1..=Self::MAX_LEVEL).contains(&run)
    }
}
