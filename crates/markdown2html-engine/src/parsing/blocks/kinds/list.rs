/// The two flat list flavours and their item markers.
///
/// Note the dialect: `- ` opens an unordered list but `* ` opens an *ordered*
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub const UNORDERED_MARKER: &'static str = "- ";
    pub const ORDERED_MARKER: &'static str = "* ";

    pub fn marker(self) -> &'static str {
        match self {
            ListKind::Unordered => Self::UNORDERED_MARKER,
            ListKind::Ordered => Self::ORDERED_MARKER,
        }
    }

    /// HTML element name wrapping the items.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }

    /// Returns the item text (trimmed) if `line` starts with this kind's marker.
    pub fn strip_marker(self, line: &str) -> Option<&str> {
        line.strip_prefix(self.marker()).map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_own_marker_only() {
        assert_eq!(ListKind::Unordered.strip_marker("- a "), Some("a"));
        assert_eq!(ListKind::Unordered.strip_marker("* a"), None);
        assert_eq!(ListKind::Ordered.strip_marker("*   b"), Some("b"));
    }

    #[test]
    fn marker_needs_trailing_space() {
        assert_eq!(ListKind::Unordered.strip_marker("-a"), None);
        assert_eq!(ListKind::Ordered.strip_marker("**bold**"), None);
    }

    #[test]
    fn tags() {
        assert_eq!(ListKind::Unordered.tag(), "ul");
        assert_eq!(ListKind::Ordered.tag(), "ol");
    }
}
