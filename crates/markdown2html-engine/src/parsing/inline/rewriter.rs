use std::ops::Range;

use super::{
    cursor::Cursor,
    kinds::{BracketHash, Bold, Delimited, Italic, ParenStrip},
};

/// Applies every inline stage to `text`, in order.
///
/// Order matters: later stages see the output of earlier ones. A digest can be
/// bolded (`**[[a]]**`), markers inside `[[...]]` are hashed rather than
/// rendered, and markers left behind by the strip stage (`((**c**))`) are still
/// picked up by bold.
pub fn rewrite(text: &str) -> String {
    let text = substitute::<BracketHash>(text);
    let text = substitute::<ParenStrip>(&text);
    let text = substitute::<Bold>(&text);
    substitute::<Italic>(&text)
}

/// Replaces every non-overlapping `K::OPEN content K::CLOSE` span in `s`.
///
/// Scans left to right; content ends at the first closer after at least
/// `K::MIN_CONTENT` chars. An opener with no closer is copied through and the
/// scan continues one char later.
pub fn substitute<K: Delimited>(s: &str) -> String {
    let mut cur = Cursor::new(s);
    let mut out = String::with_capacity(s.len());
    let mut text_start = cur.pos();

    while !cur.eof() {
        if let Some(m) = try_match::<K>(&mut cur) {
            out.push_str(&s[text_start..m.full.start]);
            out.push_str(&K::replace(&s[m.content]));
            text_start = m.full.end;
            continue;
        }
        cur.bump();
    }

    out.push_str(&s[text_start..]);
    out
}

struct Match {
    full: Range<usize>,
    content: Range<usize>,
}

/// Attempts to match one delimited span at the current position.
///
/// On failure, cursor position is restored.
fn try_match<K: Delimited>(cur: &mut Cursor<'_>) -> Option<Match> {
    if !cur.starts_with(K::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_str(K::OPEN);
    let content_start = cur.pos();

    for _ in 0..K::MIN_CONTENT {
        if cur.bump().is_none() {
            *cur = saved;
            return None;
        }
    }
    while !cur.eof() && !cur.starts_with(K::CLOSE) {
        cur.bump();
    }

    if !cur.starts_with(K::CLOSE) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    let content_end = cur.pos();
    cur.bump_str(K::CLOSE);

    Some(Match {
        full: start..cur.pos(),
        content: content_start..content_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hash_of_known_content() {
        assert_eq!(rewrite("[[abc]]"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn hash_inside_text() {
        assert_eq!(
            rewrite("id: [[a]]!"),
            "id: 0cc175b9c0f1b6a831c399e269772661!"
        );
    }

    #[test]
    fn unclosed_hash_left_verbatim() {
        assert_eq!(rewrite("[[open"), "[[open");
        assert_eq!(rewrite("a ]] b [["), "a ]] b [[");
    }

    #[test]
    fn empty_brackets_not_hashed() {
        assert_eq!(rewrite("[[]]"), "[[]]");
    }

    #[test]
    fn hash_content_ends_at_first_closer() {
        // "[[]]]]": content needs one char, so it is "]" and one "]" trails.
        assert_eq!(
            substitute::<BracketHash>("[[]]]]"),
            format!("{}]", BracketHash::replace("]"))
        );
    }

    #[test]
    fn strip_removes_c_case_insensitively() {
        assert_eq!(rewrite("((Cocoa))"), "oo");
        assert_eq!(rewrite("x ((cC)) y"), "x  y");
    }

    #[test]
    fn unclosed_strip_left_verbatim() {
        assert_eq!(rewrite("((cocoa"), "((cocoa");
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(rewrite("**x**"), "<b>x</b>");
        assert_eq!(rewrite("__x__"), "<em>x</em>");
        assert_eq!(rewrite("**a** __b__"), "<b>a</b> <em>b</em>");
    }

    #[test]
    fn empty_emphasis_allowed() {
        assert_eq!(rewrite("****"), "<b></b>");
        assert_eq!(rewrite("____"), "<em></em>");
    }

    #[test]
    fn same_marker_pairs_left_to_right() {
        assert_eq!(rewrite("**a**b**c**"), "<b>a</b>b<b>c</b>");
        assert_eq!(rewrite("**a**b**"), "<b>a</b>b**");
    }

    #[test]
    fn shortest_match_with_extra_markers() {
        assert_eq!(rewrite("***x***"), "<b>*x</b>*");
    }

    #[test]
    fn hash_runs_before_bold() {
        assert_eq!(
            rewrite("**[[a]]**"),
            "<b>0cc175b9c0f1b6a831c399e269772661</b>"
        );
    }

    #[test]
    fn strip_runs_before_bold() {
        assert_eq!(rewrite("((**c**))"), "<b></b>");
    }

    #[test]
    fn hash_sees_raw_content() {
        // Bold markers inside the brackets are hashed, not rendered.
        assert_eq!(rewrite("[[**a**]]"), BracketHash::replace("**a**"));
    }

    #[test]
    fn italic_wraps_bold() {
        assert_eq!(rewrite("__**x**__"), "<em><b>x</b></em>");
    }

    #[test]
    fn plain_text_unchanged() {
        let text = "nothing to see * here _ or [ there ( c";
        assert_eq!(rewrite(text), text);
        assert_eq!(rewrite(&rewrite(text)), text);
    }

    #[test]
    fn rewritten_output_is_stable() {
        let once = rewrite("**b** __i__ ((xc))");
        assert_eq!(rewrite(&once), once);
    }

    #[test]
    fn multibyte_content() {
        assert_eq!(rewrite("**héllo** ((çaC))"), "<b>héllo</b> ça");
    }
}
