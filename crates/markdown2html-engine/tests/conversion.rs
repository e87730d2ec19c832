use markdown2html_engine::{Converter, HeadingOverflow, RenderOptions, convert, convert_str};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
#[case(5)]
#[case(6)]
fn heading_levels(#[case] level: usize) {
    let line = format!("{} text", "#".repeat(level));
    assert_eq!(convert([line]), format!("<h{level}>text</h{level}>\n"));
}

#[test]
fn unordered_items_share_one_list() {
    assert_eq!(
        convert(["- a", "- b"]),
        "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n"
    );
}

#[test]
fn ordered_list_closed_before_heading() {
    assert_eq!(
        convert(["* a", "# H"]),
        "<ol>\n<li>a</li>\n</ol>\n<h1>H</h1>\n"
    );
}

#[test]
fn consecutive_lines_merge_into_one_paragraph() {
    assert_eq!(
        convert(["line1", "line2"]),
        "<p>\nline1<br/>\nline2\n</p>\n"
    );
}

#[test]
fn inline_substitutions_inside_blocks() {
    let html = convert_str("# [[abc]]\n- ((Cocoa))\n* **x**\n__y__");
    assert_eq!(
        html,
        concat!(
            "<h1>900150983cd24fb0d6963f7d28e17f72</h1>\n",
            "<ul>\n<li>oo</li>\n</ul>\n",
            "<ol>\n<li><b>x</b></li>\n</ol>\n",
            "<p>\n<em>y</em>\n</p>\n",
        )
    );
}

#[test]
fn bold_hash_composition() {
    assert_eq!(
        convert(["**[[a]]**"]),
        "<p>\n<b>0cc175b9c0f1b6a831c399e269772661</b>\n</p>\n"
    );
}

#[test]
fn unclosed_list_closed_exactly_once() {
    let html = convert(["- a", "", "- b", ""]);
    assert_eq!(html, "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
    assert_eq!(html.matches("</ul>").count(), 1);
}

#[test]
fn blank_line_does_not_close_list_but_paragraph_does() {
    assert_eq!(
        convert(["- a", "", "after"]),
        "<ul>\n<li>a</li>\n</ul>\n<p>\nafter\n</p>\n"
    );
}

#[test]
fn overlong_heading_is_paragraph_text_by_default() {
    assert_eq!(
        convert(["####### deep", "next"]),
        "<p>\n####### deep<br/>\nnext\n</p>\n"
    );
}

#[test]
fn overlong_heading_dropped_with_drop_policy() {
    let converter = Converter::new(RenderOptions {
        heading_overflow: HeadingOverflow::Drop,
        ..RenderOptions::default()
    });
    // Dropped lines act as blank lines and so end the paragraph.
    assert_eq!(
        converter.convert(["a", "####### deep", "b"]),
        "<p>\na\n</p>\n<p>\nb\n</p>\n"
    );
}

#[test]
fn indentation_is_ignored() {
    assert_eq!(
        convert(["   ## Indented", "\t- item"]),
        "<h2>Indented</h2>\n<ul>\n<li>item</li>\n</ul>\n"
    );
}

#[test]
fn no_escaping_of_raw_html_characters() {
    assert_eq!(
        convert(["a <tag> & b"]),
        "<p>\na <tag> & b\n</p>\n"
    );
}
