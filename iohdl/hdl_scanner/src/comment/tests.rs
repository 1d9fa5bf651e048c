use pretty_assertions::assert_eq;

use super::*;

fn cursor(src: &str) -> Cursor {
    Cursor::new(src.as_bytes().to_vec())
}

#[test]
fn reads_line_delimiter() {
    let mut cursor = cursor("// note");
    assert_eq!(CommentDelim::read(&mut cursor), Some(CommentDelim::Line));
    assert_eq!(cursor.current(), Some(' '));
}

#[test]
fn reads_block_delimiter() {
    let mut cursor = cursor("/* x */");
    assert_eq!(CommentDelim::read(&mut cursor), Some(CommentDelim::Block));
    assert_eq!(cursor.current(), Some(' '));
}

#[test]
fn reads_doc_delimiter() {
    let mut cursor = cursor("/** doc */");
    assert_eq!(CommentDelim::read(&mut cursor), Some(CommentDelim::Doc));
    assert_eq!(cursor.current(), Some(' '));
}

#[test]
fn reads_empty_delimiter() {
    let mut cursor = cursor("/**/x");
    assert_eq!(CommentDelim::read(&mut cursor), Some(CommentDelim::Empty));
    // The opener closed the comment; the cursor is past the final '/'.
    assert_eq!(cursor.current(), Some('x'));
}

#[test]
fn doc_delimiter_at_end_of_input() {
    let mut cursor = cursor("/**");
    assert_eq!(CommentDelim::read(&mut cursor), Some(CommentDelim::Doc));
    assert_eq!(cursor.current(), None);
}

#[test]
fn block_delimiter_at_end_of_input() {
    let mut cursor = cursor("/*");
    assert_eq!(CommentDelim::read(&mut cursor), Some(CommentDelim::Block));
    assert_eq!(cursor.current(), None);
}

#[test]
fn third_star_starts_doc_content() {
    // `/***/` is a doc comment whose content is `*`, closed by `*/`.
    let mut cursor = cursor("/***/");
    assert_eq!(CommentDelim::read(&mut cursor), Some(CommentDelim::Doc));
    assert_eq!(cursor.current(), Some('*'));
}

#[test]
fn bad_opener_consumes_only_the_slash() {
    let mut cursor = cursor("/x");
    assert_eq!(CommentDelim::read(&mut cursor), None);
    assert_eq!(cursor.current(), Some('x'));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn lone_slash_at_end_of_input() {
    let mut cursor = cursor("/");
    assert_eq!(CommentDelim::read(&mut cursor), None);
    assert_eq!(cursor.current(), None);
}
