use oxidized_plugin_lint::parser::frontmatter::{split, FrontmatterError};
use oxidized_plugin_lint::parser::RawDocument;
use std::path::Path;

// ---------------------------------------------------------------------------
// Splitting
// ---------------------------------------------------------------------------

#[test]
fn splits_frontmatter_and_body() {
    let s = split("---\nname: test-agent\nmodel: sonnet\n---\n## Triggers\n- review\n").unwrap();
    assert_eq!(s.frontmatter.get("name"), Some("test-agent"));
    assert_eq!(s.frontmatter.get("model"), Some("sonnet"));
    assert_eq!(s.frontmatter.len(), 2);
    assert_eq!(s.body, "## Triggers\n- review\n");
    assert_eq!(s.body_line, 5);
}

#[test]
fn file_without_opening_delimiter_is_all_body() {
    let s = split("# Title\nname: not-frontmatter\n").unwrap();
    assert!(s.frontmatter.is_empty());
    assert_eq!(s.body, "# Title\nname: not-frontmatter\n");
    assert_eq!(s.body_line, 1);
}

#[test]
fn delimiter_must_be_first_line() {
    let s = split("\n---\nname: x\n---\n").unwrap();
    assert!(s.frontmatter.is_empty());
}

#[test]
fn empty_frontmatter_block() {
    let s = split("---\n---\nbody\n").unwrap();
    assert!(s.frontmatter.is_empty());
    assert_eq!(s.body, "body\n");
    assert_eq!(s.body_line, 3);
}

#[test]
fn unterminated_frontmatter_fails() {
    let err = split("---\nname: x\ndescription: never closed\n## Role\n").unwrap_err();
    assert_eq!(err, FrontmatterError::Unterminated { line: 1 });
}

#[test]
fn raw_document_propagates_unterminated() {
    let result = RawDocument::parse(Path::new("agents/a.md"), "---\nname: x\n");
    assert!(matches!(result, Err(FrontmatterError::Unterminated { .. })));
}

#[test]
fn closing_delimiter_tolerates_trailing_whitespace_and_crlf() {
    let s = split("---\r\nname: crlf\r\n---  \r\nbody\r\n").unwrap();
    assert_eq!(s.frontmatter.get("name"), Some("crlf"));
    assert_eq!(s.body, "body\r\n");
}

#[test]
fn byte_order_mark_is_ignored() {
    let s = split("\u{feff}---\nname: bom\n---\n").unwrap();
    assert_eq!(s.frontmatter.get("name"), Some("bom"));
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

#[test]
fn quotes_are_stripped_when_both_ends_match() {
    let s = split("---\na: \"double\"\nb: 'single'\nc: \"mixed'\nd: it's\n---\n").unwrap();
    assert_eq!(s.frontmatter.get("a"), Some("double"));
    assert_eq!(s.frontmatter.get("b"), Some("single"));
    assert_eq!(s.frontmatter.get("c"), Some("\"mixed'"));
    assert_eq!(s.frontmatter.get("d"), Some("it's"));
}

#[test]
fn value_keeps_inner_colons() {
    let s = split("---\ndescription: Use when: reviewing code\n---\n").unwrap();
    assert_eq!(s.frontmatter.get("description"), Some("Use when: reviewing code"));
}

#[test]
fn non_key_lines_are_ignored() {
    let content = "---\n\
                   name: tolerant\n\
                   # a comment\n\
                   just some words\n\
                   - list item\n\
                   https://example.com\n\
                   tools:\n  - Read\n  - Grep\n\
                   ---\n";
    let s = split(content).unwrap();
    assert_eq!(s.frontmatter.get("name"), Some("tolerant"));
    assert_eq!(s.frontmatter.raw("tools"), Some(""));
    assert_eq!(s.frontmatter.len(), 2);
}

#[test]
fn empty_value_reads_as_missing() {
    let s = split("---\ncategory:\ncolor: \"\"\n---\n").unwrap();
    assert_eq!(s.frontmatter.get("category"), None);
    assert_eq!(s.frontmatter.get("color"), None);
    assert_eq!(s.frontmatter.raw("category"), Some(""));
}

#[test]
fn literal_and_folded_blocks() {
    let content = "---\n\
                   literal: |\n  first\n  second\n\
                   folded: >\n  one\n  two\n\
                   name: after\n\
                   ---\n";
    let s = split(content).unwrap();
    assert_eq!(s.frontmatter.get("literal"), Some("first\nsecond"));
    assert_eq!(s.frontmatter.get("folded"), Some("one two"));
    assert_eq!(s.frontmatter.get("name"), Some("after"));
}

#[test]
fn later_duplicate_key_wins() {
    let s = split("---\nmodel: opus\nmodel: haiku\n---\n").unwrap();
    assert_eq!(s.frontmatter.get("model"), Some("haiku"));
    assert_eq!(s.frontmatter.line("model"), Some(3));
}

#[test]
fn key_lines_are_recorded() {
    let s = split("---\nname: a\n\ncolor: red\n---\n").unwrap();
    assert_eq!(s.frontmatter.line("name"), Some(2));
    assert_eq!(s.frontmatter.line("color"), Some(4));
    assert_eq!(s.frontmatter.line("model"), None);
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[test]
fn display_round_trips() {
    let content = "---\n\
                   name: \"test-agent\"\n\
                   description: Reviews code: carefully\n\
                   pattern_version: '1.0'\n\
                   notes: |\n  line one\n  line two\n\
                   padded: \"  spaced  \"\n\
                   empty:\n\
                   ---\nbody\n";
    let original = split(content).unwrap().frontmatter;

    let rendered = format!("---\n{original}---\n");
    let reparsed = split(&rendered).unwrap().frontmatter;

    let a: Vec<_> = original.iter().collect();
    let b: Vec<_> = reparsed.iter().collect();
    assert_eq!(a, b);
}

#[test]
fn display_writes_plain_key_value_lines() {
    let fm = split("---\nmodel: sonnet\ncolor: blue\n---\n").unwrap().frontmatter;
    assert_eq!(fm.to_string(), "color: blue\nmodel: sonnet\n");
}
