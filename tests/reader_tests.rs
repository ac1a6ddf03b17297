//! Tests for the properties reader
//!
//! These tests verify:
//! - Comment attachment and blank-line handling
//! - Separator forms and escaping
//! - Line continuation
//! - Streaming reads from files and error reporting

mod common;

use std::fs;
use std::io::Cursor;

use propstore::format::{parse, LineParser, PropertiesReader};
use propstore::{Entry, StoreError};

use common::{by_key, check_fixture_entries, fixture_path, setup_temp_path};

// =============================================================================
// Fixture Tests
// =============================================================================

#[test]
fn test_read_fixture() {
    let entries = PropertiesReader::open(&fixture_path()).unwrap().read_all().unwrap();
    check_fixture_entries(&by_key(entries));
}

#[test]
fn test_fixture_entries_in_file_order() {
    let entries = PropertiesReader::open(&fixture_path()).unwrap().read_all().unwrap();
    let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();

    assert_eq!(
        keys,
        vec![
            "wikipedia",
            "google",
            "yahoo",
            "pinterest",
            "facebook",
            "a-we:ird=key",
            "move-setting",
            "hello",
        ]
    );
}

// =============================================================================
// Comment Tests
// =============================================================================

#[test]
fn test_comment_block_attaches_to_next_key() {
    let entries = parse("# first\n! second\n#third\nkey=value\nother=x\n");

    assert_eq!(entries[0].comments, vec!["first", "second", "third"]);
    assert!(entries[1].comments.is_empty());
}

#[test]
fn test_blank_lines_do_not_reset_comments() {
    let entries = parse("# above\n\n   \n\t\nkey=value\n");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].comments, vec!["above"]);
}

#[test]
fn test_indented_comment() {
    let entries = parse("   # indented comment\nkey=value\n");
    assert_eq!(entries[0].comments, vec!["indented comment"]);
}

#[test]
fn test_trailing_comments_are_dropped() {
    let entries = parse("key=value\n# nothing follows\n");

    assert_eq!(entries.len(), 1);
    assert!(entries[0].comments.is_empty());
}

#[test]
fn test_empty_input() {
    assert!(parse("").is_empty());
    assert!(parse("\n\n# only a comment\n").is_empty());
}

// =============================================================================
// Separator Tests
// =============================================================================

#[test]
fn test_separator_forms() {
    let entries = parse("a=1\nb:2\nc 3\nd = 4\ne\t:\t5\nf\n");
    let values: Vec<(&str, &str)> = entries
        .iter()
        .map(|e| (e.key.as_str(), e.value.as_str()))
        .collect();

    assert_eq!(
        values,
        vec![("a", "1"), ("b", "2"), ("c", "3"), ("d", "4"), ("e", "5"), ("f", "")]
    );
}

#[test]
fn test_escaped_separators_in_key() {
    let entries = parse("a-we\\:ird\\=key=value\n");
    assert_eq!(entries[0].key, "a-we:ird=key");
    assert_eq!(entries[0].value, "value");
}

#[test]
fn test_escaped_space_in_key() {
    let entries = parse("with\\ space = value\n");
    assert_eq!(entries[0].key, "with space");
    assert_eq!(entries[0].value, "value");
}

#[test]
fn test_separators_inside_value_are_literal() {
    let entries = parse("url=http://example.com/?a=b\n");
    assert_eq!(entries[0].value, "http://example.com/?a=b");
}

#[test]
fn test_value_escapes() {
    let entries = parse("k=tab\\there \\u3053 back\\\\slash\n");
    assert_eq!(entries[0].value, "tab\there こ back\\slash");
}

// =============================================================================
// Continuation Tests
// =============================================================================

#[test]
fn test_continuation_joins_with_newline() {
    let entries = parse("k=first \\\n    second\\\n\tthird\nnext=x\n");

    assert_eq!(entries[0].value, "first \nsecond\nthird");
    assert_eq!(entries[1].key, "next");
}

#[test]
fn test_even_trailing_backslashes_do_not_continue() {
    let entries = parse("k=ends with\\\\\nnext=x\n");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].value, "ends with\\");
}

#[test]
fn test_continuation_line_is_never_a_comment() {
    let entries = parse("k=a\\\n  # not a comment\n");
    assert_eq!(entries[0].value, "a\n# not a comment");
}

#[test]
fn test_continuation_at_end_of_input() {
    let entries = parse("k=dangling\\");
    assert_eq!(entries, vec![Entry::new("k", "dangling")]);
}

#[test]
fn test_crlf_line_endings() {
    let entries = parse("# note\r\nk=v\r\nmulti=a\\\r\n  b\r\n");

    assert_eq!(entries[0], Entry::with_comments("k", "v", ["note"]));
    assert_eq!(entries[1].value, "a\nb");
}

// =============================================================================
// Duplicate Keys
// =============================================================================

#[test]
fn test_duplicates_are_all_returned() {
    let entries = parse("k=1\nk=2\n");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].value, "1");
    assert_eq!(entries[1].value, "2");
}

// =============================================================================
// Streaming Tests
// =============================================================================

#[test]
fn test_streaming_matches_parse() {
    let text = fs::read_to_string(fixture_path()).unwrap();
    let streamed: Vec<Entry> = PropertiesReader::new(Cursor::new(text.as_bytes()))
        .entries()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(streamed, parse(&text));
}

#[test]
fn test_next_entry_until_exhausted() {
    let mut reader = PropertiesReader::new(Cursor::new("a=1\nb=2"));

    assert_eq!(reader.next_entry().unwrap(), Some(Entry::new("a", "1")));
    assert_eq!(reader.next_entry().unwrap(), Some(Entry::new("b", "2")));
    assert_eq!(reader.next_entry().unwrap(), None);
    assert_eq!(reader.next_entry().unwrap(), None);
}

#[test]
fn test_line_parser_counts_lines() {
    let mut parser = LineParser::new();

    assert!(parser.feed("# c").is_none());
    assert!(parser.feed("").is_none());
    assert_eq!(parser.feed("k=v"), Some(Entry::with_comments("k", "v", ["c"])));
    assert!(parser.finish().is_none());
    assert_eq!(parser.lines_seen(), 3);
}

#[test]
fn test_open_missing_file() {
    let (_temp, path) = setup_temp_path();

    match PropertiesReader::open(&path) {
        Err(StoreError::FileNotFound(p)) => assert_eq!(p, path),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("expected FileNotFound"),
    }
}

#[test]
fn test_invalid_utf8_is_io_error() {
    let (_temp, path) = setup_temp_path();
    fs::write(&path, b"key=\xff\xfe\n").unwrap();

    let result = PropertiesReader::open(&path).unwrap().read_all();
    assert!(matches!(result, Err(StoreError::Io(_))));
}

#[test]
fn test_large_input_is_iterative() {
    let text: String = (0..50_000).map(|i| format!("key{}=value{}\n", i, i)).collect();
    let entries = parse(&text);

    assert_eq!(entries.len(), 50_000);
    assert_eq!(entries[49_999], Entry::new("key49999", "value49999"));
}
