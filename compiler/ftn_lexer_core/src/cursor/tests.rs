use super::*;
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn current_returns_first_char() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), Some('a'));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn bump_moves_forward() {
    let mut cursor = Cursor::new("abc");
    assert_eq!(cursor.bump(), Some('a'));
    assert_eq!(cursor.current(), Some('b'));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn bump_through_entire_source() {
    let mut cursor = Cursor::new("hi");
    assert_eq!(cursor.bump(), Some('h'));
    assert_eq!(cursor.bump(), Some('i'));
    assert!(cursor.is_eof());
    assert_eq!(cursor.bump(), None);
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn bump_advances_by_utf8_width() {
    let mut cursor = Cursor::new("é!");
    assert_eq!(cursor.bump(), Some('é'));
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), Some('!'));
}

// === EOF Detection ===

#[test]
fn is_eof_on_empty_source() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
}

#[test]
fn interior_null_is_not_eof() {
    let mut cursor = Cursor::new("a\0b");
    cursor.bump();
    assert_eq!(cursor.current(), Some('\0'));
    assert!(!cursor.is_eof());
}

// === Snapshots ===

#[test]
fn copy_restores_position() {
    let mut cursor = Cursor::new("abcdef");
    let saved = cursor;
    cursor.bump();
    cursor.bump();
    assert_eq!(cursor.pos(), 2);
    cursor = saved;
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), Some('a'));
}

// === Slice ===

#[test]
fn slice_extracts_substring() {
    let cursor = Cursor::new("hello world");
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}

#[test]
fn slice_from_extracts_to_current() {
    let mut cursor = Cursor::new("abcdef");
    cursor.bump();
    cursor.bump();
    cursor.bump();
    assert_eq!(cursor.slice_from(0), "abc");
    assert_eq!(cursor.slice_from(1), "bc");
}

// === Eating ===

#[test]
fn eat_while_counts_chars() {
    let mut cursor = Cursor::new("123abc");
    assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), 3);
    assert_eq!(cursor.current(), Some('a'));
}

#[test]
fn eat_whitespace_skips_spaces_and_tabs_only() {
    let mut cursor = Cursor::new(" \t \nx");
    assert_eq!(cursor.eat_whitespace(), 3);
    assert_eq!(cursor.current(), Some('\n'));
}

#[test]
fn eat_past_stops_after_goal() {
    let mut cursor = Cursor::new("abc;def");
    assert!(cursor.eat_past(b';'));
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.current(), Some('d'));
}

#[test]
fn eat_past_missing_goal_goes_to_eof() {
    let mut cursor = Cursor::new("abc");
    assert!(!cursor.eat_past(b';'));
    assert!(cursor.is_eof());
}

mod proptest_eat_past {
    use super::super::Cursor;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn eat_past_matches_char_scan(text in "[a-z;\\n ]{0,64}") {
            let mut fast = Cursor::new(&text);
            let found = fast.eat_past(b';');

            let mut slow = Cursor::new(&text);
            let mut slow_found = false;
            while let Some(c) = slow.bump() {
                if c == ';' {
                    slow_found = true;
                    break;
                }
            }
            prop_assert_eq!(found, slow_found);
            prop_assert_eq!(fast.pos(), slow.pos());
        }
    }
}
