use super::*;
use crate::{boz_literal, char_literal, digit_string as digits, hollerith_literal, Parser, ScanState};
use pretty_assertions::assert_eq;

#[test]
fn quoted_doubles_quote() {
    assert_eq!(quoted("it's", '\'', LexOptions::default()), "'it''s'");
    assert_eq!(quoted("it's", '"', LexOptions::default()), "\"it's\"");
}

#[test]
fn quoted_without_escapes_copies_backslash() {
    assert_eq!(quoted("a\\b", '\'', LexOptions::default()), "'a\\b'");
}

#[test]
fn quoted_with_escapes() {
    let options = LexOptions::BACKSLASH_ESCAPES;
    assert_eq!(quoted("a\nb", '"', options), "\"a\\nb\"");
    assert_eq!(quoted("a\\b", '"', options), "\"a\\\\b\"");
    assert_eq!(quoted("\x01", '"', options), "\"\\001\"");
    assert_eq!(quoted("\x7f", '"', options), "\"\\177\"");
}

#[test]
fn quoted_round_trips_with_escapes() {
    let options = LexOptions::BACKSLASH_ESCAPES;
    let text = "tab\there 'quote' \"dq\" \\ \x01\x1b end";
    let source = quoted(text, '\'', options);
    let mut st = ScanState::new(&source, options);
    assert_eq!(char_literal().parse(&mut st), Some(text.to_string()));
    assert!(st.is_at_end());
    assert!(st.messages().is_empty());
}

#[test]
fn boz_hex_round_trips() {
    assert_eq!(boz_hex(255), "Z'FF'");
    assert_eq!(boz_hex(0), "Z'0'");
    for value in [0, 1, 0xdead_beef, u64::MAX] {
        let source = boz_hex(value);
        let mut st = ScanState::new(&source, LexOptions::STRICT_CONFORMANCE);
        assert_eq!(boz_literal().parse(&mut st), Some(value));
    }
}

#[test]
fn hollerith_counts_characters() {
    assert_eq!(hollerith("abc"), "3Habc");
    let mut st = ScanState::new("3Habc", LexOptions::default());
    assert_eq!(hollerith_literal().parse(&mut st), Some("abc".to_string()));
}

#[test]
fn digit_string_round_trips() {
    assert_eq!(digit_string(0), "0");
    let source = digit_string(u64::MAX);
    let mut st = ScanState::new(&source, LexOptions::default());
    assert_eq!(digits().parse(&mut st).map(|v| v.value), Some(u64::MAX));
}
