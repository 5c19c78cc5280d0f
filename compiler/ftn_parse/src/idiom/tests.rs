use super::*;
use crate::chars::{LETTER, SPACES};
use crate::combinator::some;
use crate::{LexOptions, ScanState};
use ftn_diagnostic::MessageKind;
use pretty_assertions::assert_eq;

/// A run of letters after optional blanks, lower-cased.
fn word(state: &mut ScanState<'_>) -> Option<String> {
    SPACES.parse(state);
    let letters = some(LETTER).parse(state)?;
    Some(letters.into_iter().collect())
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

// === optional_before_colons ===

#[test]
fn comma_form_with_single_item() {
    let mut st = ScanState::new(", PARAMETER :: n", LexOptions::default());
    let attrs = optional_before_colons(nonempty_list(word)).parse(&mut st);
    assert_eq!(attrs, Some(words(&["parameter"])));
    assert_eq!(st.peek_char(), Some('n'));
}

#[test]
fn comma_form_with_list() {
    let mut st = ScanState::new(", save, target :: x", LexOptions::default());
    let attrs = optional_before_colons(nonempty_list(word)).parse(&mut st);
    assert_eq!(attrs, Some(words(&["save", "target"])));
}

#[test]
fn colons_alone_yield_default() {
    let mut st = ScanState::new(" :: x", LexOptions::default());
    let attrs = optional_before_colons(nonempty_list(word)).parse(&mut st);
    assert_eq!(attrs, Some(vec![]));
    assert_eq!(st.peek_char(), Some('x'));
}

#[test]
fn neither_comma_nor_colons_yield_default_without_consuming() {
    let mut st = ScanState::new(" x", LexOptions::default());
    let attrs = optional_before_colons(nonempty_list(word)).parse(&mut st);
    assert_eq!(attrs, Some(vec![]));
    assert_eq!(st.location(), 0);
}

#[test]
fn comma_without_colons_reports_missing_colons() {
    let mut st = ScanState::new(", save x", LexOptions::default());
    let attrs = optional_before_colons(nonempty_list(word)).parse(&mut st);
    assert_eq!(attrs, None);
    assert_eq!(st.location(), 0);
    let kinds: Vec<_> = st.messages().iter().map(|m| m.kind).collect();
    assert_eq!(kinds, vec![MessageKind::ExpectedToken("::")]);
    assert_eq!(st.messages().last().map(|m| m.span.start), Some(7));
}

// === Brackets ===

#[test]
fn parenthesized_item() {
    let mut st = ScanState::new(" ( abc ) d", LexOptions::default());
    assert_eq!(parenthesized(word).parse(&mut st), Some("abc".to_string()));
    assert_eq!(st.peek_char(), Some('d'));
}

#[test]
fn parenthesized_missing_close() {
    let mut st = ScanState::new("(abc", LexOptions::default());
    assert_eq!(parenthesized(word).parse(&mut st), None);
    assert!(st.messages().has_kind(&MessageKind::ExpectedToken(")")));
}

#[test]
fn bracketed_item() {
    let mut st = ScanState::new("[x]", LexOptions::default());
    assert_eq!(bracketed(word).parse(&mut st), Some("x".to_string()));
    assert!(st.is_at_end());
}

// === nonempty_list ===

#[test]
fn list_with_blanks_around_commas() {
    let mut st = ScanState::new("a , b,c", LexOptions::default());
    assert_eq!(nonempty_list(word).parse(&mut st), Some(words(&["a", "b", "c"])));
    assert!(st.is_at_end());
}

#[test]
fn list_leaves_trailing_comma() {
    let mut st = ScanState::new("a, b, 1", LexOptions::default());
    assert_eq!(nonempty_list(word).parse(&mut st), Some(words(&["a", "b"])));
    assert_eq!(st.peek_char(), Some(','));
    assert!(st.messages().is_empty());
}

#[test]
fn list_needs_one_item() {
    let mut st = ScanState::new("1", LexOptions::default());
    assert_eq!(nonempty_list(word).parse(&mut st), None);
}
