//! Property-based tests for the token layer.
//!
//! These check the properties that unit tests can only sample:
//! 1. Keyword matching ignores case and accepts any medial blank run
//! 2. Digit strings wrap modulo 2^64 and flag exactly the overflowing inputs
//! 3. Rendering a decoded literal and re-parsing it gives the same value
//! 4. A failed attempt never moves the position seen by the next alternative

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use ftn_diagnostic::MessageKind;
use ftn_parse::render;
use ftn_parse::{
    any_char, attempt, boz_literal, char_literal, digit_string, hollerith_literal, tok, LexOptions,
    Parser, ParserExt, ScanState,
};
use proptest::prelude::*;

// -- Strategies --

/// Keywords that free-form source may write with or without a blank.
fn keyword_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "end if",
        "end do",
        "go to",
        "select case",
        "double precision",
        "block data",
        "else if",
        "in out",
    ])
}

/// A run of blanks and tabs, possibly empty.
fn blanks_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t]{0,4}").expect("valid regex")
}

/// Printable ASCII text.
fn printable_strategy(max: usize) -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!("[ -~]{{0,{max}}}")).expect("valid regex")
}

fn quote_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['\'', '"'])
}

/// Rewrite `keyword` as source: each medial blank becomes `blanks`, and
/// letters are upper-cased where `upper` says so.
fn spell(keyword: &str, blanks: &str, upper: &[bool]) -> String {
    keyword
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if c == ' ' {
                blanks.to_string()
            } else if upper.get(i).copied().unwrap_or(false) {
                c.to_ascii_uppercase().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Consumes up to `n` characters, reports a message, and fails.
struct ConsumeThenFail(usize);

impl Parser for ConsumeThenFail {
    type Output = char;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<char> {
        for _ in 0..self.0 {
            state.next_char();
        }
        let at = state.location();
        state.say(at, MessageKind::ExpectedDigit);
        None
    }
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Any medial blank run and any casing match the keyword in full.
    #[test]
    fn prop_keyword_medial_blanks_and_case(
        keyword in keyword_strategy(),
        lead in blanks_strategy(),
        medial in blanks_strategy(),
        upper in prop::collection::vec(any::<bool>(), 16),
    ) {
        let source = format!("{lead}{}{lead}", spell(keyword, &medial, &upper));
        let mut state = ScanState::new(&source, LexOptions::default());
        prop_assert!(tok(keyword).parse(&mut state).is_some());
        prop_assert!(state.is_at_end());
        prop_assert!(state.messages().is_empty());
    }

    /// A mismatch reports the whole reference token, never a fragment.
    #[test]
    fn prop_keyword_mismatch_names_whole_token(
        keyword in keyword_strategy(),
        cut in 1usize..4,
    ) {
        let source: String = keyword.chars().take(keyword.len() - cut).collect();
        let source = format!("{source}#");
        let mut state = ScanState::new(&source, LexOptions::default());
        prop_assert!(tok(keyword).parse(&mut state).is_none());
        let kinds: Vec<_> = state.messages().iter().map(|m| m.kind).collect();
        prop_assert_eq!(kinds, vec![MessageKind::ExpectedToken(keyword)]);
    }

    /// Digit strings equal their value modulo 2^64, flagged when too large.
    #[test]
    fn prop_digit_string_wraps(digits in "[0-9]{1,38}") {
        let exact: u128 = digits.parse().unwrap();
        let mut state = ScanState::new(&digits, LexOptions::default());
        let parsed = digit_string().parse(&mut state).unwrap();
        #[allow(clippy::cast_possible_truncation, reason = "truncation is the property under test")]
        let wrapped = exact as u64;
        prop_assert_eq!(parsed.value, wrapped);
        prop_assert_eq!(parsed.overflow, exact > u128::from(u64::MAX));
        prop_assert_eq!(state.messages().has_kind(&MessageKind::DecimalOverflow), parsed.overflow);
        prop_assert!(state.is_at_end());
    }

    /// Printable text survives quoting and re-parsing.
    #[test]
    fn prop_quoted_round_trip(text in printable_strategy(24), quote in quote_strategy()) {
        let options = LexOptions::default();
        let source = render::quoted(&text, quote, options);
        let mut state = ScanState::new(&source, options);
        prop_assert_eq!(char_literal().parse(&mut state), Some(text));
        prop_assert!(state.is_at_end());
    }

    /// With escapes on, any ASCII text survives, control characters included.
    #[test]
    fn prop_escaped_round_trip(
        text in prop::string::string_regex("[\\x00-\\x7F]{0,24}").expect("valid regex"),
        quote in quote_strategy(),
    ) {
        let options = LexOptions::BACKSLASH_ESCAPES;
        let source = render::quoted(&text, quote, options);
        let mut state = ScanState::new(&source, options);
        prop_assert_eq!(char_literal().parse(&mut state), Some(text));
        prop_assert!(state.messages().is_empty());
    }

    /// Every u64 survives hexadecimal BOZ rendering.
    #[test]
    fn prop_boz_round_trip(value in any::<u64>()) {
        let source = render::boz_hex(value);
        let mut state = ScanState::new(&source, LexOptions::STRICT_CONFORMANCE);
        prop_assert_eq!(boz_literal().parse(&mut state), Some(value));
    }

    /// Every u64 survives decimal rendering.
    #[test]
    fn prop_digit_string_round_trip(value in any::<u64>()) {
        let source = render::digit_string(value);
        let mut state = ScanState::new(&source, LexOptions::default());
        prop_assert_eq!(digit_string().parse(&mut state).map(|v| v.value), Some(value));
    }

    /// Nonempty printable text survives Hollerith rendering.
    #[test]
    fn prop_hollerith_round_trip(text in printable_strategy(24).prop_filter("nonempty", |t| !t.is_empty())) {
        let source = render::hollerith(&text);
        let mut state = ScanState::new(&source, LexOptions::default());
        prop_assert_eq!(hollerith_literal().parse(&mut state), Some(text));
    }

    /// A failed attempt restores the position and drops its messages, so
    /// the next alternative starts where the first did.
    #[test]
    fn prop_attempt_does_not_leak(source in "[a-z]{1,12}", k in 1usize..16) {
        let mut state = ScanState::new(&source, LexOptions::default());
        prop_assert!(attempt(ConsumeThenFail(k)).parse(&mut state).is_none());
        prop_assert_eq!(state.location(), 0);
        prop_assert!(state.messages().is_empty());

        let first = source.chars().next();
        let chosen = ConsumeThenFail(k).or(any_char()).parse(&mut state);
        prop_assert_eq!(chosen, first);
        prop_assert_eq!(state.location(), 1);
        prop_assert!(state.messages().is_empty());
    }
}
