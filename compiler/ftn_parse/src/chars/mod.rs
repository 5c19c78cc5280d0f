//! Single-character parsers and ASCII classifiers.
//!
//! The classifiers are ASCII-only: Fortran source character classes do not
//! extend past 7-bit, and anything else simply fails to classify.

use ftn_diagnostic::MessageKind;

use crate::combinator::{Map, Parser, Success};
use crate::ScanState;

/// `0`-`9`.
#[inline]
pub const fn is_decimal_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// `0`-`7`.
#[inline]
pub const fn is_octal_digit(ch: char) -> bool {
    matches!(ch, '0'..='7')
}

/// `0`-`9`, `a`-`f`, `A`-`F`.
#[inline]
pub const fn is_hexadecimal_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

/// ASCII letters only.
#[inline]
pub const fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// ASCII lower-casing; everything else passes through.
#[inline]
pub const fn to_lower(ch: char) -> char {
    ch.to_ascii_lowercase()
}

/// The value of a hexadecimal digit, case-insensitive.
#[inline]
pub const fn hex_digit_value(ch: char) -> Option<u32> {
    ch.to_digit(16)
}

/// Consume one character if it satisfies `predicate`.
///
/// At end of input or on a mismatch, reports `message` at the position the
/// character was read from. The mismatched character stays consumed; wrap
/// in [`attempt`](crate::attempt) to undo it.
#[derive(Clone, Copy, Debug)]
pub struct CharPredicateGuard {
    predicate: fn(char) -> bool,
    message: MessageKind,
}

impl CharPredicateGuard {
    pub const fn new(predicate: fn(char) -> bool, message: MessageKind) -> Self {
        CharPredicateGuard { predicate, message }
    }
}

impl Parser for CharPredicateGuard {
    type Output = char;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<char> {
        let at = state.location();
        match state.next_char() {
            Some(ch) if (self.predicate)(ch) => Some(ch),
            _ => {
                state.say(at, self.message);
                None
            }
        }
    }
}

/// A decimal digit; reports `expected digit`.
pub const DIGIT: CharPredicateGuard =
    CharPredicateGuard::new(is_decimal_digit, MessageKind::ExpectedDigit);

/// An octal digit; reports `expected octal digit`.
pub const OCTAL_DIGIT: CharPredicateGuard =
    CharPredicateGuard::new(is_octal_digit, MessageKind::ExpectedOctalDigit);

/// A hexadecimal digit; reports `expected hexadecimal digit`.
pub const HEX_DIGIT: CharPredicateGuard =
    CharPredicateGuard::new(is_hexadecimal_digit, MessageKind::ExpectedHexDigit);

/// A letter, folded to lower case; reports `expected letter`.
pub const LETTER: Map<CharPredicateGuard, fn(char) -> char> = Map::new(
    CharPredicateGuard::new(is_letter, MessageKind::ExpectedLetter),
    to_lower,
);

/// Exactly the character `ch`; reports `expected '<ch>'`.
#[derive(Clone, Copy, Debug)]
pub struct CharMatch {
    ch: char,
}

impl CharMatch {
    pub const fn new(ch: char) -> Self {
        CharMatch { ch }
    }
}

impl Parser for CharMatch {
    type Output = char;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<char> {
        let at = state.location();
        match state.next_char() {
            Some(ch) if ch == self.ch => Some(ch),
            _ => {
                state.say(at, MessageKind::ExpectedChar(self.ch));
                None
            }
        }
    }
}

/// One blank or tab. Silent on failure and does not consume.
#[derive(Clone, Copy, Debug, Default)]
pub struct Space;

impl Parser for Space {
    type Output = Success;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<Success> {
        match state.peek_char() {
            Some(' ' | '\t') => {
                state.next_char();
                Some(Success)
            }
            _ => None,
        }
    }
}

/// Any run of blanks and tabs, possibly empty. Never fails.
///
/// Equivalent to `skip_many(Space)`, but skips the run in one pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spaces;

impl Parser for Spaces {
    type Output = Success;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<Success> {
        state.skip_blanks();
        Some(Success)
    }
}

/// See [`Spaces`].
pub const SPACES: Spaces = Spaces;
