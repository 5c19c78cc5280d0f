//! Quoted character literals.
//!
//! A literal body runs up to a bare closing quote. Inside it a doubled
//! quote stands for one quote character. When the unit enables backslash
//! escapes, `\` introduces a C-style escape:
//!
//! - `\a \b \f \n \r \t \v`: control characters
//! - `\' \" \\`: the character itself
//! - `\ooo`: one to three octal digits, at most `\377`
//! - `\xhh`: `x` or `X` and up to two hexadecimal digits
//!
//! An unknown escape reports `bad escaped character` and yields the
//! character after the backslash. An unescaped newline always ends the
//! literal as unclosed.

use ftn_diagnostic::MessageKind;
use tracing::trace;

use super::digit_value;
use crate::chars::{is_octal_digit, CharMatch, CharPredicateGuard, HEX_DIGIT, OCTAL_DIGIT, SPACES};
use crate::combinator::{Attempt, Parser};
use crate::ScanState;

/// One decoded character of a literal body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LiteralChar {
    pub ch: char,
    /// Produced by a backslash escape rather than read as-is.
    ///
    /// An escaped quote never terminates the literal.
    pub was_escaped: bool,
}

impl LiteralChar {
    pub const fn bare(ch: char) -> Self {
        LiteralChar {
            ch,
            was_escaped: false,
        }
    }

    pub const fn escaped(ch: char) -> Self {
        LiteralChar {
            ch,
            was_escaped: true,
        }
    }
}

const OPTIONAL_OCTAL_DIGIT: Attempt<CharPredicateGuard> = Attempt::new(OCTAL_DIGIT);
const OPTIONAL_HEX_DIGIT: Attempt<CharPredicateGuard> = Attempt::new(HEX_DIGIT);

/// A single character of a literal body, escapes decoded.
#[derive(Clone, Copy, Debug, Default)]
pub struct CharLiteralChar;

impl Parser for CharLiteralChar {
    type Output = LiteralChar;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<LiteralChar> {
        let at = state.location();
        let ch = state.next_char()?;
        if ch == '\n' {
            state.say(at, MessageKind::UnclosedCharConstant);
            return None;
        }
        if ch != '\\' || !state.backslash_escapes() {
            return Some(LiteralChar::bare(ch));
        }

        let decoded = match state.next_char()? {
            'a' => '\x07',
            'b' => '\x08',
            'f' => '\x0c',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\x0b',
            quote @ ('"' | '\'' | '\\') => quote,
            '\n' => {
                state.say(at, MessageKind::UnclosedCharConstant);
                return None;
            }
            first if is_octal_digit(first) => octal_escape(state, first),
            'x' | 'X' => hex_escape(state),
            other => {
                state.say(at, MessageKind::BadEscapedChar);
                other
            }
        };
        Some(LiteralChar::escaped(decoded))
    }
}

/// Up to two more octal digits after `first`; one if `first` is above 3.
fn octal_escape(state: &mut ScanState<'_>, first: char) -> char {
    let mut value = digit_value(first, 8);
    let more = if value > 3 { 1 } else { 2 };
    for _ in 0..more {
        let Some(digit) = OPTIONAL_OCTAL_DIGIT.parse(state) else {
            break;
        };
        value = value * 8 + digit_value(digit, 8);
    }
    char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Up to two hexadecimal digits; none at all decodes to NUL.
fn hex_escape(state: &mut ScanState<'_>) -> char {
    let mut value = 0;
    for _ in 0..2 {
        let Some(digit) = OPTIONAL_HEX_DIGIT.parse(state) else {
            break;
        };
        value = value * 16 + digit_value(digit, 16);
    }
    char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// The body of a literal opened with `quote`, up to and including its
/// closing quote.
///
/// The opening quote must already have been consumed.
#[derive(Clone, Copy, Debug)]
pub struct CharLiteral {
    quote: char,
}

impl CharLiteral {
    pub const fn new(quote: char) -> Self {
        CharLiteral { quote }
    }
}

impl Parser for CharLiteral {
    type Output = String;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<String> {
        let start = state.location();
        let doubled = Attempt::new(CharMatch::new(self.quote));
        let mut text = String::new();
        while let Some(unit) = Attempt::new(CharLiteralChar).parse(state) {
            if unit.ch == self.quote && !unit.was_escaped && doubled.parse(state).is_none() {
                return Some(text);
            }
            text.push(unit.ch);
        }
        trace!(at = start, "unclosed character literal");
        state.say(start, MessageKind::UnclosedCharConstant);
        None
    }
}

/// A complete quoted literal: optional blanks, `'` or `"`, then the body.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuotedCharLiteral;

impl Parser for QuotedCharLiteral {
    type Output = String;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<String> {
        SPACES.parse(state);
        let quote = state.peek_char().filter(|&c| matches!(c, '\'' | '"'))?;
        state.next_char();
        CharLiteral::new(quote).parse(state)
    }
}

/// See [`QuotedCharLiteral`].
pub const fn char_literal() -> QuotedCharLiteral {
    QuotedCharLiteral
}
