//! Binary, octal and hexadecimal (BOZ) literal constants.
//!
//! Standard forms put the base letter first: `B'101'`, `O'17'`, `Z'FF'`.
//! As extensions, `X` is accepted as a hexadecimal marker and the base
//! letter may follow the closing quote instead (`'FF'Z`). Strict
//! conformance turns both extensions off.
//!
//! A prefix base letter followed by a quote commits to a BOZ literal: bad
//! characters and a missing closing quote are reported. The suffix form
//! is not known to be a BOZ literal until the suffix is seen, so the same
//! problems there are silent absences.

use ftn_diagnostic::MessageKind;
use tracing::trace;

use super::digit_value;
use crate::chars::{is_hexadecimal_digit, SPACES};
use crate::combinator::Parser;
use crate::ScanState;

/// Bits per digit for a base letter.
fn base_shift(ch: char) -> Option<u32> {
    match ch.to_ascii_uppercase() {
        'B' => Some(1),
        'O' => Some(3),
        'Z' | 'X' => Some(4),
        _ => None,
    }
}

/// Fold hexadecimal digit characters into a value, `shift` bits apiece.
///
/// Every digit must fit in `shift` bits and no set bit may be shifted out.
fn accumulate(digits: &str, shift: u32) -> Result<u64, MessageKind> {
    let mut value: u64 = 0;
    for ch in digits.chars() {
        let digit = u64::from(digit_value(ch, 16));
        if digit >> shift != 0 {
            return Err(MessageKind::BadBozDigit);
        }
        let shifted = value << shift;
        if shifted >> shift != value {
            return Err(MessageKind::ExcessiveBozDigits);
        }
        value = shifted | digit;
    }
    Ok(value)
}

/// A BOZ literal constant, skipping leading blanks.
#[derive(Clone, Copy, Debug, Default)]
pub struct BozLiteral;

impl Parser for BozLiteral {
    type Output = u64;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<u64> {
        SPACES.parse(state);

        let mut ch = state.next_char()?;
        if matches!(ch, 'x' | 'X') && state.strict_conformance() {
            return None;
        }
        let prefix = base_shift(ch);
        if prefix.is_some() {
            ch = state.next_char()?;
        }
        let quote = ch;
        if !matches!(quote, '\'' | '"') {
            return None;
        }

        let at = state.location();
        let committed = prefix.is_some();
        loop {
            match state.next_char() {
                Some(c) if c == quote => break,
                Some(c) if is_hexadecimal_digit(c) => {}
                Some(_) => {
                    if committed {
                        trace!(at, "bad character in BOZ literal");
                        state.say(at, MessageKind::BadBozDigit);
                    }
                    return None;
                }
                None => {
                    if committed {
                        state.say(at, MessageKind::UnclosedBozLiteral);
                    }
                    return None;
                }
            }
        }
        let quoted = state.text_from(at);
        let content = quoted.strip_suffix(quote).unwrap_or(quoted);

        let shift = match prefix {
            Some(shift) => shift,
            None => {
                if state.strict_conformance() {
                    return None;
                }
                let suffix = state.peek_char().and_then(base_shift)?;
                state.next_char();
                suffix
            }
        };

        if content.is_empty() {
            state.say(at, MessageKind::NoBozDigit);
            return None;
        }
        match accumulate(content, shift) {
            Ok(value) => Some(value),
            Err(kind) => {
                trace!(at, digits = content, shift, "rejected BOZ literal");
                state.say(at, kind);
                None
            }
        }
    }
}

/// See [`BozLiteral`].
pub const fn boz_literal() -> BozLiteral {
    BozLiteral
}
