//! Legacy Hollerith constants: `nH` followed by exactly `n` characters.

use ftn_diagnostic::MessageKind;
use tracing::trace;

use super::DigitString;
use crate::chars::{CharPredicateGuard, LETTER, SPACES};
use crate::combinator::{Attempt, Map, Parser};
use crate::ScanState;

const MARKER: Attempt<Map<CharPredicateGuard, fn(char) -> char>> = Attempt::new(LETTER);

#[inline]
fn is_printable(ch: char) -> bool {
    ch == ' ' || ch.is_ascii_graphic()
}

/// A Hollerith constant, skipping leading blanks.
///
/// A zero count or a letter other than `H` is a plain mismatch. Once the
/// `H` is read, a count too large for 64 bits, fewer than `n` characters,
/// or a non-printable one fails the literal with
/// `insufficient or bad characters in Hollerith`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HollerithLiteral;

impl Parser for HollerithLiteral {
    type Output = String;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<String> {
        SPACES.parse(state);
        let at = state.location();
        let count = DigitString.parse(state)?;
        if MARKER.parse(state)? != 'h' {
            return None;
        }
        if count.overflow {
            trace!(at, "Hollerith count out of range");
            state.say(at, MessageKind::BadHollerith);
            return None;
        }
        let count = count.value;
        if count < 1 {
            return None;
        }

        let mut text = String::new();
        for _ in 0..count {
            match state.next_char() {
                Some(ch) if is_printable(ch) => text.push(ch),
                _ => {
                    trace!(at, count, "short Hollerith constant");
                    state.say(at, MessageKind::BadHollerith);
                    return None;
                }
            }
        }
        Some(text)
    }
}

/// See [`HollerithLiteral`].
pub const fn hollerith_literal() -> HollerithLiteral {
    HollerithLiteral
}
