//! Unsigned decimal digit strings.

use ftn_diagnostic::MessageKind;
use tracing::trace;

use super::digit_value;
use crate::chars::{is_decimal_digit, CharPredicateGuard, DIGIT};
use crate::combinator::{Attempt, Parser};
use crate::ScanState;

const FIRST_DIGIT: Attempt<CharPredicateGuard> = Attempt::new(DIGIT);

/// The value of a digit string, wrapped to 64 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DigitStringValue {
    pub value: u64,
    /// The true value did not fit; `value` is it modulo 2^64.
    pub overflow: bool,
}

/// One or more decimal digits, with no blank skipping on either side.
///
/// Overflow is reported once, as `overflow in decimal literal`, and the
/// wrapped value is still produced.
#[derive(Clone, Copy, Debug, Default)]
pub struct DigitString;

impl Parser for DigitString {
    type Output = DigitStringValue;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<DigitStringValue> {
        let at = state.location();
        let first = FIRST_DIGIT.parse(state)?;
        let mut value = u64::from(digit_value(first, 10));
        let mut overflow = false;
        while let Some(ch) = state.peek_char().filter(|&c| is_decimal_digit(c)) {
            state.next_char();
            let (times_ten, mul_overflow) = value.overflowing_mul(10);
            let (sum, add_overflow) = times_ten.overflowing_add(u64::from(digit_value(ch, 10)));
            overflow |= mul_overflow || add_overflow;
            value = sum;
        }
        if overflow {
            trace!(at, value, "decimal literal overflow");
            state.say(at, MessageKind::DecimalOverflow);
        }
        Some(DigitStringValue { value, overflow })
    }
}

/// See [`DigitString`].
pub const fn digit_string() -> DigitString {
    DigitString
}
