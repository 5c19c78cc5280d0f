//! Literal constant decoders.
//!
//! Each decoder is a small state machine over [`ScanState`](crate::ScanState).
//! Once a decoder has seen the lead token that commits it to a literal
//! form (an opening quote after a BOZ base letter, a Hollerith `H`), any
//! later problem is reported as a message rather than passed off as a
//! plain mismatch.
//!
//! | Literal | Parser | Value |
//! |---------|--------|-------|
//! | `'text'`, `"text"` | [`CharLiteral`], [`char_literal`] | `String` |
//! | `B'101'`, `O'17'`, `Z'FF'`, `'FF'Z` | [`BozLiteral`] | `u64` |
//! | `12345` | [`DigitString`] | [`DigitStringValue`] |
//! | `3Habc` | [`HollerithLiteral`] | `String` |

mod boz;
mod char_literal;
mod digit_string;
mod hollerith;

pub use boz::{boz_literal, BozLiteral};
pub use char_literal::{char_literal, CharLiteral, CharLiteralChar, LiteralChar, QuotedCharLiteral};
pub use digit_string::{digit_string, DigitString, DigitStringValue};
pub use hollerith::{hollerith_literal, HollerithLiteral};

/// Numeric value of a digit already known to be valid in `radix`.
#[inline]
fn digit_value(ch: char, radix: u32) -> u32 {
    ch.to_digit(radix).unwrap_or(0)
}
