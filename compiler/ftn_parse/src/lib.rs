//! Token and literal parsers for Fortran.
//!
//! Parsers here run over a prescanned source unit held in a [`ScanState`].
//! They are built from the backtracking combinators in [`combinator`] and
//! recognize single characters, keywords with free-form medial blanks, and
//! the literal forms: quoted characters, BOZ constants, decimal digit
//! strings and Hollerith constants.
//!
//! ```
//! use ftn_parse::{boz_literal, tok, LexOptions, Parser, ParserExt, ScanState};
//!
//! let mut state = ScanState::new("data x / Z'FF' /", LexOptions::default());
//! assert!(tok("data").parse(&mut state).is_some());
//! state.next_char();
//! let value = tok("/").then(boz_literal()).skip(tok("/")).parse(&mut state);
//! assert_eq!(value, Some(255));
//! assert!(state.messages().is_empty());
//! ```
//!
//! Nothing here is global. Parser values are immutable and `Copy` where
//! their parts are, so the `const` parsers ([`DIGIT`], [`LETTER`],
//! [`SPACES`]) can be shared by any number of units scanned in parallel.

mod chars;
pub mod combinator;
mod idiom;
mod literal;
mod options;
pub mod render;
mod state;
mod token;

use std::sync::Once;

pub use chars::{
    hex_digit_value, is_decimal_digit, is_hexadecimal_digit, is_letter, is_octal_digit, to_lower,
    CharMatch, CharPredicateGuard, Space, Spaces, DIGIT, HEX_DIGIT, LETTER, OCTAL_DIGIT, SPACES,
};
pub use combinator::{
    any_char, attempt, construct, construct_default, consumed_all_input, lookahead, many, maybe,
    not, ok, skip_many, skip_past, some, Parser, ParserExt, Success,
};
pub use idiom::{
    bracketed, nonempty_list, optional_before_colons, parenthesized, Bracketed,
    OptionalBeforeColons, Parenthesized,
};
pub use literal::{
    boz_literal, char_literal, digit_string, hollerith_literal, BozLiteral, CharLiteral,
    CharLiteralChar, DigitString, DigitStringValue, HollerithLiteral, LiteralChar,
    QuotedCharLiteral,
};
pub use options::LexOptions;
pub use state::{ScanSnapshot, ScanState};
pub use token::{tok, TokenStringMatch};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ftn_parse=trace` to see rollbacks and mismatches.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
