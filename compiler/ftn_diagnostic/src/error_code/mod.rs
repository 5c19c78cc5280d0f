//! Error codes for token-layer diagnostics.
//!
//! Each code is a unique identifier (e.g., `E0010`). All codes in this
//! layer are lexical, so they share the `E00xx` range.

use std::fmt;

/// Error codes for token-layer diagnostics.
///
/// Format: E00xx, grouped by the parser family that reports them:
/// - E0001-E0007: character classes, expected characters and tokens
/// - E0008-E0009: quoted character literals
/// - E0010-E0013: BOZ literals
/// - E0014: decimal digit strings
/// - E0015: Hollerith literals
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Expected a decimal digit
    E0001,
    /// Expected a letter
    E0002,
    /// Expected an octal digit
    E0003,
    /// Expected a hexadecimal digit
    E0004,
    /// Expected a specific character
    E0005,
    /// Expected a keyword or punctuation token
    E0006,
    /// Unexpected end of input
    E0007,
    /// Unclosed character constant
    E0008,
    /// Bad escaped character
    E0009,
    /// No digit in BOZ literal
    E0010,
    /// Bad digit in BOZ literal
    E0011,
    /// Excessive digits in BOZ literal
    E0012,
    /// Unclosed BOZ literal
    E0013,
    /// Overflow in decimal literal
    E0014,
    /// Insufficient or bad characters in Hollerith literal
    E0015,
}

impl ErrorCode {
    /// Every error code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E0007,
        ErrorCode::E0008,
        ErrorCode::E0009,
        ErrorCode::E0010,
        ErrorCode::E0011,
        ErrorCode::E0012,
        ErrorCode::E0013,
        ErrorCode::E0014,
        ErrorCode::E0015,
    ];

    /// Get the error code as a string (e.g., `"E0010"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E0008 => "E0008",
            ErrorCode::E0009 => "E0009",
            ErrorCode::E0010 => "E0010",
            ErrorCode::E0011 => "E0011",
            ErrorCode::E0012 => "E0012",
            ErrorCode::E0013 => "E0013",
            ErrorCode::E0014 => "E0014",
            ErrorCode::E0015 => "E0015",
        }
    }

    /// Check if this code belongs to one of the literal decoders.
    pub fn is_literal_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E0008
                | ErrorCode::E0009
                | ErrorCode::E0010
                | ErrorCode::E0011
                | ErrorCode::E0012
                | ErrorCode::E0013
                | ErrorCode::E0014
                | ErrorCode::E0015
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E0010"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
