//! Token-layer messages.
//!
//! A [`Message`] pairs a [`MessageKind`] with the [`Span`] it applies to.
//! The kind's `Display` is the exact user-facing text; the host adds
//! file names and line numbers when it renders.

use std::fmt;

use crate::{ErrorCode, Span};

/// What went wrong.
///
/// Fixed texts have unit variants; parameterized texts carry their operand.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum MessageKind {
    // === Character classes ===
    #[error("expected digit")]
    ExpectedDigit,
    #[error("expected letter")]
    ExpectedLetter,
    #[error("expected octal digit")]
    ExpectedOctalDigit,
    #[error("expected hexadecimal digit")]
    ExpectedHexDigit,
    /// A specific character (`CharMatch`).
    #[error("expected '{0}'")]
    ExpectedChar(char),
    /// A keyword or punctuation token, reported in full.
    #[error("expected '{0}'")]
    ExpectedToken(&'static str),
    #[error("end of file")]
    EndOfFile,

    // === Character literals ===
    #[error("unclosed character constant")]
    UnclosedCharConstant,
    #[error("bad escaped character")]
    BadEscapedChar,

    // === BOZ literals ===
    #[error("no digit in BOZ literal")]
    NoBozDigit,
    #[error("bad digit in BOZ literal")]
    BadBozDigit,
    #[error("excessive digits in BOZ literal")]
    ExcessiveBozDigits,
    #[error("unclosed BOZ literal")]
    UnclosedBozLiteral,

    // === Numeric and legacy literals ===
    #[error("overflow in decimal literal")]
    DecimalOverflow,
    #[error("insufficient or bad characters in Hollerith")]
    BadHollerith,
}

impl MessageKind {
    /// The stable error code for this kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            MessageKind::ExpectedDigit => ErrorCode::E0001,
            MessageKind::ExpectedLetter => ErrorCode::E0002,
            MessageKind::ExpectedOctalDigit => ErrorCode::E0003,
            MessageKind::ExpectedHexDigit => ErrorCode::E0004,
            MessageKind::ExpectedChar(_) => ErrorCode::E0005,
            MessageKind::ExpectedToken(_) => ErrorCode::E0006,
            MessageKind::EndOfFile => ErrorCode::E0007,
            MessageKind::UnclosedCharConstant => ErrorCode::E0008,
            MessageKind::BadEscapedChar => ErrorCode::E0009,
            MessageKind::NoBozDigit => ErrorCode::E0010,
            MessageKind::BadBozDigit => ErrorCode::E0011,
            MessageKind::ExcessiveBozDigits => ErrorCode::E0012,
            MessageKind::UnclosedBozLiteral => ErrorCode::E0013,
            MessageKind::DecimalOverflow => ErrorCode::E0014,
            MessageKind::BadHollerith => ErrorCode::E0015,
        }
    }
}

/// A message attached to a source location.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Message {
    /// WHERE the problem was detected.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: MessageKind,
}

impl Message {
    /// Create a message at a single position.
    pub fn at(pos: u32, kind: MessageKind) -> Self {
        Message {
            span: Span::point(pos),
            kind,
        }
    }

    /// Shorthand for `self.kind.code()`.
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code(), self.kind)
    }
}
