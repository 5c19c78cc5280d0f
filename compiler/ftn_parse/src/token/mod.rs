//! Keyword and punctuation matching.
//!
//! Free-form Fortran lets blanks appear inside some keywords: `end if`,
//! `endif` and `end   if` are the same token. A reference string written
//! with a single interior blank accepts any run of blanks and tabs there,
//! including none. Letters compare case-insensitively.

use ftn_diagnostic::MessageKind;
use tracing::trace;

use crate::chars::SPACES;
use crate::combinator::{Parser, Success};
use crate::ScanState;

/// Match a fixed token, skipping blanks around it.
///
/// Either the whole reference is matched or the parse is absent with
/// `expected '<token>'` reported where the token should have started.
#[derive(Clone, Copy, Debug)]
pub struct TokenStringMatch {
    text: &'static str,
}

impl TokenStringMatch {
    pub const fn new(text: &'static str) -> Self {
        TokenStringMatch { text }
    }

    /// The reference text as written.
    pub const fn text(&self) -> &'static str {
        self.text
    }

    fn mismatch(&self, state: &mut ScanState<'_>, at: u32) -> Option<Success> {
        trace!(token = self.text, at, "token mismatch");
        state.say(at, MessageKind::ExpectedToken(self.text));
        None
    }
}

#[inline]
fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t')
}

impl Parser for TokenStringMatch {
    type Output = Success;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<Success> {
        SPACES.parse(state);
        let at = state.location();
        // Input character read past a medial blank run, not yet matched.
        let mut pending: Option<char> = None;
        let mut reference = self.text.chars().peekable();

        while let Some(want) = reference.next() {
            let medial = want == ' ';
            if medial && matches!(reference.peek(), None | Some(' ')) {
                continue;
            }
            let Some(mut got) = pending.take().or_else(|| state.next_char()) else {
                return self.mismatch(state, at);
            };
            if medial {
                while is_blank(got) {
                    match state.next_char() {
                        Some(ch) => got = ch,
                        None => return self.mismatch(state, at),
                    }
                }
                pending = Some(got);
            } else if !got.eq_ignore_ascii_case(&want) {
                return self.mismatch(state, at);
            }
        }

        SPACES.parse(state);
        Some(Success)
    }
}

/// Shorthand for [`TokenStringMatch::new`].
///
/// ```
/// use ftn_parse::{tok, LexOptions, Parser, ScanState};
///
/// let mut state = ScanState::new("  END   IF x", LexOptions::default());
/// assert!(tok("end if").parse(&mut state).is_some());
/// assert_eq!(state.peek_char(), Some('x'));
/// ```
pub const fn tok(text: &'static str) -> TokenStringMatch {
    TokenStringMatch::new(text)
}
