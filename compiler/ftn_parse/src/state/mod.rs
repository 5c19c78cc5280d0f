//! Scan state threaded through every token parser.
//!
//! A [`ScanState`] owns the read cursor, the per-unit message sink, and the
//! lexing-mode flags. It is created once per source unit by the host and
//! exclusively borrowed by whichever parser is running.
//!
//! # Backtracking
//!
//! Every speculative parse is bracketed by [`ScanState::mark`] and, on
//! failure, [`ScanState::rollback`]. Rollback restores the cursor and
//! discards messages reported since the mark, so a failed alternative
//! leaves no trace. Forgetting the rollback silently shifts the starting
//! position of the next alternative; the [`attempt`](crate::attempt)
//! combinator exists so callers never write the pair by hand.

use ftn_diagnostic::{Message, MessageKind, Messages};
use ftn_lexer_core::Cursor;
use tracing::trace;

use crate::LexOptions;

/// A saved scan position for speculative parsing.
///
/// Captures the cursor (which is `Copy`) and the message count at the
/// time of the mark.
#[derive(Clone, Copy, Debug)]
pub struct ScanSnapshot<'src> {
    cursor: Cursor<'src>,
    message_count: usize,
}

impl ScanSnapshot<'_> {
    /// Byte offset the snapshot would restore.
    #[inline]
    pub fn location(&self) -> u32 {
        self.cursor.pos()
    }
}

/// Mutable scan state for one source unit.
#[derive(Debug)]
pub struct ScanState<'src> {
    cursor: Cursor<'src>,
    messages: Messages,
    options: LexOptions,
}

impl<'src> ScanState<'src> {
    /// Create a scan state at the start of a prescanned unit.
    pub fn new(source: &'src str, options: LexOptions) -> Self {
        ScanState {
            cursor: Cursor::new(source),
            messages: Messages::new(),
            options,
        }
    }

    /// Current byte offset, used as the location of diagnostics.
    #[inline]
    pub fn location(&self) -> u32 {
        self.cursor.pos()
    }

    /// Consume one character. No diagnostic at end of input.
    #[inline]
    pub fn next_char(&mut self) -> Option<char> {
        self.cursor.bump()
    }

    /// Look at the next character without consuming it.
    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        self.cursor.current()
    }

    /// Returns `true` once the whole unit has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Skip blanks and tabs, returning how many were skipped.
    #[inline]
    pub fn skip_blanks(&mut self) -> u32 {
        self.cursor.eat_whitespace()
    }

    /// Advance to just past the next ASCII `goal` byte.
    ///
    /// Returns `false`, leaving the state at end of input, if there is none.
    pub fn skip_past(&mut self, goal: u8) -> bool {
        self.cursor.eat_past(goal)
    }

    /// The source text consumed since `start`.
    pub fn text_from(&self, start: u32) -> &'src str {
        self.cursor.slice_from(start)
    }

    /// Save the current position for a later [`Self::rollback`].
    #[inline]
    pub fn mark(&self) -> ScanSnapshot<'src> {
        ScanSnapshot {
            cursor: self.cursor,
            message_count: self.messages.len(),
        }
    }

    /// Restore a position saved with [`Self::mark`].
    ///
    /// Messages reported after the mark are discarded.
    pub fn rollback(&mut self, snapshot: ScanSnapshot<'src>) {
        if self.cursor.pos() != snapshot.cursor.pos() {
            trace!(
                from = self.cursor.pos(),
                to = snapshot.cursor.pos(),
                "rollback"
            );
        }
        self.cursor = snapshot.cursor;
        self.messages.truncate(snapshot.message_count);
    }

    /// Detach the messages reported since `snapshot` was taken.
    ///
    /// The cursor is left alone; pair with [`Self::rollback`] to keep a
    /// failed branch's messages around while trying another.
    pub fn take_messages_since(&mut self, snapshot: ScanSnapshot<'src>) -> Vec<Message> {
        self.messages.split_off(snapshot.message_count)
    }

    /// Re-report messages previously detached with
    /// [`Self::take_messages_since`].
    pub fn restore_messages(&mut self, messages: Vec<Message>) {
        self.messages.extend(messages);
    }

    /// Report a message at `at`.
    pub fn say(&mut self, at: u32, kind: MessageKind) {
        self.messages.push(Message::at(at, kind));
    }

    /// Messages reported so far.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Finish the unit, handing its messages to the host.
    pub fn into_messages(self) -> Messages {
        self.messages
    }

    /// The lexing-mode flags for this unit.
    #[inline]
    pub fn options(&self) -> LexOptions {
        self.options
    }

    /// Check if nonstandard extensions are disabled.
    #[inline]
    pub fn strict_conformance(&self) -> bool {
        self.options.strict_conformance()
    }

    /// Check if backslash escapes are decoded in quoted literals.
    #[inline]
    pub fn backslash_escapes(&self) -> bool {
        self.options.backslash_escapes()
    }
}
