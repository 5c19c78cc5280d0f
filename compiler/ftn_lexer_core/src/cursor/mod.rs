//! Copyable cursor over a fully materialized source.
//!
//! The cursor advances through the source one `char` at a time and tracks
//! its byte offset. End of input is reached when the offset equals the
//! source length; the cursor never moves past it.
//!
//! Offsets are `u32`, matching the compact spans used by the diagnostics
//! crate. Sources must therefore be smaller than 4 GiB.

/// Copyable cursor over a `&str` source.
///
/// Copying a cursor is how callers snapshot a scan position: restoring the
/// copy is a complete rollback.
///
/// # Invariant
///
/// `pos` always lies on a `char` boundary of `source` and never exceeds
/// `source.len()`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: u32,
}

/// Size assertion: &str = 16 (fat pointer), u32 = 4 (+ padding) => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0.
    ///
    /// # Contract
    ///
    /// `source.len()` must fit in a `u32`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source length checked against u32::MAX in debug builds"
    )]
    pub fn new(source: &'a str) -> Self {
        debug_assert!(
            u32::try_from(source.len()).is_ok(),
            "source of {} bytes exceeds u32 offsets",
            source.len()
        );
        Self { source, pos: 0 }
    }

    /// The unread part of the source.
    #[inline]
    fn rest(&self) -> &'a str {
        self.source.get(self.pos as usize..).unwrap_or_default()
    }

    /// Returns the character at the current position, or `None` at end.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume and return the current character.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "len_utf8() is at most 4"
    )]
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.pos += ch.len_utf8() as u32;
        Some(ch)
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source in bytes.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "source length checked at construction"
    )]
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source.len() as u32
    }

    /// Extract a source substring.
    ///
    /// Out-of-range or non-boundary offsets yield an empty string.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.source
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current character.
    ///
    /// Returns the number of characters consumed.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> u32 {
        let mut count = 0;
        while self.current().is_some_and(&pred) {
            self.bump();
            count += 1;
        }
        count
    }

    /// Advance past horizontal whitespace (spaces and tabs).
    #[inline]
    pub fn eat_whitespace(&mut self) -> u32 {
        self.eat_while(|c| c == ' ' || c == '\t')
    }

    /// Advance to just past the next occurrence of the ASCII byte `goal`.
    ///
    /// Returns `false` and leaves the cursor at end of input if `goal` does
    /// not occur in the rest of the source.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets bounded by the source length, which fits in u32"
    )]
    pub fn eat_past(&mut self, goal: u8) -> bool {
        debug_assert!(goal.is_ascii(), "goal must be an ASCII byte");
        if let Some(offset) = memchr::memchr(goal, self.rest().as_bytes()) {
            self.pos += offset as u32 + 1;
            true
        } else {
            self.pos = self.source_len();
            false
        }
    }
}

#[cfg(test)]
mod tests;
