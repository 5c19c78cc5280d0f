//! Per-unit message sink.
//!
//! Parsers only ever append. The single exception is backtracking: when a
//! speculative parse fails, the scan state truncates the sink back to the
//! length it had when the speculation began, so a failed alternative leaves
//! no diagnostic behind.

use crate::{Message, MessageKind};

/// Append-only buffer of messages for one source unit.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Messages {
    messages: Vec<Message>,
}

impl Messages {
    /// Create an empty sink.
    pub fn new() -> Self {
        Messages {
            messages: Vec::new(),
        }
    }

    /// Append a message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Number of messages collected so far.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop every message past the first `len`.
    ///
    /// Used for rollback; `len` comes from an earlier call to [`Self::len`].
    pub fn truncate(&mut self, len: usize) {
        self.messages.truncate(len);
    }

    /// Remove and return every message past the first `len`.
    pub fn split_off(&mut self, len: usize) -> Vec<Message> {
        if len >= self.messages.len() {
            return Vec::new();
        }
        self.messages.split_off(len)
    }

    /// Iterate over the collected messages in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Returns `true` if any message has the given kind.
    pub fn has_kind(&self, kind: &MessageKind) -> bool {
        self.messages.iter().any(|m| &m.kind == kind)
    }

    /// The most recently reported message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Consume the sink, yielding the messages in report order.
    pub fn into_vec(self) -> Vec<Message> {
        self.messages
    }
}

impl Extend<Message> for Messages {
    fn extend<I: IntoIterator<Item = Message>>(&mut self, iter: I) {
        self.messages.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Messages {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
