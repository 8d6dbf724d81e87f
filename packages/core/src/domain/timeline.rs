//! Append-only chat timeline.

use super::entity::Message;

/// Ordered history of everything said and announced during one session.
///
/// Messages appear in arrival order and are never reordered, deduplicated,
/// or edited. The only mutations are appending one entry and clearing the
/// whole history when the session is invalidated.
#[derive(Debug, Clone, Default)]
pub struct ChatTimeline {
    messages: Vec<Message>,
}

impl ChatTimeline {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message at the end of the timeline.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All messages in arrival order.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    /// The most recently appended message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages in the timeline.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the timeline holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop every message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
