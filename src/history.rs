//! Bounded conversation history with a pinned seed message

use crate::llm::ChatMessage;

/// Default message capacity for a conversation
pub const DEFAULT_CAPACITY: usize = 30;

/// Conversation history bounded to a fixed number of messages
///
/// The first message pushed (the task seed) is pinned: once the bound is
/// reached, each append evicts the oldest message after the seed, so the
/// original task framing survives arbitrarily long conversations.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    messages: Vec<ChatMessage>,
    capacity: usize,
}

impl ConversationHistory {
    /// Create an empty history with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty history bounded to `capacity` messages
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            messages: Vec::new(),
            capacity,
        }
    }

    /// Append a message, evicting the message at index 1 if the bound is
    /// exceeded
    ///
    /// Eviction removes exactly one message per over-capacity append and
    /// never touches index 0.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        if self.messages.len() > self.capacity && self.messages.len() > 1 {
            self.messages.remove(1);
        }
    }

    /// All messages, oldest first
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new()
    }
}
