//! Ordered message collection with flag-update primitives.

use std::collections::HashMap;

use crate::models::{FlagUpdate, Message};

/// The session's message store.
///
/// Owns every chat turn in arrival order. The only mutation besides append
/// is [`update_flags`](Self::update_flags); text, author and timestamp are
/// write-once. Callers must not assume index stability across mutation —
/// always re-resolve positions through the view layer.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
    index: HashMap<String, usize>,
}

impl MessageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a message, preserving arrival order.
    ///
    /// Used for both user and assistant turns, and for seeded/imported
    /// history.
    pub fn append(&mut self, message: Message) {
        self.index.insert(message.id.clone(), self.messages.len());
        self.messages.push(message);
    }

    /// Apply a partial flag update to a message.
    ///
    /// Unknown ids are a silent no-op (`None`); otherwise the updated record
    /// is returned.
    pub fn update_flags(&mut self, id: &str, update: FlagUpdate) -> Option<&Message> {
        let position = *self.index.get(id)?;
        let message = &mut self.messages[position];
        if let Some(pinned) = update.pinned {
            message.pinned = pinned;
        }
        if let Some(expanded) = update.expanded {
            message.expanded = expanded;
        }
        Some(&self.messages[position])
    }

    /// Look up a message by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Message> {
        self.index.get(id).map(|&position| &self.messages[position])
    }

    /// The full ordered sequence.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    /// Number of stored messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the store holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
