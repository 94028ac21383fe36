use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Ai,
}

/// A single chat turn.
///
/// Text, author and timestamp are write-once. `pinned` and `expanded` are the
/// only mutable fields, and they are updated exclusively through
/// [`MessageStore::update_flags`](crate::state::MessageStore::update_flags).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Unique message ID
    pub id: String,
    /// Who authored the message
    pub author: Author,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: DateTime<Utc>,
    /// Whether the message is on the pin board
    #[serde(default)]
    pub pinned: bool,
    /// Whether the message bubble is expanded
    #[serde(default)]
    pub expanded: bool,
    /// The conversation that was active when this message was appended
    #[serde(default)]
    pub question_id: Option<String>,
}

impl Message {
    /// Create a new message with a fresh ID and the current timestamp.
    pub fn new(author: Author, text: impl Into<String>, question_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author,
            text: text.into(),
            created_at: Utc::now(),
            pinned: false,
            expanded: false,
            question_id,
        }
    }

    /// Create a user-authored message.
    pub fn user(text: impl Into<String>, question_id: Option<String>) -> Self {
        Self::new(Author::User, text, question_id)
    }

    /// Create an assistant-authored message.
    pub fn ai(text: impl Into<String>, question_id: Option<String>) -> Self {
        Self::new(Author::Ai, text, question_id)
    }
}

/// Partial update for the two mutable message flags.
///
/// `None` fields are left untouched, so a pin toggle never clobbers the
/// expanded state and vice versa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagUpdate {
    /// New pinned value, if it should change
    pub pinned: Option<bool>,
    /// New expanded value, if it should change
    pub expanded: Option<bool>,
}

impl FlagUpdate {
    /// Update only the pinned flag.
    pub fn pin(value: bool) -> Self {
        Self {
            pinned: Some(value),
            expanded: None,
        }
    }

    /// Update only the expanded flag.
    pub fn expand(value: bool) -> Self {
        Self {
            pinned: None,
            expanded: Some(value),
        }
    }
}
