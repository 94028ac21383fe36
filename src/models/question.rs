use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::text_utils::derive_title;

/// A named conversation thread.
///
/// Anchored to the message that originated it and tagged with the folder
/// that was active when it was created. Only the title is mutable, via
/// [`QuestionRegistry::rename`](crate::state::QuestionRegistry::rename).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    /// Unique conversation ID
    pub id: String,
    /// Display title derived from the first user message
    pub title: String,
    /// Folder this conversation belongs to
    pub folder: String,
    /// The message that originated this conversation
    pub message_id: String,
    /// When the conversation was created
    pub created_at: DateTime<Utc>,
}

impl Question {
    /// Create a conversation record with a fresh ID.
    ///
    /// The title is derived from `title_source` (the first user message
    /// text), truncated with an ellipsis marker when too long.
    pub fn new(
        anchor_message_id: impl Into<String>,
        title_source: &str,
        folder: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: derive_title(title_source),
            folder: folder.into(),
            message_id: anchor_message_id.into(),
            created_at: Utc::now(),
        }
    }
}
