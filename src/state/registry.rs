//! Conversation (question) registry.

use crate::models::Question;

/// Registry of named conversation records.
///
/// Owns every [`Question`] in creation order. Deletion and rename on unknown
/// ids are silent no-ops so UI actions stay idempotent.
#[derive(Debug, Clone, Default)]
pub struct QuestionRegistry {
    questions: Vec<Question>,
}

impl QuestionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a conversation anchored to `anchor_message_id`.
    ///
    /// The title is derived from `title_source` (first 80 chars, ellipsis
    /// marker when longer). Returns the fresh conversation id.
    pub fn create(
        &mut self,
        anchor_message_id: &str,
        title_source: &str,
        folder: impl Into<String>,
    ) -> String {
        let question = Question::new(anchor_message_id, title_source, folder);
        let id = question.id.clone();
        tracing::debug!(
            question_id = %id,
            anchor = %anchor_message_id,
            title = %question.title,
            "question created"
        );
        self.questions.push(question);
        id
    }

    /// Resolve which conversation an opened history item belongs to.
    pub fn find_by_anchor(&self, message_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.message_id == message_id)
    }

    /// Look up a conversation by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Change a conversation's display title.
    ///
    /// Returns `false` (no-op) for unknown ids.
    pub fn rename(&mut self, id: &str, new_title: &str) -> bool {
        match self.questions.iter_mut().find(|q| q.id == id) {
            Some(question) => {
                question.title = new_title.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove a conversation record.
    ///
    /// Returns `false` (no-op) for unknown ids.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.questions.len();
        self.questions.retain(|q| q.id != id);
        self.questions.len() != before
    }

    /// All conversations in creation order.
    pub fn list(&self) -> &[Question] {
        &self.questions
    }

    /// Number of registered conversations.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the registry holds no conversations.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
