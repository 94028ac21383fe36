//! Conversation routing: mode transitions on the [`Workspace`].
//!
//! The machine has no terminal state; every transition is defined for every
//! input, with unknown ids absorbed as no-ops.

use crate::state::ViewMode;

use super::Workspace;

impl Workspace {
    /// Switch to new-chat mode.
    ///
    /// Clears the active-conversation pointer but touches neither the
    /// message store nor the registry: history is preserved for later
    /// browsing.
    pub fn start_new_chat(&mut self) {
        self.session.navigate(ViewMode::NewChat);
    }

    /// Switch to the all-history browsing view.
    pub fn show_all_history(&mut self) {
        self.session.navigate(ViewMode::AllHistory);
    }

    /// Bind an answered user message to a conversation.
    ///
    /// The only conversation-creating path. While a conversation is active
    /// this is idempotent and returns its id unchanged; otherwise a fresh
    /// conversation is created under the active folder and activated.
    ///
    /// # Arguments
    /// * `user_message_id` - Anchor: the user message that was answered
    /// * `question_text` - Title source (the user message text)
    pub fn record_answer(&mut self, user_message_id: &str, question_text: &str) -> String {
        if let Some(active) = self.session.active_question() {
            return active.to_string();
        }
        let id = self.registry.create(
            user_message_id,
            question_text,
            self.session.active_folder.clone(),
        );
        self.session.promote_to_question(id.clone());
        tracing::info!(
            question_id = %id,
            folder = %self.session.active_folder,
            "conversation started"
        );
        id
    }

    /// Open a conversation from its history item.
    ///
    /// Looks the conversation up by its anchor message. On a hit the
    /// conversation becomes active and its folder becomes the active folder
    /// (folder selection follows the opened conversation). A miss leaves
    /// state unchanged and returns `None`.
    pub fn open_history_item(&mut self, message_id: &str) -> Option<String> {
        let (id, folder) = {
            let question = self.registry.find_by_anchor(message_id)?;
            (question.id.clone(), question.folder.clone())
        };
        self.session.active_folder = folder;
        self.session.navigate(ViewMode::ActiveQuestion { id: id.clone() });
        Some(id)
    }

    /// Create (or select) a project folder and open a blank composing view.
    ///
    /// The next conversation created will be tagged with this folder.
    pub fn create_project(&mut self, name: &str) {
        self.folders.ensure(name);
        self.session.active_folder = name.to_string();
        self.start_new_chat();
    }

    /// Rename a conversation. Unknown ids are a no-op returning `false`.
    pub fn rename_question(&mut self, id: &str, new_title: &str) -> bool {
        self.registry.rename(id, new_title)
    }

    /// Delete a conversation. Unknown ids are a no-op returning `false`.
    ///
    /// Deleting the active conversation forces a transition back to
    /// new-chat mode.
    pub fn delete_question(&mut self, id: &str) -> bool {
        let was_active = self.session.active_question() == Some(id);
        let removed = self.registry.delete(id);
        if removed && was_active {
            self.session.navigate(ViewMode::NewChat);
        }
        removed
    }
}
