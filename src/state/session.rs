//! Session-level routing state.
//!
//! The mode/folder "global" is modeled as an explicit value owned by the
//! [`Workspace`](crate::app::Workspace) and passed through the component
//! call chain, so transitions stay testable in isolation.

use serde::{Deserialize, Serialize};

use super::folders::DEFAULT_FOLDER;

/// Which subset of the message store the conversation screen shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ViewMode {
    /// Composing with no conversation selected; history is hidden, not
    /// deleted
    NewChat,
    /// A single conversation is open
    ActiveQuestion { id: String },
    /// Browse every stored message
    AllHistory,
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::NewChat
    }
}

/// Session routing state: current mode, active folder, and the navigation
/// generation used to cancel stale in-flight replies.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Current view mode
    pub mode: ViewMode,
    /// Folder that tags the next conversation created
    pub active_folder: String,
    /// Bumped on every user navigation; see [`route_generation`](Self::route_generation)
    generation: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            mode: ViewMode::NewChat,
            active_folder: DEFAULT_FOLDER.to_string(),
            generation: 0,
        }
    }
}

impl SessionState {
    /// Create the initial state: new-chat mode, default folder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active conversation id, if one is open.
    pub fn active_question(&self) -> Option<&str> {
        match &self.mode {
            ViewMode::ActiveQuestion { id } => Some(id),
            _ => None,
        }
    }

    /// Whether the session is in new-chat mode.
    pub fn is_new_chat(&self) -> bool {
        self.mode == ViewMode::NewChat
    }

    /// Current navigation generation.
    ///
    /// Every user-initiated transition ([`navigate`](Self::navigate)) bumps
    /// this; an in-flight reply issued from new-chat mode is stale once the
    /// generation moves. The reply-driven promotion of a new chat into a
    /// conversation ([`promote_to_question`](Self::promote_to_question))
    /// deliberately preserves it, so sibling replies from the same composing
    /// session still land in the conversation it became.
    pub fn route_generation(&self) -> u64 {
        self.generation
    }

    /// User-initiated mode transition. Bumps the navigation generation,
    /// cancelling pending new-chat reply associations.
    pub(crate) fn navigate(&mut self, mode: ViewMode) {
        tracing::debug!(from = ?self.mode, to = ?mode, "view mode transition");
        self.mode = mode;
        self.generation += 1;
    }

    /// Reply-driven promotion of the current composing session into a
    /// conversation. Does not bump the generation.
    pub(crate) fn promote_to_question(&mut self, id: String) {
        self.mode = ViewMode::ActiveQuestion { id };
    }
}
