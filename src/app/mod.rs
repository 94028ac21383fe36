//! Workspace orchestration.
//!
//! [`Workspace`] is the single in-memory session: every store plus routing
//! state, owned by the host's event loop and mutated only in response to
//! discrete actions. Router transitions live in [`router`], exchange types
//! in [`exchange`], and the async bridge in [`dispatch`].

pub mod dispatch;
pub mod exchange;
mod router;

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::Message;
use crate::state::{FolderDirectory, MessageStore, QuestionRegistry, SessionState};
use crate::view::resolver::visible_messages;

pub use dispatch::{spawn_send, WorkspaceEvent};
pub use exchange::{PendingExchange, ReplyOutcome, RouteScope, SendOutcome};

/// The conversational workspace session.
///
/// Owns the message store, the conversation registry, the folder directory
/// and the routing state for the lifetime of the session. There is no
/// explicit teardown; the session is discarded wholesale on logout.
pub struct Workspace {
    session_id: String,
    store: MessageStore,
    registry: QuestionRegistry,
    folders: FolderDirectory,
    pub(crate) session: SessionState,
    in_flight: HashMap<String, RouteScope>,
}

impl Workspace {
    /// Create an empty session.
    ///
    /// # Arguments
    /// * `session_id` - Opaque stable identifier from the hosting
    ///   environment, passed through to the transport on every send
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            store: MessageStore::new(),
            registry: QuestionRegistry::new(),
            folders: FolderDirectory::new(),
            session: SessionState::new(),
            in_flight: HashMap::new(),
        }
    }

    /// The session identifier handed to the transport.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// The message store.
    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    /// Mutable message store access, for the interaction engine.
    pub fn store_mut(&mut self) -> &mut MessageStore {
        &mut self.store
    }

    /// The conversation registry.
    pub fn registry(&self) -> &QuestionRegistry {
        &self.registry
    }

    /// The folder directory.
    pub fn folders(&self) -> &FolderDirectory {
        &self.folders
    }

    /// The session routing state.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Number of exchanges still waiting on the transport.
    pub fn pending_count(&self) -> usize {
        self.in_flight.len()
    }

    /// The messages visible under the current mode, in view order.
    pub fn visible(&self) -> Vec<&Message> {
        visible_messages(&self.session.mode, &self.store, &self.registry)
    }

    /// Append a user message and register the exchange for its reply.
    ///
    /// The message is tagged with the active conversation when one is open;
    /// otherwise it is untagged and the exchange carries new-chat scope.
    /// The returned [`PendingExchange`] is the token the transport
    /// completion must be applied with.
    pub fn submit(&mut self, text: &str) -> PendingExchange {
        let question_id = self.session.active_question().map(str::to_string);
        let message = Message::user(text, question_id.clone());
        let user_message_id = message.id.clone();
        self.store.append(message);

        let scope = match question_id {
            Some(id) => RouteScope::Question(id),
            None => RouteScope::NewChat,
        };
        let pending = PendingExchange {
            request_id: Uuid::new_v4().to_string(),
            user_message_id,
            question_text: text.to_string(),
            scope,
            generation: self.session.route_generation(),
        };
        self.in_flight
            .insert(pending.request_id.clone(), pending.scope.clone());
        tracing::debug!(
            request_id = %pending.request_id,
            scope = ?pending.scope,
            "exchange submitted"
        );
        pending
    }

    /// Apply a completed exchange, or discard it as stale.
    ///
    /// The check-and-discard guard: the reply is applied only if the
    /// exchange still belongs to current routing state. On apply, the
    /// answer binding ([`record_answer`](Self::record_answer)) and the
    /// assistant append happen as one logical transition, so no caller can
    /// observe a conversation that exists without the pointer having moved.
    /// Failure outcomes are folded into the transcript as assistant text.
    pub fn apply_reply(
        &mut self,
        pending: &PendingExchange,
        outcome: SendOutcome,
    ) -> ReplyOutcome {
        self.in_flight.remove(&pending.request_id);

        if !self.exchange_is_current(pending) {
            tracing::debug!(
                request_id = %pending.request_id,
                scope = ?pending.scope,
                "discarding stale reply"
            );
            return ReplyOutcome::Stale;
        }

        let question_id =
            self.record_answer(&pending.user_message_id, &pending.question_text);
        let text = match outcome {
            SendOutcome::Reply(text) => text,
            SendOutcome::Failure(message) => message,
        };
        let reply = Message::ai(text, Some(question_id.clone()));
        let message_id = reply.id.clone();
        self.store.append(reply);

        ReplyOutcome::Applied {
            question_id,
            message_id,
        }
    }

    /// Whether an exchange still belongs to current routing state.
    ///
    /// Conversation-scoped exchanges apply while that conversation is the
    /// active one. New-chat exchanges apply while the navigation generation
    /// is unchanged — which also covers the composing session having been
    /// promoted into a conversation by an earlier sibling reply.
    fn exchange_is_current(&self, pending: &PendingExchange) -> bool {
        match &pending.scope {
            RouteScope::Question(id) => {
                self.session.active_question() == Some(id.as_str())
            }
            RouteScope::NewChat => {
                pending.generation == self.session.route_generation()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Author;

    #[test]
    fn test_submit_in_new_chat_is_untagged() {
        let mut workspace = Workspace::new("s-1");
        let pending = workspace.submit("What is X?");

        assert_eq!(pending.scope, RouteScope::NewChat);
        let message = workspace.store().find_by_id(&pending.user_message_id).unwrap();
        assert!(message.question_id.is_none());
        assert_eq!(message.author, Author::User);
        assert_eq!(workspace.pending_count(), 1);
    }

    #[test]
    fn test_apply_reply_creates_conversation_and_appends() {
        let mut workspace = Workspace::new("s-1");
        let pending = workspace.submit("What is X?");

        let outcome =
            workspace.apply_reply(&pending, SendOutcome::Reply("X is a thing.".to_string()));
        let ReplyOutcome::Applied {
            question_id,
            message_id,
        } = outcome
        else {
            panic!("Expected Applied outcome");
        };

        assert_eq!(workspace.session().active_question(), Some(question_id.as_str()));
        let reply = workspace.store().find_by_id(&message_id).unwrap();
        assert_eq!(reply.author, Author::Ai);
        assert_eq!(reply.text, "X is a thing.");
        assert_eq!(reply.question_id.as_deref(), Some(question_id.as_str()));
        assert_eq!(workspace.pending_count(), 0);
    }

    #[test]
    fn test_second_reply_reuses_conversation() {
        let mut workspace = Workspace::new("s-1");
        let first = workspace.submit("What is X?");
        let ReplyOutcome::Applied { question_id, .. } =
            workspace.apply_reply(&first, SendOutcome::Reply("X.".to_string()))
        else {
            panic!("Expected Applied outcome");
        };

        let second = workspace.submit("And Y?");
        assert_eq!(second.scope, RouteScope::Question(question_id.clone()));

        let ReplyOutcome::Applied {
            question_id: again, ..
        } = workspace.apply_reply(&second, SendOutcome::Reply("Y.".to_string()))
        else {
            panic!("Expected Applied outcome");
        };
        assert_eq!(again, question_id);
        assert_eq!(workspace.registry().len(), 1);
    }

    #[test]
    fn test_stale_after_start_new_chat() {
        let mut workspace = Workspace::new("s-1");
        let pending = workspace.submit("What is X?");
        workspace.start_new_chat();

        let outcome = workspace.apply_reply(&pending, SendOutcome::Reply("late".to_string()));
        assert_eq!(outcome, ReplyOutcome::Stale);
        // Only the original user message is stored
        assert_eq!(workspace.store().len(), 1);
        assert!(workspace.registry().is_empty());
    }

    #[test]
    fn test_stale_after_switching_conversation() {
        let mut workspace = Workspace::new("s-1");
        let first = workspace.submit("first?");
        workspace.apply_reply(&first, SendOutcome::Reply("a1".to_string()));

        let in_first = workspace.submit("follow-up");
        // Jump to a different conversation before the reply lands
        workspace.start_new_chat();
        let second = workspace.submit("second?");
        workspace.apply_reply(&second, SendOutcome::Reply("a2".to_string()));

        let outcome =
            workspace.apply_reply(&in_first, SendOutcome::Reply("late".to_string()));
        assert_eq!(outcome, ReplyOutcome::Stale);
    }

    #[test]
    fn test_stale_after_deleting_active_conversation() {
        let mut workspace = Workspace::new("s-1");
        let first = workspace.submit("first?");
        let ReplyOutcome::Applied { question_id, .. } =
            workspace.apply_reply(&first, SendOutcome::Reply("a1".to_string()))
        else {
            panic!("Expected Applied outcome");
        };

        let follow_up = workspace.submit("more?");
        workspace.delete_question(&question_id);

        let outcome =
            workspace.apply_reply(&follow_up, SendOutcome::Reply("late".to_string()));
        assert_eq!(outcome, ReplyOutcome::Stale);
    }

    #[test]
    fn test_sibling_new_chat_reply_joins_created_conversation() {
        let mut workspace = Workspace::new("s-1");
        // Two sends from the same composing session, both in flight
        let first = workspace.submit("What is X?");
        let second = workspace.submit("What is Y?");

        let ReplyOutcome::Applied { question_id, .. } =
            workspace.apply_reply(&first, SendOutcome::Reply("X.".to_string()))
        else {
            panic!("Expected Applied outcome");
        };

        // The sibling was issued before the conversation existed but joins it
        let ReplyOutcome::Applied {
            question_id: joined,
            ..
        } = workspace.apply_reply(&second, SendOutcome::Reply("Y.".to_string()))
        else {
            panic!("Expected Applied outcome");
        };
        assert_eq!(joined, question_id);
        assert_eq!(workspace.registry().len(), 1);
    }

    #[test]
    fn test_failure_outcome_lands_in_transcript() {
        let mut workspace = Workspace::new("s-1");
        let pending = workspace.submit("What is X?");

        let outcome = workspace.apply_reply(
            &pending,
            SendOutcome::Failure("connection failed: refused".to_string()),
        );
        let ReplyOutcome::Applied { message_id, .. } = outcome else {
            panic!("Expected Applied outcome");
        };

        let message = workspace.store().find_by_id(&message_id).unwrap();
        assert_eq!(message.author, Author::Ai);
        assert_eq!(message.text, "connection failed: refused");
    }

    #[test]
    fn test_visible_follows_mode() {
        let mut workspace = Workspace::new("s-1");
        let pending = workspace.submit("What is X?");
        workspace.apply_reply(&pending, SendOutcome::Reply("X.".to_string()));

        assert_eq!(workspace.visible().len(), 2);
        workspace.start_new_chat();
        assert!(workspace.visible().is_empty());
        workspace.show_all_history();
        assert_eq!(workspace.visible().len(), 2);
    }
}
