//! View resolution: which messages are visible under the current mode.

use crate::models::Message;
use crate::state::{MessageStore, QuestionRegistry, ViewMode};

/// Compute the ordered sequence of visible messages.
///
/// Pure and side-effect free; invoked on every render/query:
///
/// - `NewChat` — empty (history is hidden, never deleted)
/// - `ActiveQuestion` — every message tagged with the conversation, plus the
///   conversation's anchor message (the first user message predates the
///   conversation record and carries no tag)
/// - `AllHistory` — everything, in store order
///
/// An active conversation id missing from the registry yields an empty view;
/// the router invariant keeps that unreachable in practice.
pub fn visible_messages<'a>(
    mode: &ViewMode,
    store: &'a MessageStore,
    registry: &QuestionRegistry,
) -> Vec<&'a Message> {
    match mode {
        ViewMode::NewChat => Vec::new(),
        ViewMode::AllHistory => store.all().iter().collect(),
        ViewMode::ActiveQuestion { id } => {
            let anchor = registry.find_by_id(id).map(|q| q.message_id.as_str());
            store
                .all()
                .iter()
                .filter(|m| {
                    m.question_id.as_deref() == Some(id.as_str())
                        || anchor == Some(m.id.as_str())
                })
                .collect()
        }
    }
}
