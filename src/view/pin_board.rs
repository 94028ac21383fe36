//! Pin board: the whole-session pinned-message projection.

use crate::models::Message;
use crate::state::MessageStore;

/// All pinned messages in store order.
///
/// Explicitly a whole-session view: it spans every conversation and ignores
/// the current mode.
pub fn pinned_messages(store: &MessageStore) -> Vec<&Message> {
    store.all().iter().filter(|m| m.pinned).collect()
}
