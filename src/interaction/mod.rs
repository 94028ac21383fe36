//! Per-message interactions: pin/expand toggles, copy, reply drafts, share.
//!
//! The engine mutates nothing but the two message flags, and only through
//! [`MessageStore::update_flags`]. Copy and share are side effects behind
//! the capability seams; neither ever surfaces as an uncaught failure.

use crate::error::CapabilityError;
use crate::models::text_utils::derive_title;
use crate::models::{FlagUpdate, Message};
use crate::state::MessageStore;
use crate::traits::{ClipboardAccess, SharePayload, ShareTarget};

/// Composer prefill produced by a reply action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyDraft {
    /// The message being replied to
    pub message_id: String,
    /// 1-based position of the quoted message in the current view
    pub display_number: usize,
    /// Prefilled composer text quoting the message
    pub prefill: String,
}

/// Engine for per-message interactions.
///
/// Holds the clipboard and share capabilities; state access goes through
/// the store passed per call.
pub struct InteractionEngine<C: ClipboardAccess, S: ShareTarget> {
    clipboard: C,
    share: S,
}

impl<C: ClipboardAccess, S: ShareTarget> InteractionEngine<C, S> {
    /// Create an engine over the given capabilities.
    pub fn new(clipboard: C, share: S) -> Self {
        Self { clipboard, share }
    }

    /// Flip a message's pinned flag.
    ///
    /// Two toggles restore the original value. Unknown ids are a silent
    /// no-op (`None`); otherwise the updated record is returned.
    pub fn toggle_pin<'a>(
        &self,
        store: &'a mut MessageStore,
        id: &str,
    ) -> Option<&'a Message> {
        let pinned = store.find_by_id(id)?.pinned;
        store.update_flags(id, FlagUpdate::pin(!pinned))
    }

    /// Flip a message's expanded flag. Same contract as
    /// [`toggle_pin`](Self::toggle_pin).
    pub fn toggle_expand<'a>(
        &self,
        store: &'a mut MessageStore,
        id: &str,
    ) -> Option<&'a Message> {
        let expanded = store.find_by_id(id)?.expanded;
        store.update_flags(id, FlagUpdate::expand(!expanded))
    }

    /// Copy a message's text to the clipboard.
    ///
    /// Denied clipboard access is logged and absorbed — the caller never
    /// sees an error. Unknown ids are a no-op.
    pub fn copy(&mut self, store: &MessageStore, id: &str) {
        let Some(message) = store.find_by_id(id) else {
            return;
        };
        if let Err(err) = self.clipboard.set_text(&message.text) {
            tracing::debug!(message_id = %id, error = %err, "clipboard copy failed");
        }
    }

    /// Build a composer prefill quoting a message in the current view.
    ///
    /// The display number is the message's 1-based position in `visible`;
    /// a message outside the view yields `None`.
    pub fn reply(&self, visible: &[&Message], id: &str) -> Option<ReplyDraft> {
        let index = visible.iter().position(|m| m.id == id)?;
        let message = visible[index];
        let display_number = index + 1;
        let prefill = format!("> #{} {}\n\n", display_number, derive_title(&message.text));
        Some(ReplyDraft {
            message_id: message.id.clone(),
            display_number,
            prefill,
        })
    }

    /// Hand a message to the platform share capability.
    ///
    /// Reports [`CapabilityError::Unsupported`] when no share capability
    /// exists; never panics. Unknown ids are a no-op.
    pub fn share(&mut self, store: &MessageStore, id: &str) -> Result<(), CapabilityError> {
        let Some(message) = store.find_by_id(id) else {
            tracing::debug!(message_id = %id, "share requested for unknown message");
            return Ok(());
        };
        if !self.share.is_available() {
            return Err(CapabilityError::Unsupported {
                capability: "share",
            });
        }
        self.share.share(&SharePayload {
            title: derive_title(&message.text),
            text: message.text.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockClipboard, MockShareTarget};
    use crate::models::Message;
    use crate::traits::NoSharePlatform;
    use crate::view::pinned_messages;

    fn engine() -> InteractionEngine<MockClipboard, MockShareTarget> {
        InteractionEngine::new(MockClipboard::new(), MockShareTarget::new())
    }

    fn store_with_one(text: &str) -> (MessageStore, String) {
        let mut store = MessageStore::new();
        let message = Message::user(text, None);
        let id = message.id.clone();
        store.append(message);
        (store, id)
    }

    #[test]
    fn test_double_toggle_pin_restores() {
        let engine = engine();
        let (mut store, id) = store_with_one("hello");

        assert!(engine.toggle_pin(&mut store, &id).unwrap().pinned);
        assert!(!engine.toggle_pin(&mut store, &id).unwrap().pinned);
    }

    #[test]
    fn test_toggle_pin_moves_pin_board_by_one() {
        let engine = engine();
        let (mut store, id) = store_with_one("hello");

        assert_eq!(pinned_messages(&store).len(), 0);
        engine.toggle_pin(&mut store, &id);
        assert_eq!(pinned_messages(&store).len(), 1);
        engine.toggle_pin(&mut store, &id);
        assert_eq!(pinned_messages(&store).len(), 0);
    }

    #[test]
    fn test_double_toggle_expand_restores() {
        let engine = engine();
        let (mut store, id) = store_with_one("hello");

        assert!(engine.toggle_expand(&mut store, &id).unwrap().expanded);
        assert!(!engine.toggle_expand(&mut store, &id).unwrap().expanded);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let engine = engine();
        let (mut store, _id) = store_with_one("hello");

        assert!(engine.toggle_pin(&mut store, "missing").is_none());
        assert!(engine.toggle_expand(&mut store, "missing").is_none());
    }

    #[test]
    fn test_copy_writes_clipboard() {
        let clipboard = MockClipboard::new();
        let mut engine = InteractionEngine::new(clipboard.clone(), MockShareTarget::new());
        let (store, id) = store_with_one("copy me");

        engine.copy(&store, &id);
        assert_eq!(clipboard.contents().as_deref(), Some("copy me"));
    }

    #[test]
    fn test_copy_denied_is_absorbed() {
        let mut engine = InteractionEngine::new(MockClipboard::denied(), MockShareTarget::new());
        let (store, id) = store_with_one("copy me");

        // Must not panic or propagate
        engine.copy(&store, &id);
    }

    #[test]
    fn test_copy_unknown_id_is_noop() {
        let clipboard = MockClipboard::new();
        let mut engine = InteractionEngine::new(clipboard.clone(), MockShareTarget::new());
        let (store, _id) = store_with_one("hello");

        engine.copy(&store, "missing");
        assert!(clipboard.contents().is_none());
    }

    #[test]
    fn test_reply_draft_numbering() {
        let engine = engine();
        let owned: Vec<Message> = ["a", "b", "c"]
            .iter()
            .map(|t| Message::user(*t, None))
            .collect();
        let visible: Vec<&Message> = owned.iter().collect();

        let draft = engine.reply(&visible, &owned[2].id).unwrap();
        assert_eq!(draft.display_number, 3);
        assert_eq!(draft.message_id, owned[2].id);
        assert!(draft.prefill.starts_with("> #3 c"));
    }

    #[test]
    fn test_reply_outside_view() {
        let engine = engine();
        let owned = [Message::user("a", None)];
        let visible: Vec<&Message> = owned.iter().collect();

        assert!(engine.reply(&visible, "elsewhere").is_none());
    }

    #[test]
    fn test_share_records_payload() {
        let share = MockShareTarget::new();
        let mut engine = InteractionEngine::new(MockClipboard::new(), share.clone());
        let (store, id) = store_with_one("share me");

        engine.share(&store, &id).unwrap();
        let shared = share.shared();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].text, "share me");
    }

    #[test]
    fn test_share_unsupported_is_reported_not_thrown() {
        let mut engine = InteractionEngine::new(MockClipboard::new(), NoSharePlatform);
        let (store, id) = store_with_one("share me");

        let err = engine.share(&store, &id).unwrap_err();
        assert_eq!(
            err,
            CapabilityError::Unsupported {
                capability: "share"
            }
        );
    }
}
