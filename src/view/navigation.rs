//! Cross-view navigation: mapping a message id to a scroll target.

use crate::error::NavigationError;
use crate::models::Message;

/// A scroll/focus target handed to the rendering layer.
///
/// The index is a position within the *currently visible* sequence, not the
/// full store; it is only valid against the view it was resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollTarget {
    /// 0-based index within the visible sequence
    pub index: usize,
    /// The message to focus
    pub message_id: String,
}

/// Find `id` within the currently visible ordered sequence.
///
/// Returns [`NavigationError::NotInView`] when the message is not visible
/// (e.g. it belongs to a different conversation) rather than guessing an
/// adjacent position; callers may switch view mode first and retry.
pub fn resolve_target(
    visible: &[&Message],
    id: &str,
) -> Result<ScrollTarget, NavigationError> {
    visible
        .iter()
        .position(|m| m.id == id)
        .map(|index| ScrollTarget {
            index,
            message_id: id.to_string(),
        })
        .ok_or_else(|| NavigationError::NotInView { id: id.to_string() })
}
