//! Clipboard trait abstraction.

use crate::error::CapabilityError;

/// Trait for writing text to the system clipboard.
///
/// Kept as a seam so the interaction engine can absorb clipboard denial
/// without touching the OS in tests.
pub trait ClipboardAccess: Send {
    /// Place `text` on the clipboard.
    fn set_text(&mut self, text: &str) -> Result<(), CapabilityError>;
}
