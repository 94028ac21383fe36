//! Arboard-backed system clipboard.

use crate::error::CapabilityError;
use crate::traits::ClipboardAccess;

/// System clipboard using `arboard` (NSPasteboard on macOS, X11/Wayland on
/// Linux).
///
/// The clipboard handle is opened per call; holding it for the process
/// lifetime can block other clipboard clients on X11.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Create a new system clipboard adapter.
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardAccess for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), CapabilityError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| CapabilityError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| CapabilityError::Clipboard(e.to_string()))
    }
}
