//! Mock clipboard for testing.

use std::sync::{Arc, Mutex};

use crate::error::CapabilityError;
use crate::traits::ClipboardAccess;

/// Mock clipboard that records writes and can simulate denied access.
///
/// Clones share the stored contents, so a test can keep a handle after
/// moving the mock into an engine.
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    deny: bool,
    contents: Arc<Mutex<Option<String>>>,
}

impl MockClipboard {
    /// Create a mock that accepts writes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails every write, as when clipboard access is
    /// denied by the platform.
    pub fn denied() -> Self {
        Self {
            deny: true,
            contents: Arc::new(Mutex::new(None)),
        }
    }

    /// The last written text, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl ClipboardAccess for MockClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), CapabilityError> {
        if self.deny {
            return Err(CapabilityError::Clipboard("access denied".to_string()));
        }
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}
