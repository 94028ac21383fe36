//! Mock chat transport for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::TransportError;
use crate::traits::{ChatReply, ChatTransport};

/// A recorded send for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSend {
    /// Submitted message text
    pub text: String,
    /// Session id the send was issued under
    pub session_id: String,
}

/// Mock chat transport returning scripted outcomes.
///
/// Outcomes are consumed front to back; an unscripted send fails with a
/// connection error so tests never silently pass on a missing script.
/// Clones share the script and the recorded sends.
///
/// # Example
///
/// ```ignore
/// use banter::adapters::mock::MockTransport;
///
/// let transport = MockTransport::new();
/// transport.script_reply("X is a thing.");
/// // ... drive the workspace, then:
/// assert_eq!(transport.sends().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<VecDeque<Result<ChatReply, TransportError>>>>,
    sends: Arc<Mutex<Vec<RecordedSend>>>,
}

impl MockTransport {
    /// Create a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn script_reply(&self, text: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(ChatReply { text: text.into() }));
    }

    /// Queue a transport failure.
    pub fn script_error(&self, error: TransportError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    /// All sends made through this mock, in order.
    pub fn sends(&self) -> Vec<RecordedSend> {
        self.sends.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn send(&self, text: &str, session_id: &str) -> Result<ChatReply, TransportError> {
        self.sends.lock().unwrap().push(RecordedSend {
            text: text.to_string(),
            session_id: session_id.to_string(),
        });

        self.script.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(TransportError::Connection(format!(
                "no scripted reply for '{}'",
                text
            )))
        })
    }
}
