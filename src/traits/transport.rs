//! Outbound chat transport trait abstraction.
//!
//! The network client is an external collaborator: the core calls it once
//! per user-submitted message and feeds the result back into the message
//! store. The trait enables dependency injection and mocking in tests.

use async_trait::async_trait;

use crate::error::TransportError;

/// A reply from the chat backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// Assistant reply text
    pub text: String,
}

/// Trait for the outbound chat send.
///
/// Implementations include the production webhook client
/// ([`WebhookTransport`](crate::adapters::WebhookTransport)) and
/// [`MockTransport`](crate::adapters::mock::MockTransport) for tests.
///
/// # Example
///
/// ```ignore
/// use banter::traits::{ChatTransport, ChatReply};
///
/// async fn ask<T: ChatTransport>(transport: &T) -> Option<String> {
///     transport.send("What is X?", "session-1").await.ok().map(|r| r.text)
/// }
/// ```
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send one user-submitted message and await the assistant reply.
    ///
    /// # Arguments
    /// * `text` - The user's message text
    /// * `session_id` - Opaque session identifier supplied by the host
    async fn send(&self, text: &str, session_id: &str) -> Result<ChatReply, TransportError>;
}
