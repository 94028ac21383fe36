//! In-flight exchange tracking and the stale-reply guard types.
//!
//! Every submitted message becomes a [`PendingExchange`] carrying the
//! routing scope it was issued under. When the transport completes, the
//! workspace checks the scope against current routing state and either
//! applies the reply or discards it as stale — never applying it to the
//! wrong view.

/// Routing scope an exchange was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteScope {
    /// Issued while composing with no conversation selected
    NewChat,
    /// Issued while the given conversation was active
    Question(String),
}

/// A user message whose assistant reply is still in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingExchange {
    /// Unique id for this exchange
    pub request_id: String,
    /// The user message that triggered the send
    pub user_message_id: String,
    /// Original submitted text; becomes the conversation title on a first
    /// answer
    pub question_text: String,
    /// Routing scope captured at submit time
    pub scope: RouteScope,
    /// Navigation generation captured at submit time
    pub generation: u64,
}

/// Transport completion delivered back to the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Assistant reply text
    Reply(String),
    /// Transport-level failure text, folded into the transcript
    Failure(String),
}

/// Result of applying a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// The reply was appended under this conversation
    Applied {
        question_id: String,
        message_id: String,
    },
    /// Routing state moved since the exchange was issued; the reply was
    /// discarded without touching any store
    Stale,
}
