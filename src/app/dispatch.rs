//! Fire-and-forget reply dispatch.
//!
//! Bridges the async transport boundary back into the single-threaded owner
//! of the [`Workspace`](super::Workspace): a completed send is delivered as
//! a [`WorkspaceEvent`] over an unbounded channel, and the owner applies it
//! with [`Workspace::apply_reply`](super::Workspace::apply_reply), where the
//! stale-reply guard runs.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::traits::ChatTransport;

use super::exchange::{PendingExchange, SendOutcome};

/// Events delivered back to the workspace owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceEvent {
    /// A transport send completed, successfully or not
    ReplyArrived {
        exchange: PendingExchange,
        outcome: SendOutcome,
    },
}

/// Spawn the transport send for an exchange.
///
/// Transport errors are folded into [`SendOutcome::Failure`] so the owner
/// applies them through the same path as replies. A failed channel send
/// means the owner is gone; the outcome is dropped.
///
/// Must be called from within a tokio runtime.
pub fn spawn_send(
    transport: Arc<dyn ChatTransport>,
    session_id: String,
    exchange: PendingExchange,
    events: UnboundedSender<WorkspaceEvent>,
) {
    tokio::spawn(async move {
        let outcome = match transport.send(&exchange.question_text, &session_id).await {
            Ok(reply) => SendOutcome::Reply(reply.text),
            Err(err) => {
                tracing::debug!(
                    request_id = %exchange.request_id,
                    error = %err,
                    "chat send failed"
                );
                SendOutcome::Failure(err.to_string())
            }
        };
        let _ = events.send(WorkspaceEvent::ReplyArrived { exchange, outcome });
    });
}
