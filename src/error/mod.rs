//! Typed error taxonomy for the workspace core.
//!
//! Three families cover everything that can go wrong here:
//!
//! - [`NavigationError`]: a lookup used for navigation missed; surfaced so
//!   the caller can widen the view and retry.
//! - [`CapabilityError`]: a platform capability (share, clipboard) is
//!   unavailable or failed; reported, never thrown.
//! - [`TransportError`]: the outbound chat transport failed; folded into the
//!   transcript by the dispatch layer.
//!
//! Structural no-ops (deleting or flag-updating an unknown id) are not
//! errors at all — those operations absorb the miss locally so every state
//! transition stays total. A stale asynchronous reply is likewise a normal
//! outcome ([`ReplyOutcome::Stale`](crate::app::ReplyOutcome::Stale)), not an
//! error. There is no fatal error class in this crate.

use thiserror::Error;

/// Navigation lookups that miss are surfaced, not absorbed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The message exists nowhere in the currently visible sequence.
    /// Callers may switch view mode first and retry.
    #[error("message {id} is not in the current view")]
    NotInView { id: String },
}

/// A platform capability is unavailable or failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// The capability does not exist on this platform.
    #[error("{capability} is not supported on this platform")]
    Unsupported { capability: &'static str },

    /// Clipboard access was denied or failed.
    #[error("clipboard access failed: {0}")]
    Clipboard(String),
}

/// Errors from the outbound chat transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection could not be established.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The request timed out.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The server answered with a non-success status.
    #[error("server returned status {code}")]
    Status { code: u16 },

    /// The reply body could not be decoded.
    #[error("failed to decode reply: {0}")]
    Decode(String),
}
