//! Mock collaborator adapters for testing.
//!
//! Each mock records what went through it and can be cloned to keep an
//! observation handle after the original moves into an engine or task.

pub mod clipboard;
pub mod share;
pub mod transport;

pub use clipboard::MockClipboard;
pub use share::MockShareTarget;
pub use transport::{MockTransport, RecordedSend};
