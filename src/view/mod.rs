//! Read-only projections over session state.
//!
//! Everything here is a pure function of the stores and the current mode;
//! nothing in this module mutates state.

pub mod navigation;
pub mod pin_board;
pub mod resolver;

pub use navigation::{resolve_target, ScrollTarget};
pub use pin_board::pinned_messages;
pub use resolver::visible_messages;
