//! Session state containers.
//!
//! - [`MessageStore`]: ordered chat turns with flag-update primitives
//! - [`QuestionRegistry`]: named conversation records
//! - [`FolderDirectory`]: project grouping names in insertion order
//! - [`SessionState`] / [`ViewMode`]: routing state passed explicitly
//!   through the component call chain

pub mod folders;
pub mod registry;
pub mod session;
pub mod store;

pub use folders::{FolderDirectory, DEFAULT_FOLDER};
pub use registry::QuestionRegistry;
pub use session::{SessionState, ViewMode};
pub use store::MessageStore;
