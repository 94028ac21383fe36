//! Core data model: messages, questions, and title derivation.

pub mod message;
pub mod question;
pub mod text_utils;

pub use message::{Author, FlagUpdate, Message};
pub use question::Question;
