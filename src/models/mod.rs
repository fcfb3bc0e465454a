//! Data models for extracted conversations.
//!
//! - [`Message`] - one resolved conversation turn
//! - [`Conversation`] - the ordered messages of a single store snapshot

pub mod conversation;
pub mod message;

pub use conversation::Conversation;
pub use message::Message;
