//! Property-list parsing for conversation store snapshots
//!
//! # Error Handling Strategy
//!
//! Extraction is **best effort**. The snapshot format is undocumented and changes
//! between app versions, so:
//!
//! - **File-level failures** (unreadable, oversized, not a property list) are logged
//!   with `tracing::warn!` and produce an empty conversation.
//! - **Shape failures** at the document level (no `tree.storage`) produce an empty
//!   conversation; at the node level they skip that node with a `tracing::debug!`
//!   line naming the missing field.
//!
//! Callers never see a distinguishable error, only fewer (or zero) messages.

pub mod conversation;
pub mod deserializers;
pub mod value;

pub use conversation::{extract_conversation, extract_from_value};
