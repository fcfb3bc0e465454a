//! The load pipeline: store discovery followed by extraction.
//!
//! Both steps run as one unit so a caller (the CLI or a TUI reload) always
//! replaces its conversation with a complete result, never a partial one.

pub mod pipeline;

pub use pipeline::{StoreSource, load_conversation_from, load_latest_conversation};
