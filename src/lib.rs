//! Chat Store Explorer - read the ChatGPT desktop app's locally stored conversations
//!
//! The desktop app keeps property-list snapshots of its conversation tree under
//! `~/Library/Application Support/com.openai.chat`. This library:
//!
//! - Locates the most recently modified snapshot (`*.data`)
//! - Parses it as a binary or XML property list
//! - Extracts every well-formed message from `tree.storage`
//! - Orders the messages by creation time
//!
//! Extraction is best effort: unreadable files and incomplete records produce
//! fewer messages, never an error.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use chat_store_explorer::load_latest_conversation;
//!
//! let store = Path::new("/Users/alice/Library/Application Support/com.openai.chat");
//! if let Some(conversation) = load_latest_conversation(store) {
//!     println!("Loaded {} messages", conversation.len());
//! }
//! ```

pub mod cli;
pub mod clipboard;
pub mod loader;
pub mod locator;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use loader::{StoreSource, load_conversation_from, load_latest_conversation};
pub use locator::find_latest_file;
pub use models::{Conversation, Message};
pub use parsers::{extract_conversation, extract_from_value};
pub use utils::{STORE_FILE_EXTENSION, default_store_dir, format_path_with_tilde};
