use std::path::{Path, PathBuf};

use crate::locator::find_latest_file;
use crate::models::Conversation;
use crate::parsers::extract_conversation;
use crate::utils::STORE_FILE_EXTENSION;

/// Locate the newest snapshot under `store_dir` and extract its conversation
///
/// Returns `None` only when no snapshot file exists. A snapshot that cannot be
/// parsed produces a conversation with no messages.
///
/// # Examples
///
/// ```no_run
/// use chat_store_explorer::{default_store_dir, load_latest_conversation};
///
/// let store = default_store_dir().expect("home directory");
/// if let Some(conversation) = load_latest_conversation(&store) {
///     for message in &conversation.messages {
///         println!("{}: {}", message.author, message.content);
///     }
/// }
/// ```
pub fn load_latest_conversation(store_dir: &Path) -> Option<Conversation> {
    let Some(path) = find_latest_file(store_dir, STORE_FILE_EXTENSION) else {
        tracing::info!(dir = %store_dir.display(), "no conversation store found");
        return None;
    };
    Some(load_conversation_from(&path))
}

/// Extract the conversation from an explicit snapshot file
pub fn load_conversation_from(path: &Path) -> Conversation {
    let messages = extract_conversation(path);
    Conversation::new(Some(path.to_path_buf()), messages)
}

/// Where a conversation is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSource {
    /// Scan a store directory for the newest snapshot
    Directory(PathBuf),
    /// Read one snapshot file directly
    File(PathBuf),
}

impl StoreSource {
    /// Run the whole pipeline for this source
    pub fn load(&self) -> Option<Conversation> {
        match self {
            StoreSource::Directory(dir) => load_latest_conversation(dir),
            StoreSource::File(path) => Some(load_conversation_from(path)),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            StoreSource::Directory(path) | StoreSource::File(path) => path,
        }
    }
}
