use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use plist::{Dictionary, Value};

use super::value::{get_date, get_dict, get_path, get_string, get_string_array};
use crate::models::Message;
use crate::utils::validate_file_size;

/// Keys leading from the document root to the per-node storage dictionary
const STORAGE_PATH: [&str; 2] = ["tree", "storage"];

/// Extract the conversation stored in a property-list snapshot file.
///
/// Returns the messages ascending by creation time. Nothing here is fatal: an
/// unreadable or malformed file yields an empty vector, and nodes missing any
/// required field are skipped.
pub fn extract_conversation(path: &Path) -> Vec<Message> {
    match read_document(path) {
        Ok(document) => {
            let messages = extract_from_value(&document);
            tracing::info!(
                path = %path.display(),
                messages = messages.len(),
                "extracted conversation"
            );
            messages
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to read conversation store: {:#}", e);
            Vec::new()
        }
    }
}

/// Extract messages from an already deserialized document
pub fn extract_from_value(document: &Value) -> Vec<Message> {
    let Some(storage) = get_path(document, &STORAGE_PATH) else {
        tracing::debug!("document has no tree.storage dictionary");
        return Vec::new();
    };

    let mut messages: Vec<Message> = storage
        .iter()
        .filter_map(|(node_id, node)| match resolve_node(node) {
            Ok(message) => Some(message),
            Err(reason) => {
                tracing::debug!(node = %node_id, reason, "skipping storage node");
                None
            }
        })
        .collect();

    messages.sort_by_key(|m| m.created_at);
    messages
}

fn read_document(path: &Path) -> Result<Value> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open conversation store: {}", path.display()))?;
    validate_file_size(&file, path)?;

    Value::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse property list: {}", path.display()))
}

/// Resolve one storage node into a message, or name the first missing piece
fn resolve_node(node: &Value) -> Result<Message, &'static str> {
    let node: &Dictionary = node.as_dictionary().ok_or("node is not a dictionary")?;
    let content = get_dict(node, "content").ok_or("missing content")?;

    let author = get_dict(content, "author")
        .and_then(|author| get_string(author, "role"))
        .ok_or("missing content.author.role")?;

    let parts = get_dict(content, "content")
        .and_then(|inner| get_string_array(inner, "parts"))
        .ok_or("missing content.content.parts")?;
    let first_part = parts.first().ok_or("empty content.content.parts")?;

    let created_at = get_date(node, "createdAt").ok_or("missing createdAt")?;

    Ok(Message::new(author.to_string(), first_part.to_string(), created_at))
}
