use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A single conversation turn recovered from a store snapshot.
///
/// The `id` is generated when the message is extracted and carries no meaning in
/// the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(author: String, content: String, created_at: DateTime<Utc>) -> Self {
        Self { id: Uuid::new_v4(), author, content, created_at }
    }

    /// First line of the content, used for list previews
    pub fn preview(&self) -> &str {
        self.content.lines().next().unwrap_or("")
    }
}
