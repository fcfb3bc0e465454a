use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Message;

/// Messages extracted from one store snapshot, ascending by creation time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Conversation {
    pub source: Option<PathBuf>,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(source: Option<PathBuf>, messages: Vec<Message>) -> Self {
        Self { source, messages }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn oldest(&self) -> Option<DateTime<Utc>> {
        self.messages.first().map(|m| m.created_at)
    }

    pub fn newest(&self) -> Option<DateTime<Utc>> {
        self.messages.last().map(|m| m.created_at)
    }

    /// Number of messages per author role
    pub fn count_by_author(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for message in &self.messages {
            *counts.entry(message.author.as_str()).or_insert(0) += 1;
        }
        counts
    }
}
