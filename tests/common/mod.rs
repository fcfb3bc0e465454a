//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use plist::{Dictionary, Value};
use tempfile::TempDir;

/// Store location relative to the fake home directory
pub const STORE_SUBDIR: &str = "Library/Application Support/com.openai.chat";

/// On-disk encoding of a snapshot
#[derive(Debug, Clone, Copy)]
pub enum Format {
    Binary,
    Xml,
}

/// Builder for a fake home directory containing a conversation store
pub struct StoreDirBuilder {
    home: TempDir,
}

impl StoreDirBuilder {
    /// Create a new home directory with an empty store directory
    pub fn new() -> Self {
        let home = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(home.path().join(STORE_SUBDIR)).expect("Failed to create store dir");
        Self { home }
    }

    /// Home directory (use as HOME for CLI tests)
    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Store directory scanned by the locator
    pub fn store_dir(&self) -> PathBuf {
        self.home.path().join(STORE_SUBDIR)
    }

    /// Write a snapshot at `relative` (inside the store) with the given mtime
    pub fn with_snapshot(
        self,
        relative: &str,
        snapshot: &SnapshotBuilder,
        format: Format,
        mtime_secs: u64,
    ) -> Self {
        let path = self.store_dir().join(relative);
        snapshot.write_to(&path, format);
        set_mtime(&path, mtime_secs);
        self
    }

    /// Write raw bytes at `relative` (inside the store) with the given mtime
    pub fn with_raw_file(self, relative: &str, bytes: &[u8], mtime_secs: u64) -> Self {
        let path = self.store_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, bytes).expect("Failed to write raw file");
        set_mtime(&path, mtime_secs);
        self
    }

    /// Consume the builder, keeping the temp directory alive
    pub fn build(self) -> TempDir {
        self.home
    }
}

impl Default for StoreDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn set_mtime(path: &Path, secs: u64) {
    let file = File::options().write(true).open(path).expect("Failed to open for mtime");
    file.set_modified(UNIX_EPOCH + Duration::from_secs(secs)).expect("Failed to set mtime");
}

/// Builder for a snapshot document (`tree.storage`)
pub struct SnapshotBuilder {
    nodes: Vec<(String, NodeBuilder)>,
    include_storage: bool,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), include_storage: true }
    }

    /// Add a storage node under `id`
    pub fn with_node(mut self, id: &str, node: NodeBuilder) -> Self {
        self.nodes.push((id.to_string(), node));
        self
    }

    /// Leave out the `storage` key entirely
    pub fn without_storage(mut self) -> Self {
        self.include_storage = false;
        self
    }

    pub fn to_value(&self) -> Value {
        let mut tree = Dictionary::new();
        if self.include_storage {
            let storage: Dictionary =
                self.nodes.iter().map(|(id, node)| (id.clone(), node.to_value())).collect();
            tree.insert("storage".to_string(), Value::Dictionary(storage));
        }
        tree.insert("rootID".to_string(), Value::String("root".to_string()));

        let mut root = Dictionary::new();
        root.insert("tree".to_string(), Value::Dictionary(tree));
        root.insert("title".to_string(), Value::String("Test conversation".to_string()));
        Value::Dictionary(root)
    }

    pub fn write_to(&self, path: &Path, format: Format) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        let value = self.to_value();
        match format {
            Format::Binary => value.to_file_binary(path).expect("Failed to write binary plist"),
            Format::Xml => value.to_file_xml(path).expect("Failed to write xml plist"),
        }
    }
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one storage node
#[derive(Clone)]
pub struct NodeBuilder {
    role: Option<String>,
    parts: Option<Vec<String>>,
    created_at: Option<SystemTime>,
}

impl NodeBuilder {
    /// A complete node with the given role, single part and creation time (Unix seconds)
    pub fn message(role: &str, text: &str, created_secs: u64) -> Self {
        Self {
            role: Some(role.to_string()),
            parts: Some(vec![text.to_string()]),
            created_at: Some(UNIX_EPOCH + Duration::from_secs(created_secs)),
        }
    }

    pub fn without_role(mut self) -> Self {
        self.role = None;
        self
    }

    pub fn without_parts(mut self) -> Self {
        self.parts = None;
        self
    }

    pub fn without_created_at(mut self) -> Self {
        self.created_at = None;
        self
    }

    pub fn parts(mut self, parts: &[&str]) -> Self {
        self.parts = Some(parts.iter().map(|p| p.to_string()).collect());
        self
    }

    pub fn to_value(&self) -> Value {
        let mut author = Dictionary::new();
        if let Some(role) = &self.role {
            author.insert("role".to_string(), Value::String(role.clone()));
        }
        author.insert("metadata".to_string(), Value::Dictionary(Dictionary::new()));

        let mut inner = Dictionary::new();
        inner.insert("content_type".to_string(), Value::String("text".to_string()));
        if let Some(parts) = &self.parts {
            inner.insert(
                "parts".to_string(),
                Value::Array(parts.iter().cloned().map(Value::String).collect()),
            );
        }

        let mut content = Dictionary::new();
        content.insert("author".to_string(), Value::Dictionary(author));
        content.insert("content".to_string(), Value::Dictionary(inner));

        let mut node = Dictionary::new();
        node.insert("content".to_string(), Value::Dictionary(content));
        if let Some(created_at) = self.created_at {
            node.insert("createdAt".to_string(), Value::Date(created_at.into()));
        }
        Value::Dictionary(node)
    }
}
