use std::path::{Path, PathBuf};

/// Store location relative to the user's home directory
pub const STORE_SUBDIR: &str = "Library/Application Support/com.openai.chat";

/// Extension carried by conversation snapshot files
pub const STORE_FILE_EXTENSION: &str = "data";

/// Get the conversation store directory (~/Library/Application Support/com.openai.chat)
///
/// Returns `None` when the home directory cannot be determined.
pub fn default_store_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| store_dir_under(&home))
}

pub(crate) fn store_dir_under(home: &Path) -> PathBuf {
    home.join(STORE_SUBDIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_dir_under_home() {
        let dir = store_dir_under(Path::new("/Users/testuser"));
        assert_eq!(
            dir,
            PathBuf::from("/Users/testuser/Library/Application Support/com.openai.chat")
        );
    }

    #[test]
    fn test_default_store_dir_ends_with_subdir() {
        // Home may be unset in sandboxed CI; only check the shape when present
        if let Some(dir) = default_store_dir() {
            assert!(dir.ends_with(STORE_SUBDIR));
        }
    }
}
