use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::Result;
use walkdir::{DirEntry, WalkDir};

/// Find the most recently modified file with `extension` below `root`
///
/// Walks `root` recursively, skipping hidden files and anything inside hidden
/// directories. Among regular files whose extension matches, returns the one with
/// the latest modification time; on a tie the entry seen last wins.
///
/// # Returns
///
/// `None` if `root` does not exist, cannot be read, or holds no matching file.
/// Entries that fail to enumerate or whose metadata cannot be read are skipped,
/// so this never fails outright.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use chat_store_explorer::find_latest_file;
///
/// if let Some(path) = find_latest_file(Path::new("/Users/alice/store"), "data") {
///     println!("latest snapshot: {}", path.display());
/// }
/// ```
pub fn find_latest_file(root: &Path, extension: &str) -> Option<PathBuf> {
    let mut latest: Option<(SystemTime, PathBuf)> = None;

    let walker = WalkDir::new(root).into_iter().filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() || entry.path().extension() != Some(OsStr::new(extension))
        {
            continue;
        }

        let modified = match modified_time(&entry) {
            Ok(modified) => modified,
            Err(e) => {
                tracing::debug!(
                    path = %entry.path().display(),
                    "skipping file without mtime: {:#}",
                    e
                );
                continue;
            }
        };

        if latest.as_ref().is_none_or(|(best, _)| modified >= *best) {
            latest = Some((modified, entry.into_path()));
        }
    }

    latest.map(|(_, path)| path)
}

fn modified_time(entry: &DirEntry) -> Result<SystemTime> {
    let metadata = entry.metadata()?;
    Ok(metadata.modified()?)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().as_encoded_bytes().starts_with(b".")
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};
    use std::time::{Duration, UNIX_EPOCH};

    use tempfile::TempDir;

    use super::*;

    fn touch(path: &Path, secs: u64) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let file = File::create(path).unwrap();
        file.set_modified(UNIX_EPOCH + Duration::from_secs(secs)).unwrap();
    }

    #[test]
    fn test_nonexistent_root() {
        assert_eq!(find_latest_file(Path::new("/nonexistent/store/dir"), "data"), None);
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert_eq!(find_latest_file(dir.path(), "data"), None);
    }

    #[test]
    fn test_single_match() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("only.data");
        touch(&target, 1_000);
        touch(&dir.path().join("notes.txt"), 5_000);

        assert_eq!(find_latest_file(dir.path(), "data"), Some(target));
    }

    #[test]
    fn test_picks_latest_of_three() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("a.data"), 1_000);
        touch(&dir.path().join("nested/deeper/c.data"), 3_000);
        touch(&dir.path().join("nested/b.data"), 2_000);

        assert_eq!(
            find_latest_file(dir.path(), "data"),
            Some(dir.path().join("nested/deeper/c.data"))
        );
    }

    #[test]
    fn test_skips_hidden_files_and_directories() {
        let dir = TempDir::new().unwrap();
        let visible = dir.path().join("visible.data");
        touch(&visible, 1_000);
        touch(&dir.path().join(".hidden.data"), 9_000);
        touch(&dir.path().join(".cache/inside.data"), 9_000);

        assert_eq!(find_latest_file(dir.path(), "data"), Some(visible));
    }

    // macOS file systems reject non-UTF-8 names
    #[cfg(target_os = "linux")]
    #[test]
    fn test_skips_hidden_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let visible = dir.path().join("visible.data");
        touch(&visible, 1_000);
        let hidden = OsStr::from_bytes(b".hidden\xff");
        touch(&dir.path().join(hidden).join("inside.data"), 9_000);
        let mut hidden_file = b".bad\xfe".to_vec();
        hidden_file.extend_from_slice(b".data");
        touch(&dir.path().join(OsStr::from_bytes(&hidden_file)), 9_000);

        assert_eq!(find_latest_file(dir.path(), "data"), Some(visible));
    }

    #[test]
    fn test_hidden_root_is_still_walked() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join(".store");
        let target = root.join("conv.data");
        touch(&target, 1_000);

        assert_eq!(find_latest_file(&root, "data"), Some(target));
    }

    #[test]
    fn test_extension_must_match_exactly() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("conv.database"), 1_000);
        touch(&dir.path().join("conv.data.bak"), 1_000);
        fs::create_dir_all(dir.path().join("folder.data")).unwrap();

        assert_eq!(find_latest_file(dir.path(), "data"), None);
    }
}
