//! Directory and file creation
//!
//! Each call opens, writes and closes its target before returning. The first
//! failure is returned with the offending path attached; nothing already
//! written is rolled back.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Create a directory and any missing parents
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn create_dir(path: &Path) -> Result<()> {
    debug!(path = %path.display(), "creating directory");
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}

/// Write `contents` to `path`, replacing any existing file
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = contents.len(), "writing file");
    fs::write(path, contents)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Whether anything, including a dangling symlink, occupies `path`
#[must_use]
pub fn is_occupied(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_dir_is_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a/b/c");

        create_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_write_file_reports_path_on_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing/dir/file.txt");

        let err = write_file(&path, "content").unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));
        assert!(err.to_string().contains("file.txt"));
    }

    #[test]
    fn test_write_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("README.md");

        write_file(&path, "# hello\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# hello\n");
    }

    #[test]
    fn test_is_occupied() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blog");
        assert!(!is_occupied(&path));

        fs::write(&path, "").unwrap();
        assert!(is_occupied(&path));
    }
}
