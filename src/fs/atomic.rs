//! Atomic filesystem operations for amur.
//!
//! All file writes follow this pattern:
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename the temporary file onto the target path
//!
//! `rename()` is atomic when source and destination live on the same
//! filesystem, which is guaranteed because the temporary file is created next
//! to its target. On crash, a temporary file named `.{filename}.amur-tmp` may
//! remain; the final path is either absent or complete.

use crate::error::{AmurError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
///
/// The parent directory must already exist; the materializer creates the
/// directory skeleton before writing any file.
///
/// # Errors
///
/// Returns `AmurError::Materialization` naming `path` on any failure. The
/// temporary file is removed on a best-effort basis.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let temp_path = generate_temp_path(path)?;

    write_and_sync(&temp_path, content).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        AmurError::materialization(path, e)
    })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        AmurError::materialization(path, e)
    })?;

    sync_parent(path);
    Ok(())
}

/// Create a plain directory if it does not exist yet.
///
/// Idempotent: an existing directory is accepted, an existing file is not.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir(path).map_err(|e| AmurError::materialization(path, e))
}

/// Generate a temporary file path in the same directory as the target.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AmurError::materialization(target, "invalid file path"))?;

    Ok(parent.join(format!(".{}.amur-tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

/// Persist the directory entry of a freshly renamed file.
#[cfg(unix)]
fn sync_parent(target: &Path) {
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent(_target: &Path) {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("app.js");

        atomic_write(&file_path, b"console.log('hi');\n").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "console.log('hi');\n");
    }

    #[test]
    fn test_atomic_write_replace_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("package.json");

        fs::write(&file_path, "{}").unwrap();
        atomic_write(&file_path, b"{\"name\": \"x\"}").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "{\"name\": \"x\"}");
    }

    #[test]
    fn test_atomic_write_temp_file_cleanup() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        atomic_write(&file_path, b"content").unwrap();

        let temp_path = temp_dir.path().join(".test.txt.amur-tmp");
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_atomic_write_missing_parent_names_target() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing").join("test.txt");

        let err = atomic_write(&file_path, b"content").unwrap_err();
        match err {
            AmurError::Materialization { path, .. } => assert_eq!(path, file_path),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(!file_path.exists());
    }

    #[test]
    fn test_atomic_write_empty_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join(".gitkeep");

        atomic_write(&file_path, b"").unwrap();

        assert!(fs::read(&file_path).unwrap().is_empty());
    }

    #[test]
    fn test_generate_temp_path() {
        let target = Path::new("/some/path/file.txt");
        let temp = generate_temp_path(target).unwrap();

        assert_eq!(temp, Path::new("/some/path/.file.txt.amur-tmp"));
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("config");

        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();

        assert!(dir.is_dir());
    }

    #[test]
    fn test_ensure_dir_rejects_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config");
        fs::write(&path, "not a dir").unwrap();

        assert!(matches!(
            ensure_dir(&path),
            Err(AmurError::Materialization { .. })
        ));
    }
}
