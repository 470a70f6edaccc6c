//! Atomic write primitive
//!
//! Content goes to a uniquely named temp file in the target's directory, is
//! flushed to disk, then renamed over the target. Readers see the old file
//! or the new one, never a partial write.

use crate::errors::{io_error, Result};
use linkcheck_core::errors::{ExError, ExErrorKind};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Atomically replace `target_path` with `content`
///
/// # Errors
///
/// `Io` if the directory, temp file or rename fails. The temp file is
/// removed on failure and the target is left untouched.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error("create_data_dir", e))?;
        }
    }

    let temp_path = temp_path_for(target_path)?;

    if let Err(e) = write_and_sync(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("write_temp", e));
    }

    if let Err(e) = fs::rename(&temp_path, target_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("rename_temp", e));
    }

    Ok(())
}

fn write_and_sync(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

/// `<dir>/.<file_name>.<uuid>.tmp` so concurrent writers never share a temp file
fn temp_path_for(target_path: &Path) -> Result<PathBuf> {
    let file_name = target_path.file_name().ok_or_else(|| {
        ExError::new(ExErrorKind::InvalidInput)
            .with_op("atomic_write")
            .with_message(format!("Not a file path: {}", target_path.display()))
    })?;

    Ok(target_path.with_file_name(format!(
        ".{}.{}.tmp",
        file_name.to_string_lossy(),
        Uuid::new_v4().simple()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tmp_files(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map(|s| s.ends_with(".tmp"))
                    .unwrap_or(false)
            })
            .count()
    }

    #[test]
    fn test_atomic_write() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("slot.json");

        atomic_write(&target, b"hello").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"hello");
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("slot.json");

        atomic_write(&target, b"old").unwrap();
        atomic_write(&target, b"new").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"new");
        assert_eq!(tmp_files(temp_dir.path()), 0);
    }

    #[test]
    fn test_atomic_write_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("nested").join("slot.json");

        atomic_write(&target, b"nested").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"nested");
    }

    #[test]
    fn test_failed_rename_leaves_target_and_no_temp() {
        let temp_dir = TempDir::new().unwrap();
        // A non-empty directory cannot be replaced by a file rename
        let target = temp_dir.path().join("slot.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), b"x").unwrap();

        let err = atomic_write(&target, b"data").unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::Io);
        assert!(target.join("keep").exists());
        assert_eq!(tmp_files(temp_dir.path()), 0);
    }
}
