//! JSON file implementation of the snapshot slot

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

use linkcheck_core::errors::ExError;
use linkcheck_core::{log_op_end, log_op_error, log_op_start, Snapshot};

use crate::atomic::atomic_write;
use crate::errors::{serialization, storage_read, storage_write, Result};
use crate::layout::StoreLayout;
use crate::snapshot::record::SnapshotRecord;
use crate::snapshot::SnapshotStore;

/// Snapshot slot backed by one JSON file, replaced by atomic rename
#[derive(Debug, Clone)]
pub struct FsSnapshotStore {
    path: PathBuf,
}

impl FsSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_layout(layout: &StoreLayout) -> Self {
        Self::new(layout.snapshot_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the slot without absorbing failures
    ///
    /// `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// `StorageRead` when the file exists but cannot be read or decoded.
    pub fn read_snapshot(&self) -> Result<Option<Snapshot>> {
        let path = self.path.display().to_string();

        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(storage_read(&path, e.to_string())),
        };

        let record: SnapshotRecord = serde_json::from_slice(&bytes)
            .map_err(|e| storage_read(&path, format!("invalid snapshot JSON: {}", e)))?;

        record
            .into_snapshot()
            .map(Some)
            .map_err(|e| storage_read(&path, e.to_string()).with_source(ExError::from(e)))
    }
}

impl SnapshotStore for FsSnapshotStore {
    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let start = Instant::now();
        let path = self.path.display().to_string();
        log_op_start!(
            "save_snapshot",
            filename = %snapshot.filename(),
            total_rows = snapshot.total_rows()
        );

        let result = serde_json::to_vec(&SnapshotRecord::from(snapshot))
            .map_err(|e| serialization("encode_snapshot", e))
            .and_then(|json| atomic_write(&self.path, &json).map(|_| json.len()))
            .map_err(|e| storage_write(&path, e));

        let duration_ms = start.elapsed().as_millis() as u64;
        match result {
            Ok(size_bytes) => {
                log_op_end!(
                    "save_snapshot",
                    duration_ms = duration_ms,
                    size_bytes = size_bytes
                );
                Ok(())
            }
            Err(e) => {
                log_op_error!("save_snapshot", e.clone(), duration_ms = duration_ms);
                Err(e)
            }
        }
    }

    fn load(&self) -> Option<Snapshot> {
        match self.read_snapshot() {
            Ok(snapshot) => {
                if snapshot.is_none() {
                    tracing::debug!(path = %self.path.display(), "no snapshot saved yet");
                }
                snapshot
            }
            Err(e) => {
                tracing::warn!(
                    err_code = e.code(),
                    error = %e,
                    "stored snapshot is unreadable, serving as no data"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use linkcheck_core::errors::ExErrorKind;
    use linkcheck_core::Sheet;
    use tempfile::TempDir;

    fn snapshot(filename: &str, url: &str) -> Snapshot {
        let sheet = Sheet::new("Links", vec!["URL".to_string()], vec![vec![url.to_string()]])
            .unwrap();
        Snapshot::new(filename, Utc::now(), 10, vec![sheet]).unwrap()
    }

    #[test]
    fn test_load_empty_slot() {
        let dir = TempDir::new().unwrap();
        let store = FsSnapshotStore::new(dir.path().join("workbook_data.json"));

        assert!(store.load().is_none());
        assert!(store.read_snapshot().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = FsSnapshotStore::new(dir.path().join("workbook_data.json"));
        let s = snapshot("a.xlsx", "https://a.com");

        store.save(&s).unwrap();

        assert_eq!(store.load(), Some(s));
    }

    #[test]
    fn test_corrupt_file_reads_as_error_and_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("workbook_data.json");
        fs::write(&path, b"{\"filename\": ").unwrap();
        let store = FsSnapshotStore::new(&path);

        let err = store.read_snapshot().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::StorageRead);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_failed_save_keeps_previous() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("workbook_data.json");
        let store = FsSnapshotStore::new(&path);
        let first = snapshot("first.xlsx", "https://first.com");
        store.save(&first).unwrap();

        // Point a second store at a path whose parent is a regular file
        let blocked = FsSnapshotStore::new(path.join("nested.json"));
        let err = blocked.save(&snapshot("second.xlsx", "x")).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::StorageWrite);
        assert_eq!(store.load(), Some(first));
    }
}
