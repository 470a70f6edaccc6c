//! On-disk layout of the data directory

use std::path::{Path, PathBuf};

/// File holding the single active snapshot
pub const SNAPSHOT_FILE: &str = "workbook_data.json";

/// File holding the admin credential record
pub const CREDENTIALS_FILE: &str = "admin_auth.json";

/// Resolves store file paths under one data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLayout {
    data_dir: PathBuf,
}

impl StoreLayout {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(SNAPSHOT_FILE)
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.data_dir.join(CREDENTIALS_FILE)
    }
}

impl Default for StoreLayout {
    fn default() -> Self {
        Self::new(".linkcheck")
    }
}
