//! Persisted JSON shape of a snapshot
//!
//! ```json
//! {
//!   "upload_time": "2025-03-01T12:00:00Z",
//!   "filename": "daily.xlsx",
//!   "byte_size": 2048,
//!   "total_rows": 2,
//!   "sheets": {
//!     "Links": { "columns": ["ID", "URL"], "rows": [["1", "https://a.com"]], "row_count": 1 }
//!   }
//! }
//! ```
//!
//! `sheets` is an insertion-ordered map so sheet order survives the round trip.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use linkcheck_core::errors::LinkCheckError;
use linkcheck_core::{Sheet, Snapshot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub upload_time: DateTime<Utc>,
    pub filename: String,
    pub byte_size: u64,
    pub total_rows: usize,
    pub sheets: IndexMap<String, SheetRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetRecord {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub row_count: usize,
}

impl From<&Snapshot> for SnapshotRecord {
    fn from(snapshot: &Snapshot) -> Self {
        let sheets = snapshot
            .sheets()
            .iter()
            .map(|sheet| {
                (
                    sheet.name().to_string(),
                    SheetRecord {
                        columns: sheet.columns().to_vec(),
                        rows: sheet.rows().to_vec(),
                        row_count: sheet.row_count(),
                    },
                )
            })
            .collect();

        Self {
            upload_time: snapshot.upload_time(),
            filename: snapshot.filename().to_string(),
            byte_size: snapshot.byte_size(),
            total_rows: snapshot.total_rows(),
            sheets,
        }
    }
}

impl SnapshotRecord {
    /// Rebuild the snapshot, checking the recorded counts against the data
    ///
    /// # Errors
    ///
    /// `SnapshotUnreadable` or `TotalRowsMismatch` when the record
    /// contradicts itself, `RowWidthMismatch` when a row is misaligned.
    pub fn into_snapshot(self) -> Result<Snapshot, LinkCheckError> {
        let mut sheets = Vec::with_capacity(self.sheets.len());
        for (name, record) in self.sheets {
            if record.row_count != record.rows.len() {
                return Err(LinkCheckError::SnapshotUnreadable {
                    reason: format!(
                        "sheet {} records {} rows but holds {}",
                        name,
                        record.row_count,
                        record.rows.len()
                    ),
                });
            }
            sheets.push(Sheet::new(name, record.columns, record.rows)?);
        }

        let snapshot = Snapshot::new(self.filename, self.upload_time, self.byte_size, sheets)?;
        if snapshot.total_rows() != self.total_rows {
            return Err(LinkCheckError::TotalRowsMismatch {
                recorded: self.total_rows,
                actual: snapshot.total_rows(),
            });
        }

        Ok(snapshot)
    }
}
