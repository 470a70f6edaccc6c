use chrono::{DateTime, Utc};
use linkcheck_core::Snapshot;
use serde::Serialize;

/// What the outer surfaces show about the active workbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkbookSummary {
    pub filename: String,
    pub upload_time: DateTime<Utc>,
    pub byte_size: u64,
    pub sheet_count: usize,
    pub total_rows: usize,
    pub sheets: Vec<SheetSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetSummary {
    pub name: String,
    pub row_count: usize,
    pub column_count: usize,
}

impl From<&Snapshot> for WorkbookSummary {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            filename: snapshot.filename().to_string(),
            upload_time: snapshot.upload_time(),
            byte_size: snapshot.byte_size(),
            sheet_count: snapshot.sheet_count(),
            total_rows: snapshot.total_rows(),
            sheets: snapshot
                .sheets()
                .iter()
                .map(|s| SheetSummary {
                    name: s.name().to_string(),
                    row_count: s.row_count(),
                    column_count: s.column_count(),
                })
                .collect(),
        }
    }
}
