use chrono::{DateTime, Utc};
use std::time::Instant;

use crate::errors::{LinkCheckError, Result};
use crate::ingest::raw::{CellValue, RawSheet, RawWorkbook};
use crate::model::{Row, Sheet, Snapshot};
use crate::{log_op_end, log_op_error, log_op_start};

/// Facts about the upload that the workbook itself does not carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSource {
    pub filename: String,
    pub byte_size: u64,
}

impl UploadSource {
    pub fn new(filename: impl Into<String>, byte_size: u64) -> Self {
        Self {
            filename: filename.into(),
            byte_size,
        }
    }
}

/// Normalize a decoded workbook into a new snapshot stamped with the current time
///
/// # Errors
///
/// Ingestion errors (`NoSheets`, `DuplicateSheet`, `RowWidthMismatch`). No
/// snapshot is produced on failure.
pub fn ingest(raw: RawWorkbook, source: UploadSource) -> Result<Snapshot> {
    ingest_at(raw, source, Utc::now())
}

/// Same as [`ingest`] with an explicit upload time
///
/// # Errors
///
/// See [`ingest`].
pub fn ingest_at(
    raw: RawWorkbook,
    source: UploadSource,
    upload_time: DateTime<Utc>,
) -> Result<Snapshot> {
    let start = Instant::now();
    log_op_start!(
        "ingest",
        filename = %source.filename,
        sheet_count = raw.sheets.len()
    );

    let result = build_snapshot(raw, source, upload_time);
    let duration_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(snapshot) => {
            log_op_end!(
                "ingest",
                duration_ms = duration_ms,
                total_rows = snapshot.total_rows()
            );
        }
        Err(e) => {
            log_op_error!("ingest", e.clone(), duration_ms = duration_ms);
        }
    }

    result
}

fn build_snapshot(
    raw: RawWorkbook,
    source: UploadSource,
    upload_time: DateTime<Utc>,
) -> Result<Snapshot> {
    if raw.sheets.is_empty() {
        return Err(LinkCheckError::NoSheets);
    }

    let sheets = raw
        .sheets
        .into_iter()
        .map(normalize_sheet)
        .collect::<Result<Vec<_>>>()?;

    Snapshot::new(source.filename, upload_time, source.byte_size, sheets)
}

fn normalize_sheet(raw: RawSheet) -> Result<Sheet> {
    let width = raw.columns.len();
    let mut rows = Vec::with_capacity(raw.rows.len());

    for (row_index, cells) in raw.rows.into_iter().enumerate() {
        if cells.len() > width {
            return Err(LinkCheckError::RowWidthMismatch {
                sheet: raw.name,
                row_index,
                cells: cells.len(),
                columns: width,
            });
        }
        rows.push(normalize_row(&cells, width));
    }

    tracing::debug!(sheet = %raw.name, rows = rows.len(), columns = width, "normalized sheet");

    Sheet::new(raw.name, raw.columns, rows)
}

/// Stringify cells and pad missing trailing cells with `""`
fn normalize_row(cells: &[CellValue], width: usize) -> Row {
    let mut row: Row = cells.iter().map(CellValue::to_text).collect();
    row.resize(width, String::new());
    row
}
