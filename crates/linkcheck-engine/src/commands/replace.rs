//! Workbook replacement
//!
//! decode → ingest → save. A failure at any step returns before `save`
//! completes, so the previous snapshot stays active and searchable.

use std::time::Instant;

use linkcheck_core::{log_op_end, log_op_error, log_op_start, Snapshot};
use linkcheck_store::errors::Result;
use linkcheck_store::{ingest_upload, AdminSession, SnapshotStore};

use crate::summary::WorkbookSummary;

/// Raw upload handed over by the outer surface
#[derive(Clone)]
pub struct WorkbookUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl WorkbookUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

// Print the size, not the workbook contents
impl std::fmt::Debug for WorkbookUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkbookUpload")
            .field("filename", &self.filename)
            .field("byte_size", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceOutcome {
    /// The workbook that is now active
    pub workbook: WorkbookSummary,
    /// Filename of the workbook it superseded, if there was one
    pub replaced_filename: Option<String>,
}

/// Replace the active workbook with an uploaded one
///
/// # Errors
///
/// - `Ingestion`: the upload is not a usable workbook; nothing changed
/// - `StorageWrite`: the new snapshot could not be saved; nothing changed
pub fn replace_workbook(
    session: &AdminSession,
    store: &dyn SnapshotStore,
    upload: &WorkbookUpload,
) -> Result<ReplaceOutcome> {
    let start = Instant::now();
    log_op_start!(
        "replace_workbook",
        request_id = %session.request_id(),
        filename = %upload.filename,
        byte_size = upload.bytes.len()
    );

    let result = ingest_upload(&upload.filename, &upload.bytes)
        .and_then(|snapshot| save_and_summarize(store, &snapshot));
    let duration_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(outcome) => {
            log_op_end!(
                "replace_workbook",
                duration_ms = duration_ms,
                request_id = %session.request_id(),
                total_rows = outcome.workbook.total_rows
            );
            Ok(outcome)
        }
        Err(e) => {
            let e = e.with_request_id(*session.request_id());
            log_op_error!(
                "replace_workbook",
                e.clone(),
                duration_ms = duration_ms,
                request_id = %session.request_id()
            );
            Err(e)
        }
    }
}

fn save_and_summarize(store: &dyn SnapshotStore, snapshot: &Snapshot) -> Result<ReplaceOutcome> {
    let replaced_filename = store.load().map(|previous| previous.filename().to_string());
    if let Some(previous) = &replaced_filename {
        tracing::info!(previous = %previous, next = %snapshot.filename(), "replacing workbook");
    }

    store.save(snapshot)?;

    Ok(ReplaceOutcome {
        workbook: WorkbookSummary::from(snapshot),
        replaced_filename,
    })
}
