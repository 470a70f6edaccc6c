//! Engine-level write commands

use linkcheck_store::errors::Result;
use linkcheck_store::{AdminSession, SnapshotStore};

use crate::commands::replace::{replace_workbook, ReplaceOutcome, WorkbookUpload};

/// Commands that change the active dataset
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Decode an uploaded workbook and make it the active snapshot
    ReplaceWorkbook { upload: WorkbookUpload },
}

#[derive(Debug, Clone)]
pub enum EngineCommandResult {
    WorkbookReplaced(ReplaceOutcome),
}

/// Apply a write command on behalf of an authenticated admin
///
/// # Errors
///
/// Whatever the underlying command returns; see [`replace_workbook`].
pub fn apply_engine_command(
    cmd: EngineCommand,
    session: &AdminSession,
    store: &dyn SnapshotStore,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::ReplaceWorkbook { upload } => {
            replace_workbook(session, store, &upload).map(EngineCommandResult::WorkbookReplaced)
        }
    }
}
