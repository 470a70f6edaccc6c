//! linkcheck engine - orchestration layer
//!
//! Coordinates ingestion, the snapshot store and search for the outer
//! surfaces (CLI today). Every operation takes its store as an argument;
//! the engine holds no state of its own.

pub mod commands;
pub mod export;
pub mod queries;
pub mod summary;

pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use commands::replace::{replace_workbook, ReplaceOutcome, WorkbookUpload};
pub use export::matches_to_csv;
pub use queries::{
    apply_engine_query, check_link, workbook_status, EngineQuery, EngineQueryResult,
    LinkCheckOutcome,
};
pub use summary::{SheetSummary, WorkbookSummary};
