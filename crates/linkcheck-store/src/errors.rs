//! Error helpers for linkcheck-store
//!
//! Wraps linkcheck-core ExError with store-specific constructors

use linkcheck_core::errors::{ExError, ExErrorKind, LinkCheckError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// A snapshot save that did not complete; the previous slot content stands
pub fn storage_write(path: &str, source: ExError) -> ExError {
    ExError::from(LinkCheckError::SnapshotWriteFailed {
        reason: source.message().to_string(),
    })
    .with_op("save_snapshot")
    .with_entity_id(path)
    .with_source(source)
}

/// The persisted snapshot could not be turned back into a `Snapshot`
pub fn storage_read(path: &str, reason: impl Into<String>) -> ExError {
    ExError::from(LinkCheckError::SnapshotUnreadable {
        reason: reason.into(),
    })
    .with_op("load_snapshot")
    .with_entity_id(path)
}

/// The uploaded bytes are not a spreadsheet container calamine can open
pub fn workbook_unreadable(reason: impl Into<String>) -> ExError {
    ExError::from(LinkCheckError::WorkbookUnreadable {
        reason: reason.into(),
    })
    .with_op("read_workbook")
}

/// Serialization failure in a store record
pub fn serialization(operation: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
