//! linkcheck store - everything that touches disk
//!
//! Provides:
//! - Atomic temp→rename file writes
//! - The single-slot snapshot store (`SnapshotStore`, JSON file and in-memory)
//! - Spreadsheet decoding into `RawWorkbook` via calamine
//! - Admin credential storage and `AdminSession` issuance

pub mod atomic;
pub mod auth;
pub mod errors;
pub mod layout;
pub mod snapshot;
pub mod workbook;

pub use auth::{AdminSession, CredentialStore};
pub use errors::Result;
pub use layout::StoreLayout;
pub use snapshot::{FsSnapshotStore, MemorySnapshotStore, SnapshotStore};
pub use workbook::{ingest_upload, read_workbook};
