//! linkcheck core - pure workbook semantics
//!
//! This crate owns everything about the dataset that does not touch disk:
//! - The `Snapshot` model (sheets of string cells, immutable once built)
//! - Ingestion of a decoded `RawWorkbook` into a `Snapshot`
//! - The search engine that locates a query inside a `Snapshot`
//! - The error and logging facilities shared by the other crates

pub mod errors;
pub mod ingest;
pub mod logging_facility;
pub mod model;
pub mod search;

pub use errors::{ExError, ExErrorKind, LinkCheckError, Result};
pub use ingest::{ingest, ingest_at, CellValue, RawSheet, RawWorkbook, UploadSource};
pub use model::{Match, MatchKind, Row, Sheet, Snapshot};
pub use search::search;

// Used by the logging macros so callers need not name the types crate.
pub use linkcheck_core_types::schema;
