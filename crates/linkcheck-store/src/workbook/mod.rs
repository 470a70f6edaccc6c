//! Spreadsheet decoding
//!
//! Turns uploaded bytes into the `RawWorkbook` that core ingestion consumes.

pub mod reader;

pub use reader::{ingest_upload, read_workbook};
