//! Ingestion: decoded workbook in, immutable `Snapshot` out
//!
//! Decoding the spreadsheet container happens elsewhere (see
//! `linkcheck-store`'s workbook reader); this module only normalizes typed
//! cells into strings and assembles the snapshot.

pub mod normalize;
pub mod raw;

pub use normalize::{ingest, ingest_at, UploadSource};
pub use raw::{CellValue, RawSheet, RawWorkbook};
