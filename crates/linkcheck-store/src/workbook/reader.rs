use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use linkcheck_core::errors::ExError;
use linkcheck_core::{ingest, CellValue, RawSheet, RawWorkbook, Snapshot, UploadSource};

use crate::errors::{workbook_unreadable, Result};

/// Decode an xlsx/xlsm/xlsb/xls/ods container
///
/// The first row of each sheet's used range is the header. Header cells
/// that are blank are named `Unnamed: <index>`.
///
/// # Errors
///
/// `Ingestion` when the bytes are not a readable workbook.
pub fn read_workbook(bytes: &[u8]) -> Result<RawWorkbook> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| workbook_unreadable(e.to_string()))?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| workbook_unreadable(format!("sheet {}: {}", name, e)))?;
        sheets.push(raw_sheet(name, &range));
    }

    Ok(RawWorkbook { sheets })
}

/// Decode and ingest an upload in one step
///
/// # Errors
///
/// `Ingestion` for undecodable bytes or a malformed workbook. Nothing is
/// persisted either way.
pub fn ingest_upload(filename: &str, bytes: &[u8]) -> Result<Snapshot> {
    let raw = read_workbook(bytes).map_err(|e| e.with_entity_id(filename))?;
    ingest(raw, UploadSource::new(filename, bytes.len() as u64))
        .map_err(|e| ExError::from(e).with_op("ingest_upload"))
}

fn raw_sheet(name: String, range: &Range<Data>) -> RawSheet {
    let mut rows = range.rows();

    let columns = rows
        .next()
        .map(|header| {
            header
                .iter()
                .enumerate()
                .map(|(idx, cell)| match cell_value(cell) {
                    CellValue::Empty => format!("Unnamed: {}", idx),
                    other => other.to_text(),
                })
                .collect()
        })
        .unwrap_or_default();

    let rows = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();

    RawSheet {
        name,
        columns,
        rows,
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) if dt.is_duration() => CellValue::Float(dt.as_f64()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Float(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkcheck_core::errors::ExErrorKind;

    #[test]
    fn test_garbage_bytes_are_an_ingestion_error() {
        let err = read_workbook(b"definitely not a spreadsheet").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Ingestion);
        assert_eq!(err.op(), Some("read_workbook"));
    }

    #[test]
    fn test_ingest_upload_tags_filename() {
        let err = ingest_upload("broken.xlsx", b"PK\x03\x04 truncated").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Ingestion);
        assert_eq!(err.entity_id(), Some("broken.xlsx"));
    }

    #[test]
    fn test_cell_value_mapping() {
        assert_eq!(cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(cell_value(&Data::String(String::new())), CellValue::Empty);
        assert_eq!(cell_value(&Data::Int(7)), CellValue::Int(7));
        assert_eq!(
            cell_value(&Data::String("https://a.com".to_string())),
            CellValue::Text("https://a.com".to_string())
        );
    }
}
