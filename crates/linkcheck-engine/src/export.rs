//! Delimited-text export of search results

use linkcheck_core::errors::{ExError, ExErrorKind};
use linkcheck_core::Match;
use linkcheck_store::errors::Result;

pub const CSV_HEADER: [&str; 5] = ["sheet", "row", "column", "cell_value", "match_type"];

/// Render matches as CSV with a header row
///
/// # Errors
///
/// `Serialization` if the writer fails, which only happens on invalid UTF-8.
pub fn matches_to_csv(matches: &[Match]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(CSV_HEADER).map_err(csv_error)?;
    for m in matches {
        let row = m.row_number.to_string();
        let kind = m.kind.to_string();
        writer
            .write_record([
                m.sheet.as_str(),
                row.as_str(),
                m.column.as_str(),
                m.cell_value.as_str(),
                kind.as_str(),
            ])
            .map_err(csv_error)?;
    }

    let bytes = writer.into_inner().map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("export_csv")
            .with_message(e.to_string())
    })?;
    String::from_utf8(bytes).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("export_csv")
            .with_message(e.to_string())
    })
}

fn csv_error(err: csv::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("export_csv")
        .with_message(err.to_string())
}
