//! Case-insensitive substring search over a snapshot
//!
//! Every cell is scanned; there is no index. Results come back in sheet,
//! row, column order so the same snapshot and query always give the same
//! sequence.

use std::time::Instant;

use crate::model::{Match, MatchKind, Sheet, Snapshot};
use crate::{log_op_end, log_op_start};

/// Offset from a 0-based data index to the displayed spreadsheet row
pub const HEADER_ROW_OFFSET: usize = 2;

/// Find every cell whose case-folded value contains the case-folded query
///
/// The query is trimmed first; a blank query yields no matches.
pub fn search(snapshot: &Snapshot, query: &str) -> Vec<Match> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let start = Instant::now();
    log_op_start!(
        "search",
        filename = %snapshot.filename(),
        query_len = needle.len()
    );

    let matches: Vec<Match> = snapshot
        .sheets()
        .iter()
        .flat_map(|sheet| search_sheet(sheet, &needle))
        .collect();

    log_op_end!(
        "search",
        duration_ms = start.elapsed().as_millis() as u64,
        match_count = matches.len()
    );

    matches
}

fn search_sheet<'a>(sheet: &'a Sheet, needle: &'a str) -> impl Iterator<Item = Match> + 'a {
    sheet
        .rows()
        .iter()
        .enumerate()
        .flat_map(move |(row_index, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(col_index, cell)| {
                    let folded = cell.to_lowercase();
                    if !folded.contains(needle) {
                        return None;
                    }
                    let kind = if folded == needle {
                        MatchKind::Exact
                    } else {
                        MatchKind::Partial
                    };
                    Some(Match {
                        sheet: sheet.name().to_string(),
                        row_number: row_index + HEADER_ROW_OFFSET,
                        column: column_label(sheet.columns(), col_index),
                        cell_value: cell.clone(),
                        kind,
                    })
                })
        })
}

/// Column name at `index`, or `Column_<n>` (1-based) past the header
pub fn column_label(columns: &[String], index: usize) -> String {
    columns
        .get(index)
        .cloned()
        .unwrap_or_else(|| format!("Column_{}", index + 1))
}
