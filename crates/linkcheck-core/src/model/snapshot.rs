use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::errors::{LinkCheckError, Result};

/// One data row, positionally aligned with its sheet's columns
pub type Row = Vec<String>;

/// A named table inside a snapshot
///
/// Every row has exactly `columns.len()` cells; missing cells are `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    name: String,
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Sheet {
    /// Build a sheet, rejecting rows whose width differs from the header
    pub fn new(name: impl Into<String>, columns: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        let name = name.into();
        if let Some((row_index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(LinkCheckError::RowWidthMismatch {
                sheet: name,
                row_index,
                cells: row.len(),
                columns: columns.len(),
            });
        }

        Ok(Self {
            name,
            columns,
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// The single active dataset
///
/// A snapshot never changes after construction. Replacing the dataset means
/// building a new snapshot and saving it over the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    filename: String,
    upload_time: DateTime<Utc>,
    byte_size: u64,
    total_rows: usize,
    sheets: Vec<Sheet>,
}

impl Snapshot {
    /// Assemble a snapshot from already-normalized sheets
    ///
    /// Sheet order is kept as given. `total_rows` is derived, never supplied.
    ///
    /// # Errors
    ///
    /// `DuplicateSheet` when two sheets share a name.
    pub fn new(
        filename: impl Into<String>,
        upload_time: DateTime<Utc>,
        byte_size: u64,
        sheets: Vec<Sheet>,
    ) -> Result<Self> {
        let mut seen = HashSet::new();
        for sheet in &sheets {
            if !seen.insert(sheet.name()) {
                return Err(LinkCheckError::DuplicateSheet {
                    sheet: sheet.name().to_string(),
                });
            }
        }

        let total_rows = sheets.iter().map(Sheet::row_count).sum();

        Ok(Self {
            filename: filename.into(),
            upload_time,
            byte_size,
            total_rows,
            sheets,
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn upload_time(&self) -> DateTime<Utc> {
        self.upload_time
    }

    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Sheets in workbook order
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }
}
