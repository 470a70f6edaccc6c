use chrono::NaiveDateTime;

/// A typed cell as produced by the spreadsheet decoder
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// Formula error such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    /// Canonical textual form; `Empty` becomes `""`
    ///
    /// No number or date formatting from the workbook is applied.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::DateTime(dt) => dt.to_string(),
            CellValue::Error(e) => e.clone(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

/// One decoded sheet: header names plus data rows of typed cells
///
/// Rows may be shorter than `columns`; ingestion pads them.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSheet {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

/// Decoded workbook, sheets in workbook order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawWorkbook {
    pub sheets: Vec<RawSheet>,
}
