use serde::{Deserialize, Serialize};
use std::fmt;

/// How a matching cell relates to the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchKind {
    /// Case-folded cell equals the case-folded query
    Exact,
    /// Case-folded cell contains the case-folded query
    Partial,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Exact => write!(f, "Exact"),
            MatchKind::Partial => write!(f, "Partial"),
        }
    }
}

/// One cell that contains the query
///
/// `row_number` is the spreadsheet row a user would see: data index 0 is
/// row 2 because row 1 holds the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub sheet: String,
    pub row_number: usize,
    pub column: String,
    pub cell_value: String,
    pub kind: MatchKind,
}
