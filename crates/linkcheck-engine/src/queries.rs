//! Read-side operations. Open to everyone; no session required.
//!
//! Each query loads the snapshot afresh so a replacement is visible to the
//! very next query.

use linkcheck_core::{search, Match};
use linkcheck_store::SnapshotStore;

use crate::summary::WorkbookSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkCheckOutcome {
    /// Nothing has been uploaded yet (or the stored workbook is unreadable)
    NoWorkbook,
    Checked {
        workbook: WorkbookSummary,
        matches: Vec<Match>,
    },
}

impl LinkCheckOutcome {
    /// Matches found; empty for `NoWorkbook`
    pub fn matches(&self) -> &[Match] {
        match self {
            LinkCheckOutcome::NoWorkbook => &[],
            LinkCheckOutcome::Checked { matches, .. } => matches,
        }
    }

    pub fn found(&self) -> bool {
        !self.matches().is_empty()
    }
}

/// Look a link or text up in the active workbook
pub fn check_link(store: &dyn SnapshotStore, query: &str) -> LinkCheckOutcome {
    match store.load() {
        None => LinkCheckOutcome::NoWorkbook,
        Some(snapshot) => LinkCheckOutcome::Checked {
            matches: search(&snapshot, query),
            workbook: WorkbookSummary::from(&snapshot),
        },
    }
}

/// Summary of the active workbook, if any
pub fn workbook_status(store: &dyn SnapshotStore) -> Option<WorkbookSummary> {
    store.load().map(|snapshot| WorkbookSummary::from(&snapshot))
}

/// Read-only queries supported by the engine
#[derive(Debug, Clone)]
pub enum EngineQuery {
    CheckLink { query: String },
    WorkbookStatus,
}

#[derive(Debug, Clone)]
pub enum EngineQueryResult {
    CheckLink(LinkCheckOutcome),
    WorkbookStatus(Option<WorkbookSummary>),
}

pub fn apply_engine_query(query: EngineQuery, store: &dyn SnapshotStore) -> EngineQueryResult {
    match query {
        EngineQuery::CheckLink { query } => EngineQueryResult::CheckLink(check_link(store, &query)),
        EngineQuery::WorkbookStatus => EngineQueryResult::WorkbookStatus(workbook_status(store)),
    }
}
