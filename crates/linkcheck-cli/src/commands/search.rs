//! Link search command

use clap::Args;
use linkcheck_engine::{
    apply_engine_query, matches_to_csv, EngineQuery, EngineQueryResult, LinkCheckOutcome,
};
use linkcheck_store::{FsSnapshotStore, StoreLayout};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Link or text to look for (case-insensitive substring)
    pub query: String,

    /// Print matches as CSV instead of a listing
    #[arg(long)]
    pub csv: bool,
}

pub fn execute(args: SearchArgs, layout: &StoreLayout) -> Result<(), Box<dyn std::error::Error>> {
    let store = FsSnapshotStore::from_layout(layout);
    let query = EngineQuery::CheckLink {
        query: args.query.clone(),
    };
    let outcome = match apply_engine_query(query, &store) {
        EngineQueryResult::CheckLink(outcome) => outcome,
        EngineQueryResult::WorkbookStatus(_) => return Err("unexpected query result".into()),
    };

    let (workbook, matches) = match outcome {
        LinkCheckOutcome::NoWorkbook => {
            println!("{}", super::NO_WORKBOOK_MESSAGE);
            return Ok(());
        }
        LinkCheckOutcome::Checked { workbook, matches } => (workbook, matches),
    };

    if args.csv {
        print!("{}", matches_to_csv(&matches)?);
        return Ok(());
    }

    let query = args.query.trim();
    if matches.is_empty() {
        println!("No matches for '{}' in {}", query, workbook.filename);
        return Ok(());
    }

    println!(
        "Found {} match(es) for '{}' in {}:",
        matches.len(),
        query,
        workbook.filename
    );
    for m in &matches {
        println!(
            "  [{}] {} row {}, {}: {}",
            m.kind, m.sheet, m.row_number, m.column, m.cell_value
        );
    }
    Ok(())
}
