//! Active workbook status command

use clap::Args;
use linkcheck_engine::workbook_status;
use linkcheck_store::{FsSnapshotStore, StoreLayout};

#[derive(Debug, Args)]
pub struct StatusArgs {}

pub fn execute(_args: StatusArgs, layout: &StoreLayout) -> Result<(), Box<dyn std::error::Error>> {
    let store = FsSnapshotStore::from_layout(layout);
    match workbook_status(&store) {
        None => println!("{}", super::NO_WORKBOOK_MESSAGE),
        Some(summary) => {
            println!("Active workbook:");
            super::print_summary(&summary);
        }
    }
    Ok(())
}
