//! Workbook upload command

use std::path::PathBuf;

use clap::Args;
use linkcheck_core_types::{RequestContext, Sensitive};
use linkcheck_engine::{apply_engine_command, EngineCommand, EngineCommandResult, WorkbookUpload};
use linkcheck_store::{CredentialStore, FsSnapshotStore, StoreLayout};

#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Workbook file (.xlsx, .xls, .xlsb, .ods)
    pub file: PathBuf,

    #[arg(long, env = "LINKCHECK_ADMIN_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub fn execute(args: UploadArgs, layout: &StoreLayout) -> Result<(), Box<dyn std::error::Error>> {
    let credentials = CredentialStore::from_layout(layout);
    let session = credentials.authenticate(&Sensitive::new(args.password), RequestContext::new())?;

    let bytes = std::fs::read(&args.file)
        .map_err(|e| format!("cannot read {}: {}", args.file.display(), e))?;
    let filename = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());

    let store = FsSnapshotStore::from_layout(layout);
    let cmd = EngineCommand::ReplaceWorkbook {
        upload: WorkbookUpload::new(filename, bytes),
    };
    let EngineCommandResult::WorkbookReplaced(outcome) =
        apply_engine_command(cmd, &session, &store)?;

    println!("Workbook uploaded:");
    super::print_summary(&outcome.workbook);
    if let Some(previous) = outcome.replaced_filename {
        println!("  replaced: {}", previous);
    }
    Ok(())
}
