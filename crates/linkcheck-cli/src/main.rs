//! LinkCheck CLI
//!
//! Command-line interface for checking links against the active workbook

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use linkcheck_core::logging_facility::{self, Profile};
use linkcheck_store::StoreLayout;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "linkcheck")]
#[command(about = "LinkCheck - look links up in the active workbook", long_about = None)]
struct Cli {
    /// Directory holding the snapshot slot and the admin credential
    #[arg(long, global = true, default_value = ".linkcheck")]
    data_dir: PathBuf,

    /// Log output format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Human)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Human,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Admin credential setup and rotation
    Admin(commands::admin::AdminArgs),
    /// Replace the active workbook (admin only)
    Upload(commands::upload::UploadArgs),
    /// Search every cell of the active workbook
    Search(commands::search::SearchArgs),
    /// Show the active workbook
    Status(commands::status::StatusArgs),
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(match cli.log_format {
        LogFormat::Human => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let layout = StoreLayout::new(cli.data_dir);
    let result = match cli.command {
        Commands::Admin(args) => commands::admin::execute(args, &layout),
        Commands::Upload(args) => commands::upload::execute(args, &layout),
        Commands::Search(args) => commands::search::execute(args, &layout),
        Commands::Status(args) => commands::status::execute(args, &layout),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
