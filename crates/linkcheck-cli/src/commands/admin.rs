//! Admin credential commands

use clap::{Args, Subcommand};
use linkcheck_core_types::Sensitive;
use linkcheck_store::{CredentialStore, StoreLayout};

#[derive(Debug, Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Set the admin password for the first time
    Init(InitArgs),
    /// Replace the admin password
    Rotate(RotateArgs),
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long, env = "LINKCHECK_ADMIN_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct RotateArgs {
    #[arg(long, env = "LINKCHECK_ADMIN_PASSWORD", hide_env_values = true)]
    pub current: String,

    #[arg(long, env = "LINKCHECK_NEW_ADMIN_PASSWORD", hide_env_values = true)]
    pub new: String,
}

pub fn execute(args: AdminArgs, layout: &StoreLayout) -> Result<(), Box<dyn std::error::Error>> {
    let credentials = CredentialStore::from_layout(layout);
    match args.command {
        AdminCommand::Init(init) => {
            credentials.initialize(&Sensitive::new(init.password))?;
            println!("Admin password set:");
            println!("  credentials: {}", credentials.path().display());
        }
        AdminCommand::Rotate(rotate) => {
            credentials.rotate(
                &Sensitive::new(rotate.current),
                &Sensitive::new(rotate.new),
            )?;
            println!("Admin password rotated");
        }
    }
    Ok(())
}
