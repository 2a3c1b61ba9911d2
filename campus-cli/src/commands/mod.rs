//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod university;

pub use university::UniversityCommands;

use anyhow::Result;
use campus_registry::config::Config;
use clap::Subcommand;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// University queries
    University {
        #[command(subcommand)]
        command: UniversityCommands,
    },
}

/// Handle a CLI command
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::University { command } => {
            university::handle_university_command(command, config).await
        }
    }
}
