//! Campus CLI
//!
//! Command-line interface for querying the university registry directly
//! from its database.

mod commands;

use anyhow::Result;
use campus_registry::config::Config;
use clap::Parser;
use commands::{Commands, handle_command};

#[derive(Parser)]
#[command(name = "campus")]
#[command(about = "Campus university registry CLI", long_about = None)]
struct Cli {
    /// PostgreSQL connection string (overrides DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Registry configuration with an optional database URL override
fn build_config<F>(database_url: Option<String>, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::from_lookup(lookup)?;

    if let Some(url) = database_url {
        config.database_url = url;
        config.validate()?;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = build_config(cli.database_url, |key| std::env::var(key).ok())?;

    handle_command(cli.command, &config).await
}
