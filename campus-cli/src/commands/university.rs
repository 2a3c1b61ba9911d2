//! University command handlers
//!
//! Lists universities and shows a single university with its account.

use anyhow::{Context, Result};
use campus_core::domain::account::AccountRole;
use campus_core::dto::university::{AccountSummary, UniversityWithAccount};
use campus_registry::config::Config;
use campus_registry::db;
use campus_registry::repository::{PgUniversityRepository, UniversityRepository};
use campus_registry::service::university_service::{self, UniversityError};
use clap::Subcommand;
use colored::*;

/// University subcommands
#[derive(Subcommand)]
pub enum UniversityCommands {
    /// List all universities (id and name)
    List,

    /// List all universities with their contact details and account
    WithAccount,

    /// Show a single university
    Show {
        /// University ID
        id: String,
    },
}

/// Handle university commands
///
/// # Arguments
/// * `command` - The university command to execute
/// * `config` - Registry configuration used to reach the database
pub async fn handle_university_command(command: UniversityCommands, config: &Config) -> Result<()> {
    let pool = db::create_pool(config)
        .await
        .context("Failed to connect to database")?;
    let repo = PgUniversityRepository::new(pool);

    match command {
        UniversityCommands::List => list_universities(&repo).await,
        UniversityCommands::WithAccount => list_universities_with_account(&repo).await,
        UniversityCommands::Show { id } => show_university(&repo, &id).await,
    }
}

async fn list_universities(repo: &dyn UniversityRepository) -> Result<()> {
    let universities = university_service::list_universities(repo).await?;

    if universities.is_empty() {
        println!("{}", "No universities found.".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} universities:", universities.len()).bold()
    );
    println!();
    for university in universities {
        println!(
            "  {} {:>5}  {}",
            "▸".cyan(),
            university.id.to_string().dimmed(),
            university.name.bold()
        );
    }

    Ok(())
}

async fn list_universities_with_account(repo: &dyn UniversityRepository) -> Result<()> {
    let universities = university_service::list_universities_with_account(repo).await?;

    if universities.is_empty() {
        println!("{}", "No universities found.".yellow());
        return Ok(());
    }

    for university in &universities {
        print_university(university);
    }

    Ok(())
}

async fn show_university(repo: &dyn UniversityRepository, raw_id: &str) -> Result<()> {
    match university_service::get_university_by_raw_id(repo, raw_id).await {
        Ok(university) => {
            print_university(&university);
            Ok(())
        }
        Err(UniversityError::NotFound(id)) => {
            println!("{}", format!("University {} not found.", id).yellow());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Print a university with all projected fields
fn print_university(university: &UniversityWithAccount) {
    println!(
        "  {} University {} ({})",
        "▸".cyan(),
        university.name.bold(),
        university.id
    );
    println!("    Address:      {}", or_dash(&university.address));
    println!("    Phone:        {}", or_dash(&university.phone));
    println!("    Email:        {}", or_dash(&university.email));
    println!("    Wallet:       {}", or_dash(&university.wallet_address));

    match &university.account {
        Some(account) => print_account(account),
        None => println!("    Account:      {}", "none".dimmed()),
    }
    println!();
}

fn print_account(account: &AccountSummary) {
    let verified = if account.is_verified {
        "verified".green()
    } else {
        "unverified".red()
    };

    println!(
        "    Account:      {} <{}> #{}",
        account.username.bold(),
        account.email,
        account.id
    );
    println!("    Role:         {}", colorize_role(&account.role));
    println!("    Status:       {}", verified);
}

fn or_dash(value: &Option<String>) -> ColoredString {
    match value {
        Some(v) => v.normal(),
        None => "-".dimmed(),
    }
}

/// Colorize account role for display
fn colorize_role(role: &AccountRole) -> ColoredString {
    let role_str = role.to_string();
    match role {
        AccountRole::Admin => role_str.magenta(),
        AccountRole::University => role_str.cyan(),
        AccountRole::Student => role_str.green(),
        AccountRole::Other(_) => role_str.dimmed(),
    }
}
