//! CLI administration tool for tinylink.
//!
//! Manages short URLs directly against the database, without going through
//! the HTTP API. Uses the same configuration variables as the server.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- link create https://example.com
//!
//! # Look up a code
//! cargo run --bin admin -- link resolve Xk3pQ9aB
//!
//! # Point a code at a new URL
//! cargo run --bin admin -- link update Xk3pQ9aB https://example.com/new
//!
//! # Delete a code
//! cargo run --bin admin -- link delete Xk3pQ9aB
//!
//! # Count stored mappings
//! cargo run --bin admin -- stats
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```

use tinylink::application::services::ShortenerService;
use tinylink::config::{self, Config};
use tinylink::domain::repositories::UrlMappingRepository;
use tinylink::infrastructure::persistence::{MIGRATOR, SqliteUrlMappingRepository};
use tinylink::server::{build_shortener, open_repository};
use tinylink::utils::url_validator::check_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing tinylink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short URLs
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short URL subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create (or reuse) a short code for a URL
    Create {
        /// Absolute HTTP or HTTPS URL
        url: String,
    },

    /// Print the URL behind a code
    Resolve { code: String },

    /// Point a code at a new URL
    Update {
        code: String,

        /// New absolute HTTP or HTTPS URL
        url: String,
    },

    /// Delete a code
    Delete {
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &config).await?,
        Commands::Stats => handle_stats(&config).await?,
        Commands::Db { action } => handle_db_action(action, &config).await?,
    }

    Ok(())
}

/// Dispatches short URL commands through the shortener service.
async fn handle_link_action(action: LinkAction, config: &Config) -> Result<()> {
    let repository = open_repository(config).await?;
    let shortener = build_shortener(config, repository);

    match action {
        LinkAction::Create { url } => create_link(&shortener, config, &url).await?,
        LinkAction::Resolve { code } => resolve_link(&shortener, &code).await?,
        LinkAction::Update { code, url } => update_link(&shortener, config, &code, &url).await?,
        LinkAction::Delete { code, yes } => delete_link(&shortener, &code, yes).await?,
    }

    Ok(())
}

async fn create_link(
    shortener: &ShortenerService<SqliteUrlMappingRepository>,
    config: &Config,
    url: &str,
) -> Result<()> {
    check_url(url).context("Invalid URL")?;

    let code = shortener.create(url).await?;

    println!("{}", "✅ Short URL ready".green().bold());
    println!("  URL:   {}", url.cyan());
    println!("  Code:  {}", code.bright_yellow().bold());
    println!(
        "  Short: {}/{}",
        config.base_url.trim_end_matches('/'),
        code
    );

    Ok(())
}

async fn resolve_link(
    shortener: &ShortenerService<SqliteUrlMappingRepository>,
    code: &str,
) -> Result<()> {
    match shortener.resolve(code).await? {
        Some(url) => println!("{} -> {}", code.bright_yellow(), url.cyan()),
        None => println!("{}", format!("❌ Short URL not found: {}", code).red()),
    }

    Ok(())
}

async fn update_link(
    shortener: &ShortenerService<SqliteUrlMappingRepository>,
    config: &Config,
    code: &str,
    url: &str,
) -> Result<()> {
    check_url(url).context("Invalid URL")?;

    if !shortener.update(code, url).await? {
        println!("{}", format!("❌ Short URL not found: {}", code).red());
        return Ok(());
    }

    println!("{}", "✅ Short URL updated".green().bold());
    println!(
        "  {}/{} -> {}",
        config.base_url.trim_end_matches('/'),
        code,
        url.cyan()
    );

    Ok(())
}

/// Deletes a code after confirmation (default: No).
async fn delete_link(
    shortener: &ShortenerService<SqliteUrlMappingRepository>,
    code: &str,
    skip_confirm: bool,
) -> Result<()> {
    let Some(url) = shortener.resolve(code).await? else {
        println!("{}", format!("❌ Short URL not found: {}", code).red());
        return Ok(());
    };

    println!("  Code: {}", code.bright_yellow());
    println!("  URL:  {}", url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this short URL?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    if shortener.delete(code).await? {
        println!("{}", "✅ Short URL deleted".green().bold());
    } else {
        println!("{}", "⚠️  Short URL was already removed".yellow());
    }

    Ok(())
}

/// Displays the number of stored mappings.
async fn handle_stats(config: &Config) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let repository = open_repository(config).await?;
    let count = repository.count().await?;

    println!("  Short URLs: {}", count.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    let repository = SqliteUrlMappingRepository::connect(&config.storage)
        .await
        .context("Failed to connect to database")?;

    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            repository.health_check().await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            MIGRATOR.run(repository.pool()).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
