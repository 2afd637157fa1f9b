//! CLI administration tool for url-shortener.
//!
//! Runs the shorten and resolve operations directly against the configured
//! store, and checks the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/some/long/path
//!
//! # Look up a short code
//! cargo run --bin admin -- resolve aB3dE9
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or `DB_*`), `BASE_URL`,
//! `STORAGE_BACKEND`. Migrations are applied on connect.

use url_shortener::application::dto::ShortenUrlRequest;
use url_shortener::application::services::UrlService;
use url_shortener::config::{self, Config, StorageBackend};
use url_shortener::server::{self, Storage};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing url-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a short URL
    Shorten {
        /// URL to shorten
        url: String,
    },

    /// Print the long URL stored for a short code
    Resolve {
        /// Short code to look up
        code: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and count stored URLs
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;

    if config.storage == StorageBackend::Memory {
        println!(
            "{}",
            "⚠️  STORAGE_BACKEND=memory: nothing will outlive this command".yellow()
        );
        println!();
    }

    let storage = server::open_storage(&config).await?;

    let outcome = match cli.command {
        Commands::Shorten { url } => shorten(&config, &storage, url).await,
        Commands::Resolve { code } => resolve(&config, &storage, &code).await,
        Commands::Db { action } => handle_db_action(action, &config, &storage).await,
    };

    storage.close().await;
    outcome
}

fn service(config: &Config, storage: &Storage) -> UrlService {
    UrlService::new(storage.repository.clone(), config.base_url.clone())
}

/// Shortens `url` and prints the response view.
///
/// # Output Format
///
/// ```text
/// ✂️  Shorten URL
///
///   Short code: aB3dE9
///   Short URL:  http://localhost:3000/aB3dE9
///   Long URL:   https://example.com/some/long/path
/// ```
async fn shorten(config: &Config, storage: &Storage, url: String) -> Result<()> {
    println!("{}", "✂️  Shorten URL".bright_blue().bold());
    println!();

    let response = service(config, storage)
        .shorten_url(ShortenUrlRequest::new(url))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("  Short code: {}", response.short_code.bright_yellow().bold());
    println!("  Short URL:  {}", response.short_url.cyan());
    println!("  Long URL:   {}", response.long_url.bright_white());
    println!();

    Ok(())
}

/// Prints the long URL stored for `code`.
async fn resolve(config: &Config, storage: &Storage, code: &str) -> Result<()> {
    println!("{}", "🔎 Resolve short code".bright_blue().bold());
    println!();

    let mapping = service(config, storage)
        .get_url(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Code:     {}", mapping.short_code().bright_yellow());
    println!("  Long URL: {}", mapping.long_url().cyan());
    println!(
        "  Created:  {}",
        mapping
            .created_at()
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config, storage: &Storage) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            if let Some(pool) = &storage.pool {
                sqlx::query("SELECT 1").fetch_one(pool).await?;
            }

            let count = storage
                .repository
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count URLs: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!(
                "  Stored URLs: {}",
                count.to_string().bright_green().bold()
            );
            println!("  Base URL:    {}", config.base_url.bright_white());
            println!();
        }
    }

    Ok(())
}
