//! CLI administration tool for short-url.
//!
//! Works directly against the configured link store, without going through the
//! HTTP API or its bearer token.
//!
//! # Usage
//!
//! ```bash
//! # Check that the store is reachable
//! cargo run --bin admin -- store check
//!
//! # Show a stored link
//! cargo run --bin admin -- link show aZ3k9Q
//!
//! # Create a link (prompts for the URL when omitted)
//! cargo run --bin admin -- link create https://example.com --host s.example.com
//! ```
//!
//! # Environment Variables
//!
//! - `TABLE_NAME` (required): storage namespace
//! - `STORE_BACKEND`, `DATABASE_URL`, `REDIS_URL`: see the server configuration

use short_url::application::services::LinkService;
use short_url::config::{StoreBackend, StoreConfig};
use short_url::domain::repositories::LinkRepository;
use short_url::infrastructure::persistence;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::sync::Arc;

/// CLI tool for managing short-url.
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
    /// Link store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },

    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },
}

/// Store subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store connection
    Check,
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Show the link stored under a code
    Show {
        /// Short code
        code: String,
    },

    /// Create a short link
    Create {
        /// Long URL to shorten
        url: Option<String>,

        /// Host used to build the short URL
        #[arg(long, default_value = "localhost:3000")]
        host: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let store_config = StoreConfig::from_env().context("Failed to load storage configuration")?;
    store_config.validate()?;

    if store_config.backend == StoreBackend::Memory {
        println!(
            "{}",
            "⚠️  Memory backend selected: nothing is shared with a running server".yellow()
        );
    }

    let repository = persistence::connect(&store_config).await?;

    match cli.command {
        Commands::Store { action } => match action {
            StoreAction::Check => check_store(&store_config, repository).await?,
        },
        Commands::Link { action } => match action {
            LinkAction::Show { code } => show_link(repository, &code).await?,
            LinkAction::Create { url, host } => create_link(repository, url, &host).await?,
        },
    }

    Ok(())
}

/// Runs the backend health check.
async fn check_store(config: &StoreConfig, repository: Arc<dyn LinkRepository>) -> Result<()> {
    println!("{}", "🔍 Checking link store...".bright_blue());
    println!("  Store: {}", config.describe().cyan());

    if repository.health_check().await {
        println!("{}", "✅ Store is reachable".green().bold());
        Ok(())
    } else {
        anyhow::bail!("Store health check failed")
    }
}

/// Prints one stored link.
async fn show_link(repository: Arc<dyn LinkRepository>, code: &str) -> Result<()> {
    let link = repository
        .find_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    match link {
        Some(link) => {
            println!("{}", "Link details:".bright_white().bold());
            println!("  Code:     {}", link.code.cyan());
            println!("  Long URL: {}", link.long_url.bright_yellow());
            println!(
                "  Created:  {}",
                link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            Ok(())
        }
        None => {
            println!("{}", format!("❌ No link stored under '{}'", code).red());
            Ok(())
        }
    }
}

/// Shortens a URL through the same service the server uses.
async fn create_link(
    repository: Arc<dyn LinkRepository>,
    url: Option<String>,
    host: &str,
) -> Result<()> {
    let long_url = match url {
        Some(u) => u,
        None => Input::<String>::new().with_prompt("Long URL").interact_text()?,
    };

    let service = LinkService::new(repository);
    let link = service
        .shorten(&long_url, host)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created".green().bold());
    println!("  Code:      {}", link.code.cyan());
    println!("  Short URL: {}", link.short_url.bright_yellow().bold());

    Ok(())
}
