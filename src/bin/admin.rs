//! CLI administration tool for tinylink.
//!
//! Provides database setup and inspection commands, and direct access to the
//! allocation and resolution engines without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Create the url_mappings table
//! cargo run --bin admin -- db migrate
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Shorten and resolve
//! cargo run --bin admin -- shorten https://example.com/a/b
//! cargo run --bin admin -- resolve AbC12xYz
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`tinylink::config`]. The cache tier is not
//! used: `shorten` writes only to the store and `resolve` reads only from it.

use tinylink::application::services::{
    AllocationService, AllocationSettings, ResolutionService, ResolutionSettings,
};
use tinylink::config;
use tinylink::domain::repositories::MappingRepository;
use tinylink::error::ResolveError;
use tinylink::infrastructure::cache::NullCache;
use tinylink::infrastructure::persistence::PgMappingRepository;
use tinylink::server::{connect_pool, migrate};
use tinylink::utils::code_generator::{Base58CodeGenerator, is_valid_code};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing tinylink.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show statistics
    Stats,

    /// Allocate a short code for a long URL
    Shorten {
        /// URL to shorten (must start with http:// or https://)
        long_url: String,
    },

    /// Look up the long URL for a short code
    Resolve {
        /// Short code to resolve
        short_code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Apply migrations (creates the url_mappings table)
    Migrate,

    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Shorten { long_url } => {
            let repository = Arc::new(PgMappingRepository::new(Arc::new(pool)));
            let service = AllocationService::new(
                repository,
                Arc::new(NullCache::new()),
                Base58CodeGenerator::default(),
                AllocationSettings::from_config(&config),
            );

            let short = service
                .allocate(&long_url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

            println!("{}", "Short URL created".green().bold());
            println!("  Code: {}", short.short_code.bright_yellow());
            println!("  URL:  {}", short.short_url.cyan());
        }
        Commands::Resolve { short_code } => {
            if !is_valid_code(&short_code) {
                println!(
                    "{}",
                    "Note: code is not in generated base58 format".yellow()
                );
            }

            let repository = Arc::new(PgMappingRepository::new(Arc::new(pool)));
            let service = ResolutionService::new(
                repository,
                Arc::new(NullCache::new()),
                ResolutionSettings::from_config(&config),
            );

            match service.resolve(&short_code).await {
                Ok(long_url) => println!("  {} -> {}", short_code.bright_yellow(), long_url.cyan()),
                Err(ResolveError::NotFound) => {
                    println!("{}", format!("Short code {} not found", short_code).red());
                }
                Err(e) => anyhow::bail!("Lookup failed: {}", e),
            }
        }
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Migrate => {
            migrate(pool).await?;
            println!("{}", "Database tables created.".green().bold());
        }
        DbAction::Check => {
            let repository = PgMappingRepository::new(Arc::new(pool.clone()));
            match repository.ping().await {
                Ok(()) => println!("{}", "Database connection OK".green().bold()),
                Err(e) => {
                    println!("{}", "Database connection failed".red().bold());
                    anyhow::bail!("{}", e);
                }
            }
        }
    }

    Ok(())
}

/// Displays the number of stored mappings.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    let repository = PgMappingRepository::new(Arc::new(pool.clone()));
    let total = repository
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

    println!("{}", "Statistics".bright_blue().bold());
    println!();
    println!(
        "  Mappings: {}",
        total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}
