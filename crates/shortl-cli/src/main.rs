//! shortl CLI
//!
//! The command-line interface for URL shortening.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use shortl_core::{Shortener, ShortenerConfig};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let config = ShortenerConfig::load(cli.config.as_deref())?;
    let shortener = Shortener::with_config(config)?;

    match cli.command {
        Some(Commands::Shorten {
            url,
            provider,
            script,
        }) => commands::run_shorten(&shortener, &url, &provider, script.as_deref()).await,
        Some(Commands::Providers) => commands::run_providers(&shortener),
        None => {
            // No command provided - show help hint
            println!("{} URL shortener", "shortl".green().bold());
            println!();
            println!("Run {} for available commands.", "shortl --help".cyan());
            Ok(())
        }
    }
}
