//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Shorten URLs from the command line
#[derive(Parser)]
#[command(name = "shortl")]
#[command(about = "Shorten URLs with built-in or custom providers")]
#[command(version)]
pub struct Cli {
    /// Configuration file path (defaults to the user config location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Shorten a URL
    Shorten {
        /// The URL to shorten
        url: String,

        /// Provider to dispatch to
        #[arg(short, long, default_value = "isgd")]
        provider: String,

        /// Provider-script file used instead of a registered provider
        #[arg(short, long, conflicts_with = "provider")]
        script: Option<PathBuf>,
    },

    /// List available providers
    Providers,
}
