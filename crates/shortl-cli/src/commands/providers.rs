//! The providers listing command

use colored::Colorize;
use shortl_core::Shortener;

use crate::error::Result;

/// Run the providers command
pub fn run_providers(shortener: &Shortener) -> Result<()> {
    println!("{}", "Available Providers".bold());
    println!();

    for (name, kind) in shortener.list_all() {
        println!("  {:<12} {}", name.green(), kind.as_str().dimmed());
    }

    println!();
    println!(
        "{} {} providers. Use {} to shorten with one.",
        "Total:".dimmed(),
        shortener.registry().len(),
        "shortl shorten <url> --provider <name>".cyan()
    );

    Ok(())
}
