//! Garagelog - personal vehicle maintenance tracker
//!
//! Tracks vehicles and service history, and reports DUE / UPCOMING / OK
//! status for recurring maintenance tasks.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
