//! SICETAC - freight transport cost estimation for Colombian routes
//!
//! A CLI tool that computes reference trip costs from the official
//! SICETAC lookup tables.

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
