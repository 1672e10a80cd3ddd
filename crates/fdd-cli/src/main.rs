//! Field Density Checker - sand replacement compaction control
//!
//! A CLI tool that turns sand replacement test readings into field dry
//! density and a compaction verdict against the lab maximum dry density.

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
