//! axlecheck - axle weight compliance checker
//!
//! Checks vehicle axle configurations against federal and state weight
//! limits, including bridge formula group caps.

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
