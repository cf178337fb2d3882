//! Banter CLI binary.

use clap::Parser;
use std::process;

use banter::cli::{args::BanterArgs, commands::execute_command};

fn main() {
    // Parse command line arguments using clap
    let args = BanterArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
