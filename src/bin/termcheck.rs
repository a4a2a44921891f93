//! termcheck CLI binary.

use std::process;

use clap::Parser;
use termcheck::cli::{args::TermcheckArgs, commands::execute};

fn main() {
    // Parse command line arguments using clap
    let args = TermcheckArgs::parse();

    // Execute the check
    if let Err(e) = execute(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
