//! Command line argument parsing for the termcheck CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// termcheck - a writing-consistency linter
#[derive(Parser, Debug, Clone)]
#[command(name = "termcheck")]
#[command(about = "Report terms written with inconsistent capitalization, hyphenation, or spacing")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TermcheckArgs {
    /// Path of the text file to check
    pub file: PathBuf,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Extract candidates from sentences in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl TermcheckArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output formats supported by the CLI.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text: keys with their variants indented beneath them
    Human,
    /// JSON serialization of the report
    Json,
}
