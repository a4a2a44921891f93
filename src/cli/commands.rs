//! Command implementations for the termcheck CLI.

use std::fs;

use crate::cli::args::TermcheckArgs;
use crate::cli::output::output_report;
use crate::consistency::checker::ConsistencyChecker;
use crate::error::Result;

/// Execute the check described by the parsed arguments.
///
/// Reads the whole input file, runs the checker, and prints the report.
/// A missing or unreadable file is fatal and propagates; no partial
/// report is produced.
pub fn execute(args: TermcheckArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("Checking: {}", args.file.display());
    }

    let text = fs::read_to_string(&args.file)?;

    let checker = ConsistencyChecker::default();
    let report = if args.parallel {
        checker.check_parallel(&text)?
    } else {
        checker.check(&text)?
    };

    if args.verbosity() > 1 {
        println!("Inconsistent terms: {}", report.len());
    }

    output_report(&report, &args)
}
