//! Output formatting for the termcheck CLI.

use crate::cli::args::{OutputFormat, TermcheckArgs};
use crate::consistency::report::ConsistencyReport;
use crate::error::Result;

/// Print the report in the format requested on the command line.
///
/// An empty report prints nothing in human format and an empty entries
/// array in JSON.
pub fn output_report(report: &ConsistencyReport, args: &TermcheckArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", render_human(report));
            Ok(())
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            println!("{json}");
            Ok(())
        }
    }
}

/// Render the human-readable report: canonical keys in sorted order, one
/// per line, each variant indented four spaces beneath it.
pub fn render_human(report: &ConsistencyReport) -> String {
    let mut out = String::new();
    for entry in report {
        out.push_str(&entry.key);
        out.push('\n');
        for variant in &entry.variants {
            out.push_str("    ");
            out.push_str(variant);
            out.push('\n');
        }
    }
    out
}
