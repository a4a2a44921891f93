//! # termcheck
//!
//! A writing-consistency linter for natural-language documents.
//!
//! termcheck scans a document and reports terms that appear with inconsistent
//! surface forms — differing capitalization, hyphenation, or spacing of what
//! is otherwise the same word or phrase ("Gradient Descent" vs
//! "gradient descent", "machine learning" vs "machine-learning").
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Unicode sentence segmentation and treebank-style word tokenization
//! - Pluggable segmenter/tokenizer boundary via traits
//! - Capitalization-adjacency heuristic to suppress proper-noun false positives
//! - Redundancy filtering of accidental n-gram overlaps
//! - Human-readable and JSON reports
//!
//! ## Example
//!
//! ```
//! use termcheck::consistency::checker::ConsistencyChecker;
//!
//! let checker = ConsistencyChecker::default();
//! let report = checker
//!     .check("Batch gradient descent converges. We tuned Batch Gradient Descent.")
//!     .unwrap();
//!
//! let entry = report.iter().find(|e| e.key == "gradientdescent").unwrap();
//! assert_eq!(entry.variants, vec!["Gradient Descent", "gradient descent"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod consistency;
pub mod error;

pub mod prelude {
    //! Convenience re-exports for the common entry points.

    pub use crate::consistency::checker::ConsistencyChecker;
    pub use crate::consistency::report::{ConsistencyReport, ReportEntry};
    pub use crate::error::{Result, TermcheckError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
