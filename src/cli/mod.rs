//! Command-line interface for termcheck.

pub mod args;
pub mod commands;
pub mod output;
