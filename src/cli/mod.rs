//! CLI support for selectql
//!
//! Provides programmatic access to the `selectql` command so other tools can
//! run the same parse, check and token-dump operations without a subprocess.

mod check;
mod grammar;
mod tokens;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use grammar::get_grammar_reference;
pub use tokens::{TokenListing, list_tokens};

use std::io;
use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Parser error
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    /// JSON rendering error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No query given on the command line or stdin
    #[error("No query provided. Pass it as an argument or pipe it to stdin.")]
    NoInput,
}
