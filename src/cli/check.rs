//! Parse queries and render the resulting tree

use super::CliError;
use crate::output::to_value;

/// Options for the parse and check commands
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The query text
    pub query: String,
    /// Only validate syntax, don't render the tree
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Query parsed; the tree in its JSON shape
    Success(serde_json::Value),
}

/// Parse the query and either confirm it or return its tree
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let statement = crate::parse(&options.query)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }
    Ok(CheckResult::Success(to_value(&statement)))
}
