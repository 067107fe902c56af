//! Utility functions shared across CLI commands.

use clap::ValueEnum;

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One path per line.
    Text,
    /// A JSON array of paths.
    Json,
}

/// Split a `NAME=VALUE` variable binding.
pub fn parse_var(binding: &str) -> Result<(&str, &str), CliError> {
    match binding.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value)),
        _ => Err(CliError::InvalidArguments(format!(
            "expected NAME=VALUE, got '{binding}'"
        ))),
    }
}

/// Render a list of strings in the requested format.
pub fn format_lines(lines: &[String], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(lines.join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(lines).map_err(|e| CliError::Config(e.to_string()))
        }
    }
}
