//! Output formatting

use crate::error::CliResult;
use clap::ValueEnum;
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Render `value` as JSON, or as the given text.
pub fn render<T: Serialize>(format: OutputFormat, value: &T, text: String) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(text),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
    }
}
