//! Rendering tables as text.

pub mod csv;
pub mod json;
pub mod text;

use crate::table::Table;
use anyhow::Result;
use clap::ValueEnum;

/// Output format for rendered tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Bordered table with a shape line and column types
    #[default]
    Table,
    /// Comma-separated values with a header line
    Csv,
    /// Array of row objects
    Json,
}

/// Render `table` in the given format
pub fn render(table: &Table, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(text::render_text(table)),
        OutputFormat::Csv => Ok(csv::render_csv(table)),
        OutputFormat::Json => json::render_json(table),
    }
}
