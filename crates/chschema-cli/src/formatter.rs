//! Output formatters for table schemas.

use chschema_core::TableSchema;
use clap::ValueEnum;
use comfy_table::{Cell, Table};

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format
    Table,
    /// JSON format
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Trait for formatting output.
pub trait Formatter: Send + Sync {
    /// Format a loaded table.
    fn format_table(&self, table: &TableSchema) -> String;

    /// Format a table that the catalog does not know.
    fn format_missing(&self, name: &str) -> String;
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Table formatter using comfy-table.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_table(&self, table: &TableSchema) -> String {
        let mut grid = Table::new();
        grid.set_header(vec!["Column", "Native type", "DB type", "Logical", "Host", "Default"]);

        for column in table.columns() {
            grid.add_row(vec![
                Cell::new(&column.name),
                Cell::new(&column.native_type),
                Cell::new(&column.db_type),
                Cell::new(column.logical_type),
                Cell::new(column.host_type),
                Cell::new(column.default_value.as_deref().unwrap_or("-")),
            ]);
        }

        format!("{}\n{}\n{} column(s)", table.full_name, grid, table.len())
    }

    fn format_missing(&self, name: &str) -> String {
        format!("Table not found: {}", name)
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_table(&self, table: &TableSchema) -> String {
        serde_json::to_string_pretty(table).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_missing(&self, name: &str) -> String {
        serde_json::json!({
            "table": name,
            "error": "not found"
        })
        .to_string()
    }
}
