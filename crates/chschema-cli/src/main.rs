//! chschema Command-Line Inspector
//!
//! Prints ClickHouse table metadata loaded from a saved `system.columns` dump.

mod dump;
mod formatter;

use std::path::PathBuf;
use std::sync::Arc;

use chschema_core::{Schema, SchemaConfig};
use clap::Parser;
use formatter::OutputFormat;

/// chschema Command-Line Inspector
#[derive(Parser, Debug)]
#[command(name = "chschema")]
#[command(version, about = "Inspect ClickHouse table schemas")]
pub struct Args {
    /// Saved output of `SELECT * FROM system.columns FORMAT JSON`
    #[arg(short = 'c', long)]
    pub catalog: PathBuf,

    /// Output format
    #[arg(long, default_value = "table", value_enum)]
    pub format: OutputFormat,

    /// Prefix substituted for `%` in `{{%table}}` names
    #[arg(long, default_value = "")]
    pub table_prefix: String,

    /// Tables to inspect
    #[arg(required = true)]
    pub tables: Vec<String>,
}

impl Args {
    /// Schema configuration for these arguments.
    fn schema_config(&self) -> SchemaConfig {
        SchemaConfig::new().with_table_prefix(self.table_prefix.clone())
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chschema_cli=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print every requested table. Returns `false` if any table was missing.
fn run(args: &Args) -> Result<bool, Box<dyn std::error::Error>> {
    let connection = dump::DumpConnection::open(&args.catalog)?;
    let schema = Schema::with_config(Arc::new(connection), args.schema_config());
    let formatter = formatter::create_formatter(args.format);

    let mut all_found = true;
    for name in &args.tables {
        match schema.table_schema(name, false)? {
            Some(table) => println!("{}", formatter.format_table(&table)),
            None => {
                all_found = false;
                println!("{}", formatter.format_missing(name));
            }
        }
    }

    Ok(all_found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::parse_from([
            "chschema",
            "--catalog",
            "columns.json",
            "--format",
            "json",
            "--table-prefix",
            "app_",
            "{{%users}}",
            "events",
        ]);

        assert_eq!(args.catalog, PathBuf::from("columns.json"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.tables, vec!["{{%users}}", "events"]);
        assert_eq!(args.schema_config().table_prefix, "app_");
    }

    #[test]
    fn test_tables_required() {
        assert!(Args::try_parse_from(["chschema", "--catalog", "columns.json"]).is_err());
    }

    #[test]
    fn test_run_reports_missing_tables() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"data":[{"database":"db","table":"t","name":"id","type":"UInt8","default_type":"","default_expression":""}]}"#,
        )
        .unwrap();

        let path = file.path().display().to_string();

        let args = Args::parse_from(["chschema", "--catalog", path.as_str(), "t"]);
        assert!(run(&args).unwrap());

        let args = Args::parse_from(["chschema", "--catalog", path.as_str(), "t", "missing"]);
        assert!(!run(&args).unwrap());
    }
}
