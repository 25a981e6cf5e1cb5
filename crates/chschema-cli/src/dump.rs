//! File-backed catalog connection.
//!
//! Serves the catalog query from a saved
//! `SELECT * FROM system.columns FORMAT JSON` response.

use std::path::Path;

use chschema_core::{Connection, Error, JsonResult, Params};
use serde_json::{Map, Value};
use thiserror::Error as ThisError;

/// Errors raised while loading a catalog dump.
#[derive(Debug, ThisError)]
pub enum DumpError {
    /// The dump file could not be read.
    #[error("failed to read catalog dump: {0}")]
    Io(#[from] std::io::Error),

    /// The dump is not a `FORMAT JSON` document.
    #[error("invalid catalog dump: {0}")]
    Format(#[from] Error),
}

/// A [`Connection`] answering `system.columns` queries from a dump.
pub struct DumpConnection {
    rows: Vec<Map<String, Value>>,
}

impl DumpConnection {
    /// Read a dump file.
    pub fn open(path: &Path) -> Result<Self, DumpError> {
        let body = std::fs::read_to_string(path)?;
        Self::from_body(&body)
    }

    /// Parse a dump held in memory.
    pub fn from_body(body: &str) -> Result<Self, DumpError> {
        let rows = JsonResult::<Map<String, Value>>::parse(body)?.into_rows();
        tracing::info!(rows = rows.len(), "loaded catalog dump");
        Ok(Self { rows })
    }

    /// Number of catalog rows in the dump.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl Connection for DumpConnection {
    fn execute(&self, sql: &str, params: &Params) -> chschema_core::Result<String> {
        if !sql.contains("system.columns") {
            return Err(Error::Connection(format!(
                "catalog dump cannot answer: {}",
                params.render(sql)
            )));
        }

        let table = params.get(":name").and_then(|v| v.as_str()).ok_or_else(|| {
            Error::Connection("catalog query is missing the :name parameter".into())
        })?;

        let data: Vec<&Map<String, Value>> = self
            .rows
            .iter()
            .filter(|row| row.get("table").and_then(Value::as_str) == Some(table))
            .collect();

        Ok(serde_json::json!({ "data": data, "rows": data.len() }).to_string())
    }
}
