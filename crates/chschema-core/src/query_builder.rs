//! SQL generation bound to a connection.

use std::sync::Arc;

use crate::command::Command;
use crate::connection::{Connection, ParamValue};
use crate::error::{Error, Result};
use crate::quote::{quote_column_name, quote_table_name};

/// Builds ClickHouse statements using the schema's quoting rules.
pub struct QueryBuilder<C: Connection> {
    db: Arc<C>,
}

impl<C: Connection> QueryBuilder<C> {
    /// Create a builder for the given connection.
    pub fn new(db: Arc<C>) -> Self {
        Self { db }
    }

    /// The connection this builder is bound to.
    pub fn db(&self) -> &Arc<C> {
        &self.db
    }

    /// Wrap generated SQL in a command on this builder's connection.
    pub fn command(&self, sql: impl Into<String>) -> Command<'_, C> {
        Command::new(self.db.as_ref(), sql)
    }

    /// `SELECT` statement. An empty column list selects `*`.
    pub fn select(
        &self,
        table: &str,
        columns: &[&str],
        condition: Option<&str>,
        limit: Option<u64>,
    ) -> String {
        let columns = if columns.is_empty() {
            "*".to_string()
        } else {
            columns
                .iter()
                .map(|c| quote_column_name(c))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut sql = format!("SELECT {} FROM {}", columns, quote_table_name(table));
        if let Some(condition) = condition.filter(|c| !c.trim().is_empty()) {
            sql.push_str(" WHERE ");
            sql.push_str(condition);
        }
        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }
        sql
    }

    /// Multi-row `INSERT` statement with literal values.
    pub fn insert(&self, table: &str, columns: &[&str], rows: &[Vec<ParamValue>]) -> Result<String> {
        if columns.is_empty() {
            return Err(Error::InvalidQuery("insert requires at least one column".into()));
        }
        if rows.is_empty() {
            return Err(Error::InvalidQuery("insert requires at least one row".into()));
        }

        let mut values = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::InvalidQuery(format!(
                    "row {} has {} values, expected {}",
                    i,
                    row.len(),
                    columns.len()
                )));
            }
            let literals: Vec<String> = row.iter().map(ParamValue::to_sql).collect();
            values.push(format!("({})", literals.join(", ")));
        }

        let columns: Vec<String> = columns.iter().map(|c| quote_column_name(c)).collect();
        Ok(format!(
            "INSERT INTO {} ({}) VALUES {}",
            quote_table_name(table),
            columns.join(", "),
            values.join(", ")
        ))
    }

    /// `TRUNCATE TABLE` statement.
    pub fn truncate_table(&self, table: &str) -> String {
        format!("TRUNCATE TABLE {}", quote_table_name(table))
    }

    /// `DROP TABLE` statement.
    pub fn drop_table(&self, table: &str) -> String {
        format!("DROP TABLE {}", quote_table_name(table))
    }
}
