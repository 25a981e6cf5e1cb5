//! Table descriptors.

use serde::Serialize;

use super::column::ColumnSchema;

/// Metadata for one table, as loaded from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    /// Owning database.
    pub schema_name: String,
    /// Table name.
    pub name: String,
    /// `schema_name.name`.
    pub full_name: String,
    /// Columns in catalog order.
    columns: Vec<ColumnSchema>,
}

impl TableSchema {
    /// Create an empty table descriptor.
    pub fn new(schema_name: impl Into<String>, name: impl Into<String>) -> Self {
        let schema_name = schema_name.into();
        let name = name.into();
        let full_name = format!("{}.{}", schema_name, name);
        Self {
            schema_name,
            name,
            full_name,
            columns: Vec::new(),
        }
    }

    /// Insert a column keyed by its name.
    ///
    /// A column with the same name is replaced in place, keeping its position.
    pub fn insert_column(&mut self, column: ColumnSchema) {
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
    }

    /// Add a column to the table.
    pub fn with_column(mut self, column: ColumnSchema) -> Self {
        self.insert_column(column);
        self
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// All columns in catalog order.
    pub fn columns(&self) -> &[ColumnSchema] {
        &self.columns
    }

    /// Column names in catalog order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
