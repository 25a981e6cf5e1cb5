//! Catalog row records.

use serde::Deserialize;

/// One row of `system.columns`.
///
/// Only the fields used for introspection are decoded; the catalog returns
/// more.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CatalogColumn {
    /// Owning database.
    pub database: String,
    /// Owning table.
    #[serde(default)]
    pub table: String,
    /// Column name.
    pub name: String,
    /// Native type string as cataloged, e.g. `FixedString(16)`.
    #[serde(rename = "type")]
    pub column_type: String,
    /// Default kind: empty, `DEFAULT`, `MATERIALIZED`, `ALIAS`, ...
    ///
    /// Newer servers report this as `default_kind`.
    #[serde(default, alias = "default_kind")]
    pub default_type: Option<String>,
    /// Default expression text.
    #[serde(default)]
    pub default_expression: Option<String>,
}

impl CatalogColumn {
    /// Create a row with no default.
    pub fn new(
        database: impl Into<String>,
        table: impl Into<String>,
        name: impl Into<String>,
        column_type: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            table: table.into(),
            name: name.into(),
            column_type: column_type.into(),
            default_type: None,
            default_expression: None,
        }
    }

    /// Set the default kind and expression.
    pub fn with_default(
        mut self,
        default_type: impl Into<String>,
        default_expression: impl Into<String>,
    ) -> Self {
        self.default_type = Some(default_type.into());
        self.default_expression = Some(default_expression.into());
        self
    }

    /// True when the row carries no special default kind.
    pub fn has_plain_default(&self) -> bool {
        self.default_type.as_deref().map_or(true, str::is_empty)
    }
}
