//! Schema introspection entry point.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use regex::Regex;
use tracing::debug;

use crate::catalog::{CatalogColumn, ColumnSchema, TableSchema};
use crate::command::Command;
use crate::config::SchemaConfig;
use crate::connection::Connection;
use crate::error::Result;
use crate::query_builder::QueryBuilder;
use crate::quote;

/// Catalog query for the columns of one table.
pub const TABLE_COLUMNS_SQL: &str = "SELECT * FROM system.columns WHERE table=:name FORMAT JSON";

fn table_placeholder() -> &'static Regex {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_RE
        .get_or_init(|| Regex::new(r"\{\{(.*?)\}\}").expect("valid table placeholder regex"))
}

/// Table metadata loader, metadata cache and quoting for one connection.
///
/// `Schema` is `Send + Sync` whenever the connection is, so one instance can
/// be shared by concurrent callers.
pub struct Schema<C: Connection> {
    db: Arc<C>,
    config: SchemaConfig,
    builder: OnceLock<QueryBuilder<C>>,
    tables: RwLock<HashMap<String, Option<Arc<TableSchema>>>>,
}

impl<C: Connection> Schema<C> {
    /// Create a schema with the default configuration.
    pub fn new(db: Arc<C>) -> Self {
        Self::with_config(db, SchemaConfig::default())
    }

    /// Create a schema with the given configuration.
    pub fn with_config(db: Arc<C>, config: SchemaConfig) -> Self {
        Self {
            db,
            config,
            builder: OnceLock::new(),
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// The underlying connection.
    pub fn db(&self) -> &Arc<C> {
        &self.db
    }

    /// The active configuration.
    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    /// Load the metadata for a table straight from the catalog.
    ///
    /// Returns `Ok(None)` when the catalog has no columns for `name`.
    /// Connection failures are returned unchanged.
    pub fn load_table_schema(&self, name: &str) -> Result<Option<TableSchema>> {
        let rows: Vec<CatalogColumn> = Command::new(self.db.as_ref(), TABLE_COLUMNS_SQL)
            .bind(":name", name)
            .query_all()?;

        let Some(first) = rows.first() else {
            debug!(table = %name, "table not found in catalog");
            return Ok(None);
        };

        let mut table = TableSchema::new(first.database.clone(), name);
        for info in &rows {
            table.insert_column(ColumnSchema::from_catalog(info));
        }

        debug!(
            table = %table.full_name,
            columns = table.len(),
            "loaded table schema"
        );
        Ok(Some(table))
    }

    /// Table metadata, served from the cache unless `refresh` is set.
    ///
    /// "Not found" results are cached too.
    pub fn table_schema(&self, name: &str, refresh: bool) -> Result<Option<Arc<TableSchema>>> {
        let raw_name = self.raw_table_name(name);
        let cacheable = self.config.is_cacheable(&raw_name);

        if cacheable && !refresh {
            if let Some(cached) = self.tables.read().get(&raw_name) {
                debug!(table = %raw_name, "table schema cache hit");
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_table_schema(&raw_name)?.map(Arc::new);
        if cacheable {
            self.tables.write().insert(raw_name, loaded.clone());
        }
        Ok(loaded)
    }

    /// Drop all cached table metadata.
    pub fn refresh(&self) {
        self.tables.write().clear();
    }

    /// Drop cached metadata for one table.
    pub fn refresh_table_schema(&self, name: &str) {
        let raw_name = self.raw_table_name(name);
        self.tables.write().remove(&raw_name);
    }

    /// Resolve `{{%name}}` into `<table_prefix>name`.
    ///
    /// Names without `{{ }}` markers are returned unchanged.
    pub fn raw_table_name(&self, name: &str) -> String {
        if !name.contains("{{") {
            return name.to_string();
        }
        table_placeholder()
            .replace_all(name, "$1")
            .replace('%', &self.config.table_prefix)
    }

    /// The query builder for this connection, created on first use.
    pub fn query_builder(&self) -> &QueryBuilder<C> {
        self.builder.get_or_init(|| self.create_query_builder())
    }

    /// Create a new query builder for this connection.
    pub fn create_query_builder(&self) -> QueryBuilder<C> {
        QueryBuilder::new(Arc::clone(&self.db))
    }

    /// Quote a table name without schema prefix.
    pub fn quote_simple_table_name(&self, name: &str) -> String {
        quote::quote_simple_table_name(name)
    }

    /// Quote a column name without table prefix.
    pub fn quote_simple_column_name(&self, name: &str) -> String {
        quote::quote_simple_column_name(name)
    }

    /// Quote a possibly schema-qualified table name.
    pub fn quote_table_name(&self, name: &str) -> String {
        quote::quote_table_name(name)
    }

    /// Quote a possibly table-qualified column name.
    pub fn quote_column_name(&self, name: &str) -> String {
        quote::quote_column_name(name)
    }

    /// Quote a string literal.
    pub fn quote_value(&self, value: &str) -> String {
        quote::quote_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::Params;

    struct Empty;

    impl Connection for Empty {
        fn execute(&self, _sql: &str, _params: &Params) -> Result<String> {
            Ok(r#"{"meta":[],"data":[],"rows":0}"#.to_string())
        }
    }

    #[test]
    fn test_raw_table_name() {
        let schema = Schema::with_config(
            Arc::new(Empty),
            SchemaConfig::new().with_table_prefix("tbl_"),
        );
        assert_eq!(schema.raw_table_name("users"), "users");
        assert_eq!(schema.raw_table_name("{{%users}}"), "tbl_users");
        assert_eq!(schema.raw_table_name("{{users}}"), "users");
    }

    #[test]
    fn test_query_builder_is_memoized() {
        let schema = Schema::new(Arc::new(Empty));
        let first = schema.query_builder() as *const QueryBuilder<Empty>;
        let second = schema.query_builder() as *const QueryBuilder<Empty>;
        assert_eq!(first, second);
        assert!(Arc::ptr_eq(schema.query_builder().db(), schema.db()));
    }

    #[test]
    fn test_missing_table_is_none() {
        let schema = Schema::new(Arc::new(Empty));
        assert!(schema.load_table_schema("nope").unwrap().is_none());
        assert!(schema.table_schema("nope", false).unwrap().is_none());
    }

    #[test]
    fn test_quoting_delegates() {
        let schema = Schema::new(Arc::new(Empty));
        assert_eq!(schema.quote_simple_table_name("users"), "`users`");
        assert_eq!(schema.quote_simple_column_name("*"), "*");
        assert_eq!(schema.quote_table_name("db.users"), "`db`.`users`");
        assert_eq!(schema.quote_column_name("t.id"), "`t`.`id`");
        assert_eq!(schema.quote_value("x"), "'x'");
    }
}
