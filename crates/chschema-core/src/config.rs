//! Schema configuration.

/// Configuration for a [`Schema`](crate::Schema).
#[derive(Debug, Clone)]
pub struct SchemaConfig {
    /// Keep loaded table metadata between calls.
    pub enable_schema_cache: bool,

    /// Raw table names that are always loaded fresh.
    pub schema_cache_exclude: Vec<String>,

    /// Prefix substituted for `%` in `{{%table}}` names.
    pub table_prefix: String,
}

impl SchemaConfig {
    /// Create a configuration with caching enabled and no table prefix.
    pub fn new() -> Self {
        Self {
            enable_schema_cache: true,
            schema_cache_exclude: Vec::new(),
            table_prefix: String::new(),
        }
    }

    /// Enable or disable the table metadata cache.
    pub fn with_schema_cache(mut self, enabled: bool) -> Self {
        self.enable_schema_cache = enabled;
        self
    }

    /// Never cache metadata for the given table.
    pub fn exclude_from_cache(mut self, table: impl Into<String>) -> Self {
        self.schema_cache_exclude.push(table.into());
        self
    }

    /// Set the table prefix.
    pub fn with_table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_prefix = prefix.into();
        self
    }

    /// Whether metadata for `raw_name` may be cached.
    pub fn is_cacheable(&self, raw_name: &str) -> bool {
        self.enable_schema_cache && !self.schema_cache_exclude.iter().any(|t| t == raw_name)
    }
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self::new()
    }
}
