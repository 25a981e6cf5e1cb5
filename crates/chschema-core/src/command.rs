//! Parameterized statements executed through a [`Connection`].

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::connection::{Connection, ParamValue, Params};
use crate::error::Result;
use crate::format::JsonResult;

/// A statement bound to a connection.
pub struct Command<'a, C: Connection + ?Sized> {
    db: &'a C,
    sql: String,
    params: Params,
}

impl<'a, C: Connection + ?Sized> Command<'a, C> {
    /// Create a command for `sql`.
    pub fn new(db: &'a C, sql: impl Into<String>) -> Self {
        Self {
            db,
            sql: sql.into(),
            params: Params::new(),
        }
    }

    /// Bind a placeholder value.
    pub fn bind(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.params = self.params.bind(name, value);
        self
    }

    /// Statement text with placeholders.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bound parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Statement text with parameters interpolated, for logging.
    pub fn raw_sql(&self) -> String {
        self.params.render(&self.sql)
    }

    /// Execute and return the raw response body.
    pub fn execute(&self) -> Result<String> {
        debug!(sql = %self.raw_sql(), "executing command");
        self.db.execute(&self.sql, &self.params)
    }

    /// Execute a `FORMAT JSON` statement and decode every row.
    pub fn query_all<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let body = self.execute()?;
        let result = JsonResult::<T>::parse(&body)?;
        debug!(rows = result.data.len(), "decoded result rows");
        Ok(result.into_rows())
    }
}
