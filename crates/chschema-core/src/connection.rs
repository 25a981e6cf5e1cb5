//! Connection collaborator and query parameters.
//!
//! Transport, pooling and authentication live behind [`Connection`]; this
//! crate only issues statements through it.

use std::fmt;

use crate::error::Result;
use crate::quote::quote_value;

/// An active connection capable of parameterized query execution.
pub trait Connection: Send + Sync {
    /// Execute `sql` with `:name` placeholders bound from `params` and return
    /// the raw response body.
    ///
    /// Transports without server-side binding can send
    /// [`Params::render`]ed SQL. Failures should be reported as
    /// [`Error::Connection`](crate::Error::Connection); callers propagate
    /// them unchanged.
    fn execute(&self, sql: &str, params: &Params) -> Result<String>;
}

impl<C: Connection + ?Sized> Connection for std::sync::Arc<C> {
    fn execute(&self, sql: &str, params: &Params) -> Result<String> {
        (**self).execute(sql, params)
    }
}

/// A bound parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// SQL NULL.
    Null,
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point.
    Float(f64),
    /// Text.
    String(String),
}

impl ParamValue {
    /// Render as a SQL literal.
    pub fn to_sql(&self) -> String {
        match self {
            ParamValue::Null => "NULL".to_string(),
            ParamValue::Int(v) => v.to_string(),
            ParamValue::UInt(v) => v.to_string(),
            ParamValue::Float(v) => v.to_string(),
            ParamValue::String(s) => quote_value(s),
        }
    }

    /// The string payload, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::UInt(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

/// Ordered `:name` to value bindings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    bindings: Vec<(String, ParamValue)>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value. A leading `:` is added when missing; rebinding a name
    /// replaces its value.
    pub fn bind(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        let name = if name.starts_with(':') {
            name.to_string()
        } else {
            format!(":{}", name)
        };
        let value = value.into();
        match self.bindings.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.bindings.push((name, value)),
        }
        self
    }

    /// Look up a bound value by name, with or without the leading `:`.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let name = name.strip_prefix(':').unwrap_or(name);
        self.bindings
            .iter()
            .find(|(n, _)| &n[1..] == name)
            .map(|(_, v)| v)
    }

    /// Iterate over bindings in bind order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.bindings.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Substitute placeholders with SQL literals in a single pass.
    ///
    /// At each position the longest matching placeholder wins, so `:id` never
    /// clobbers `:id2`. Substituted text is not rescanned.
    pub fn render(&self, sql: &str) -> String {
        if self.bindings.is_empty() {
            return sql.to_string();
        }

        let mut ordered: Vec<&(String, ParamValue)> = self.bindings.iter().collect();
        ordered.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let mut out = String::with_capacity(sql.len());
        let mut rest = sql;
        while let Some(pos) = rest.find(':') {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];
            match ordered.iter().find(|(name, _)| tail.starts_with(name.as_str())) {
                Some((name, value)) => {
                    out.push_str(&value.to_sql());
                    rest = &tail[name.len()..];
                }
                None => {
                    out.push(':');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}
