//! Column descriptors.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use super::row::CatalogColumn;
use super::types::{HostType, LogicalType};

/// A bare type name optionally followed by one parenthesized parameter list.
fn type_pattern() -> &'static Regex {
    static TYPE_RE: OnceLock<Regex> = OnceLock::new();
    TYPE_RE.get_or_init(|| {
        Regex::new(r"^([\w ]+)(?:\(([^)]+)\))?$").expect("valid column type regex")
    })
}

/// Metadata for one column of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSchema {
    /// Column name.
    pub name: String,
    /// Native type exactly as cataloged.
    pub native_type: String,
    /// Native type with the base name lowercased, e.g. `fixedstring(16)`.
    pub db_type: String,
    /// Logical classification.
    pub logical_type: LogicalType,
    /// Host-side value representation.
    pub host_type: HostType,
    /// Default expression, only for columns without a special default kind.
    pub default_value: Option<String>,
}

impl ColumnSchema {
    /// Build a column descriptor from a catalog row.
    pub fn from_catalog(info: &CatalogColumn) -> Self {
        let native_type = info.column_type.clone();
        let mut db_type = native_type.clone();
        let mut logical_type = LogicalType::classify(&native_type);

        if let Some(caps) = type_pattern().captures(&native_type) {
            let base = caps[1].to_ascii_lowercase();
            db_type = match caps.get(2) {
                Some(param) => format!("{}({})", base, param.as_str()),
                None => base.clone(),
            };
            if let Some(mapped) = LogicalType::lookup(&base) {
                logical_type = mapped;
            }
        }

        let default_value = if info.has_plain_default() {
            info.default_expression.clone()
        } else {
            None
        };

        tracing::trace!(
            column = %info.name,
            native_type = %native_type,
            logical_type = %logical_type,
            "loaded column"
        );

        Self {
            name: info.name.clone(),
            native_type,
            db_type,
            logical_type,
            host_type: logical_type.host_type(),
            default_value,
        }
    }

    /// Check if this column has a default value.
    pub fn has_default(&self) -> bool {
        self.default_value.is_some()
    }

    /// Convert a textual value into its host representation.
    ///
    /// An empty string in a non-string column is null. Values that do not
    /// parse as the column's numeric type are kept as strings.
    pub fn cast_value(&self, raw: &str) -> Value {
        if raw.is_empty() && self.host_type != HostType::String {
            return Value::Null;
        }

        match self.host_type {
            HostType::Integer => raw
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .or_else(|_| raw.trim().parse::<u64>().map(Value::from))
                .unwrap_or_else(|_| Value::String(raw.to_string())),
            HostType::Float => raw
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(raw.to_string())),
            HostType::String => Value::String(raw.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(column_type: &str) -> ColumnSchema {
        ColumnSchema::from_catalog(&CatalogColumn::new("default", "t", "c", column_type))
    }

    #[test]
    fn test_plain_types_keep_mapping() {
        let col = column("UInt64");
        assert_eq!(col.native_type, "UInt64");
        assert_eq!(col.db_type, "uint64");
        assert_eq!(col.logical_type, LogicalType::Integer);
        assert_eq!(col.host_type, HostType::Integer);

        assert_eq!(column("Int32").logical_type, LogicalType::Integer);
        assert_eq!(column("Float64").logical_type, LogicalType::Float);
        assert_eq!(column("String").logical_type, LogicalType::String);
        assert_eq!(column("Date").logical_type, LogicalType::Date);
        assert_eq!(column("DateTime").logical_type, LogicalType::DateTime);
        assert_eq!(column("Enum8").logical_type, LogicalType::String);
    }

    #[test]
    fn test_fixed_string_normalized() {
        let col = column("FixedString(16)");
        assert_eq!(col.native_type, "FixedString(16)");
        assert_eq!(col.db_type, "fixedstring(16)");
        assert_eq!(col.logical_type, LogicalType::String);
        assert_eq!(col.host_type, HostType::String);
    }

    #[test]
    fn test_parameter_text_preserved() {
        let col = column("Enum8('a' = 1, 'B' = 2)");
        assert_eq!(col.db_type, "enum8('a' = 1, 'B' = 2)");
        assert_eq!(col.logical_type, LogicalType::String);
    }

    #[test]
    fn test_unmatched_type_left_alone() {
        let col = column("Array(Tuple(String, UInt8))");
        assert_eq!(col.db_type, "Array(Tuple(String, UInt8))");
        assert_eq!(col.logical_type, LogicalType::String);
    }

    #[test]
    fn test_parameterized_datetime_is_string() {
        let col = column("DateTime('UTC')");
        assert_eq!(col.db_type, "datetime('UTC')");
        assert_eq!(col.logical_type, LogicalType::String);
    }

    #[test]
    fn test_plain_default_copied() {
        let info = CatalogColumn::new("db", "t", "n", "UInt8").with_default("", "0");
        let col = ColumnSchema::from_catalog(&info);
        assert_eq!(col.default_value.as_deref(), Some("0"));
        assert!(col.has_default());
    }

    #[test]
    fn test_computed_default_dropped() {
        let info =
            CatalogColumn::new("db", "t", "n", "UInt8").with_default("materialized", "0");
        let col = ColumnSchema::from_catalog(&info);
        assert!(col.default_value.is_none());

        let info = CatalogColumn::new("db", "t", "n", "String").with_default("alias", "concat(a, b)");
        assert!(ColumnSchema::from_catalog(&info).default_value.is_none());
    }

    #[test]
    fn test_cast_value() {
        let int = column("Int64");
        assert_eq!(int.cast_value("42"), Value::from(42i64));
        assert_eq!(int.cast_value(""), Value::Null);
        assert_eq!(int.cast_value("abc"), Value::String("abc".into()));

        let big = column("UInt64");
        assert_eq!(big.cast_value("18446744073709551615"), Value::from(u64::MAX));

        let float = column("Float32");
        assert_eq!(float.cast_value("1.5"), Value::from(1.5f64));
        assert_eq!(float.cast_value("nan"), Value::String("nan".into()));

        let text = column("String");
        assert_eq!(text.cast_value(""), Value::String(String::new()));
        assert_eq!(text.cast_value("x"), Value::String("x".into()));
    }
}
