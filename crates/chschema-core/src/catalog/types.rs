//! Logical column types and the native type map.

use std::fmt;

use serde::Serialize;

/// Portable classification of a native ClickHouse column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalType {
    /// 8-bit integer.
    SmallInt,
    /// 16, 32 or 64-bit integer.
    Integer,
    /// 32 or 64-bit floating point.
    Float,
    /// Strings, fixed strings, enums and everything unmapped.
    String,
    /// Calendar date.
    Date,
    /// Date with time of day.
    DateTime,
}

/// Host-side value representation derived from a [`LogicalType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostType {
    /// Signed integer.
    Integer,
    /// Floating point.
    Float,
    /// Text.
    String,
}

/// Native type name to logical type. Keys are matched case-sensitively.
///
/// Composite types (`Array`, `Tuple`, `Nested`) are deliberately absent and
/// classify as [`LogicalType::String`].
static TYPE_MAP: &[(&str, LogicalType)] = &[
    ("UInt8", LogicalType::SmallInt),
    ("UInt16", LogicalType::Integer),
    ("UInt32", LogicalType::Integer),
    ("UInt64", LogicalType::Integer),
    ("Int8", LogicalType::SmallInt),
    ("Int16", LogicalType::Integer),
    ("Int32", LogicalType::Integer),
    ("Int64", LogicalType::Integer),
    ("Float32", LogicalType::Float),
    ("Float64", LogicalType::Float),
    ("String", LogicalType::String),
    ("FixedString", LogicalType::String),
    ("Date", LogicalType::Date),
    ("DateTime", LogicalType::DateTime),
    ("Enum", LogicalType::String),
    ("Enum8", LogicalType::String),
    ("Enum16", LogicalType::String),
];

impl LogicalType {
    /// Look up a native type name in the fixed type map.
    pub fn lookup(native: &str) -> Option<Self> {
        TYPE_MAP
            .iter()
            .find(|(name, _)| *name == native)
            .map(|(_, logical)| *logical)
    }

    /// Classify a native type name, defaulting to [`LogicalType::String`].
    pub fn classify(native: &str) -> Self {
        Self::lookup(native).unwrap_or(LogicalType::String)
    }

    /// Host representation for values of this type.
    pub fn host_type(&self) -> HostType {
        match self {
            LogicalType::SmallInt | LogicalType::Integer => HostType::Integer,
            LogicalType::Float => HostType::Float,
            LogicalType::String | LogicalType::Date | LogicalType::DateTime => HostType::String,
        }
    }

    /// Check if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            LogicalType::SmallInt | LogicalType::Integer | LogicalType::Float
        )
    }

    /// Lowercase name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalType::SmallInt => "smallint",
            LogicalType::Integer => "integer",
            LogicalType::Float => "float",
            LogicalType::String => "string",
            LogicalType::Date => "date",
            LogicalType::DateTime => "datetime",
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl HostType {
    /// Lowercase name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            HostType::Integer => "integer",
            HostType::Float => "float",
            HostType::String => "string",
        }
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
