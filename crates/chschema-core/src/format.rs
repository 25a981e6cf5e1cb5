//! ClickHouse `FORMAT JSON` response envelope.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::Result;

/// Name and type of one result column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnMeta {
    /// Result column name.
    pub name: String,
    /// Result column type.
    #[serde(rename = "type")]
    pub column_type: String,
}

/// Server-side execution statistics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Statistics {
    /// Wall time in seconds.
    pub elapsed: f64,
    /// Rows scanned.
    pub rows_read: u64,
    /// Bytes scanned.
    pub bytes_read: u64,
}

/// A decoded `FORMAT JSON` document.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
pub struct JsonResult<T> {
    /// Result column descriptions.
    #[serde(default)]
    pub meta: Vec<ColumnMeta>,
    /// Result rows.
    #[serde(default)]
    pub data: Vec<T>,
    /// Row count reported by the server.
    #[serde(default)]
    pub rows: u64,
    /// Execution statistics, when the server sends them.
    #[serde(default)]
    pub statistics: Option<Statistics>,
}

impl<T: DeserializeOwned> JsonResult<T> {
    /// Parse a response body.
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Consume the envelope, keeping only the rows.
    pub fn into_rows(self) -> Vec<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        name: String,
    }

    #[test]
    fn test_parse_envelope() {
        let body = r#"{
            "meta": [{"name": "name", "type": "String"}],
            "data": [{"name": "a"}, {"name": "b"}],
            "rows": 2,
            "statistics": {"elapsed": 0.001, "rows_read": 2, "bytes_read": 64}
        }"#;

        let result = JsonResult::<Row>::parse(body).unwrap();
        assert_eq!(result.meta[0].column_type, "String");
        assert_eq!(result.rows, 2);
        assert_eq!(result.statistics.as_ref().map(|s| s.rows_read), Some(2));
        assert_eq!(
            result.into_rows(),
            vec![Row { name: "a".into() }, Row { name: "b".into() }]
        );
    }

    #[test]
    fn test_parse_without_data() {
        let result = JsonResult::<Row>::parse("{}").unwrap();
        assert!(result.data.is_empty());
        assert!(result.statistics.is_none());
    }

    #[test]
    fn test_parse_error() {
        let err = JsonResult::<Row>::parse("Code: 60. DB::Exception").unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }
}
