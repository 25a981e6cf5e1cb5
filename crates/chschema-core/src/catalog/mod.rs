//! Table metadata loaded from the ClickHouse system catalog.
//!
//! Descriptors are rebuilt on every load and never mutated once handed out.

mod column;
mod row;
mod table;
mod types;

pub use column::ColumnSchema;
pub use row::CatalogColumn;
pub use table::TableSchema;
pub use types::{HostType, LogicalType};
