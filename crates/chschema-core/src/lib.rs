//! chschema Core - ClickHouse table-schema introspection.
//!
//! This crate loads table metadata from the `system.columns` catalog, maps
//! native column types onto a small set of logical types, and quotes
//! identifiers for generated SQL.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use chschema_core::{Schema, SchemaConfig};
//!
//! let schema = Schema::with_config(Arc::new(my_connection), SchemaConfig::default());
//!
//! match schema.table_schema("hits", false)? {
//!     Some(table) => {
//!         for column in table.columns() {
//!             println!("{} {} -> {}", column.name, column.db_type, column.logical_type);
//!         }
//!     }
//!     None => println!("no such table"),
//! }
//!
//! let sql = schema.query_builder().select("hits", &["id", "url"], None, Some(10));
//! ```
//!
//! Transport is out of scope: callers implement [`Connection`] for whatever
//! client they already use.

pub mod catalog;
pub mod command;
pub mod config;
pub mod connection;
pub mod error;
pub mod format;
pub mod query_builder;
pub mod quote;
pub mod schema;

pub use catalog::{CatalogColumn, ColumnSchema, HostType, LogicalType, TableSchema};
pub use command::Command;
pub use config::SchemaConfig;
pub use connection::{Connection, ParamValue, Params};
pub use error::{Error, Result};
pub use format::JsonResult;
pub use query_builder::QueryBuilder;
pub use schema::{Schema, TABLE_COLUMNS_SQL};
