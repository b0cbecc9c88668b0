//! Schema-driven ETL and feature engineering pipeline for bank marketing
//! campaign response prediction.
//!
//! JSON column schemas drive table creation, type coercion, and column
//! ordering; rows are persisted in a SQLite table store; an ordered
//! transformer pipeline shapes the data for a downstream binary
//! classifier behind the [`ml::models::Classifier`] boundary.

pub mod coerce;
pub mod config;
pub mod error;
pub mod frame;
pub mod io;
pub mod ml;
pub mod schema;
pub mod stats;
pub mod value;

// Re-export commonly used types
pub use coerce::{coerce_integer_columns, quote_text_columns};
pub use error::{Error, Result};
pub use frame::DataFrame;
pub use io::{read_csv, TableStore};
pub use ml::pipeline::{Pipeline, Transformer};
pub use schema::TableSchema;
pub use value::DataValue;

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
