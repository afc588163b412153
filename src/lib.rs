//! `dataset-query` is a small library for running schema-governed queries and
//! descriptive statistics over an in-memory [`types::Table`].
//!
//! The host supplies two things: a table (how it was populated is out of
//! scope here) and a JSON schema declaring
//! which fields may be grouped, aggregated, or filtered. The
//! [`service::DatasetService`] facade validates every operation against
//! those declarations and computes results without ever mutating the held
//! table.
//!
//! ## Operations
//!
//! **Queries** (capability-checked): group-by with counts, Average/Sum/Min/Max
//! aggregation, fused group+aggregate for charts, predicate filtering.
//! Min-max normalization is the deliberate exception and checks nothing.
//!
//! **Statistics** (no capability checks): population standard deviation,
//! median, mode (multi-modal), percentile with linear interpolation between
//! closest ranks, and Pearson correlation.
//!
//! ## Quick example
//!
//! ```rust
//! use dataset_query::service::DatasetService;
//! use dataset_query::types::{Table, Value};
//!
//! # fn main() -> Result<(), dataset_query::DatasetError> {
//! let schema = r#"[
//!     {"Name": "Genre", "DataSetControls": {"IsGroupable": true, "Filterable": true}},
//!     {"Name": "Rating", "DataSetControls": {"IsAggregator": true}}
//! ]"#;
//!
//! let table = Table::new(
//!     vec!["Genre".to_string(), "Rating".to_string()],
//!     vec![
//!         vec![Value::Utf8("Drama".to_string()), Value::Float64(9.2)],
//!         vec![Value::Utf8("Drama".to_string()), Value::Float64(8.9)],
//!         vec![Value::Utf8("Crime".to_string()), Value::Float64(9.0)],
//!     ],
//! );
//!
//! let mut svc = DatasetService::new();
//! svc.setup(Some(table), Some(schema))?;
//!
//! let by_genre = svc.group_by("Genre")?;
//! assert_eq!(by_genre.row_count(), 2);
//!
//! let median = svc.median("Rating")?;
//! assert_eq!(median, 9.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`service`]: the facade owning the current table + schema
//! - [`schema`]: schema parsing and capability validation
//! - [`query`]: group/aggregate/chart/filter/normalize operations
//! - [`stats`]: descriptive and inferential statistics
//! - [`types`]: the in-memory table and value types
//! - [`observability`]: observer hooks for operation outcomes
//! - [`error`]: the shared error type
//!
//! ## Error policy
//!
//! Every failure is a [`DatasetError`] raised synchronously to the caller;
//! there is no retry, recovery, or partial result. Capability flags are
//! matched by KEY PRESENCE in the schema's `DataSetControls` maps, not by
//! the key's boolean value (see [`schema`] for details).

pub mod error;
pub mod observability;
pub mod query;
pub mod schema;
pub mod service;
pub mod stats;
pub mod types;

pub use error::{DatasetError, DatasetResult};
