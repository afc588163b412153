//! Schema-validated query operations.
//!
//! Every operation here takes the current [`crate::types::Table`] plus the
//! parsed [`crate::schema::DatasetSchema`], validates the named field's
//! capability, and materializes its result into a new table (the input is
//! never mutated). The one deliberate exception is [`normalize()`], which
//! performs no capability check at all.
//!
//! Currently implemented:
//!
//! - [`group_by()`]: distinct-value counts for a groupable field
//! - [`aggregate()`]: Average/Sum/Min/Max over an aggregator field
//! - [`prepare_chart_dataset()`]: group-then-aggregate into parallel
//!   label/value arrays
//! - [`filter()`]: row filtering by predicate over a filterable field
//! - [`normalize()`]: min-max rescaling of one column into `[0, 1]`

pub mod aggregate;
pub mod chart;
pub mod filter;
pub mod group;
pub mod normalize;

pub use aggregate::{AggregateFunction, aggregate};
pub use chart::{ChartDataset, prepare_chart_dataset};
pub use filter::filter;
pub use group::group_by;
pub use normalize::normalize;
