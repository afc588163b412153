//! Descriptive and inferential statistics over a [`crate::types::Table`].
//!
//! Statistics operate directly on table columns with numeric coercion and,
//! unlike the query operations, consult no schema capabilities.
//!
//! - [`standard_deviation()`]: population standard deviation (divide by N)
//! - [`median()`]: middle value, averaging the two central elements for even
//!   counts
//! - [`mode()`]: all values tied at the maximum occurrence count
//! - [`percentile()`]: linear interpolation between closest ranks
//! - [`correlation()`]: Pearson correlation coefficient

pub mod correlation;
pub mod descriptive;

pub use correlation::correlation;
pub use descriptive::{median, mode, percentile, standard_deviation};
