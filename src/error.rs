use thiserror::Error;

use crate::schema::Capability;

/// Convenience result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Error type returned by the dataset service and its operations.
///
/// This is a single error enum shared across setup, query, and statistics
/// paths. Every failure is raised synchronously to the caller; nothing is
/// retried or swallowed.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A required setup input was absent (the host settings store can hand
    /// the service nothing).
    #[error("missing required argument '{name}'")]
    NullArgument { name: &'static str },

    /// The schema description is malformed or empty.
    #[error("invalid schema configuration: {message}")]
    Configuration { message: String },

    /// An operation was invoked before a successful setup.
    #[error("dataset service is not initialized; call setup first")]
    NotInitialized,

    /// The named field is missing from the schema or lacks the required
    /// capability flag.
    #[error("field '{field}' does not support {capability}")]
    FieldNotSupported {
        field: String,
        capability: Capability,
    },

    /// Unknown aggregation function name.
    #[error("unsupported aggregation function '{name}'")]
    UnsupportedOperation { name: String },

    /// An argument is outside its valid range or names an unknown column.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A statistic was computed over zero rows.
    #[error("dataset contains no rows")]
    EmptyDataset,

    /// Correlation inputs differ in length (or are empty).
    #[error("dimension mismatch: {left} vs {right} values")]
    DimensionMismatch { left: usize, right: usize },

    /// A value could not be coerced to the numeric type a computation
    /// requires.
    #[error("cannot coerce value at row {row} column '{column}' to a number (raw='{raw}')")]
    Coercion {
        row: usize,
        column: String,
        raw: String,
    },
}
