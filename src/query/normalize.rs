//! Min-max normalization of one column.

use crate::error::{DatasetError, DatasetResult};
use crate::types::{Table, Value};

/// Returns a full copy of the table with `field` rescaled to
/// `(v - min) / (max - min)`.
///
/// Unlike the other query operations this performs no schema capability
/// check; any numeric column can be normalized. When every value is equal
/// the formula divides by zero and the column comes back as NaN, which is
/// left for the caller to observe.
pub fn normalize(table: &Table, field: &str) -> DatasetResult<Table> {
    let values = table.numeric_column(field)?;
    if values.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let idx = table
        .column_index(field)
        .ok_or_else(|| DatasetError::InvalidArgument {
            message: format!("unknown column '{field}'"),
        })?;

    let rows = table
        .rows
        .iter()
        .zip(&values)
        .map(|(row, &v)| {
            let mut out = row.clone();
            out[idx] = Value::Float64((v - min) / (max - min));
            out
        })
        .collect();

    Ok(Table::new(table.columns.clone(), rows))
}
