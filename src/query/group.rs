//! Grouping of a [`crate::types::Table`] by a schema field.

use crate::error::{DatasetError, DatasetResult};
use crate::schema::{Capability, DatasetSchema};
use crate::types::{Table, Value};

/// Group rows by the distinct values of `field` and count occurrences.
///
/// Requires the field to be declared groupable. The result table has two
/// columns: the original column header and `"Count"`. Group keys keep their
/// native value type and appear in first-seen order.
pub fn group_by(table: &Table, schema: &DatasetSchema, field: &str) -> DatasetResult<Table> {
    schema.require(field, Capability::Groupable)?;

    let idx = table
        .column_index(field)
        .ok_or_else(|| DatasetError::InvalidArgument {
            message: format!("unknown column '{field}'"),
        })?;

    let rows = table
        .partition_rows(idx)
        .into_iter()
        .map(|(key, indices)| vec![key, Value::Int64(indices.len() as i64)])
        .collect();

    Ok(Table::new(
        vec![table.columns[idx].clone(), "Count".to_string()],
        rows,
    ))
}
