//! Row filtering by predicate over a single field.

use crate::error::{DatasetError, DatasetResult};
use crate::schema::{Capability, DatasetSchema};
use crate::types::{Table, Value};

/// Returns a new table containing only rows for which `predicate` holds on
/// the raw value of `field`.
///
/// Requires the field to be declared filterable. The result keeps every
/// original column and the original relative row order.
pub fn filter<F>(
    table: &Table,
    schema: &DatasetSchema,
    field: &str,
    mut predicate: F,
) -> DatasetResult<Table>
where
    F: FnMut(&Value) -> bool,
{
    schema.require(field, Capability::Filterable)?;

    let idx = table
        .column_index(field)
        .ok_or_else(|| DatasetError::InvalidArgument {
            message: format!("unknown column '{field}'"),
        })?;

    Ok(table.filter_rows(|row| predicate(row.get(idx).unwrap_or(&Value::Null))))
}
