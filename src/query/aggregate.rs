//! Aggregation of a [`crate::types::Table`] field.

use std::str::FromStr;

use crate::error::{DatasetError, DatasetResult};
use crate::schema::{Capability, DatasetSchema};
use crate::types::{Table, Value};

/// Built-in aggregation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    /// Arithmetic mean of the partition.
    Average,
    /// Sum of the partition.
    Sum,
    /// Minimum value of the partition.
    Min,
    /// Maximum value of the partition.
    Max,
}

impl AggregateFunction {
    /// Apply this function to a non-empty slice of values.
    pub(crate) fn apply(self, values: &[f64]) -> f64 {
        match self {
            Self::Average => values.iter().sum::<f64>() / values.len() as f64,
            Self::Sum => values.iter().sum(),
            Self::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            Self::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

impl FromStr for AggregateFunction {
    type Err = DatasetError;

    /// Parse a function name (case-insensitive). Anything outside
    /// `Average`/`Sum`/`Min`/`Max` is [`DatasetError::UnsupportedOperation`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("average") {
            Ok(Self::Average)
        } else if s.eq_ignore_ascii_case("sum") {
            Ok(Self::Sum)
        } else if s.eq_ignore_ascii_case("min") {
            Ok(Self::Min)
        } else if s.eq_ignore_ascii_case("max") {
            Ok(Self::Max)
        } else {
            Err(DatasetError::UnsupportedOperation {
                name: s.to_string(),
            })
        }
    }
}

/// Aggregate `field` per distinct value of that same field.
///
/// Requires the field to be declared an aggregator. The field's own value is
/// the group key, so the result has one row per distinct value with columns
/// `"Field"` (native key) and `"Result"` (the computed number).
pub fn aggregate(
    table: &Table,
    schema: &DatasetSchema,
    field: &str,
    function: &str,
) -> DatasetResult<Table> {
    schema.require(field, Capability::Aggregator)?;
    let function = AggregateFunction::from_str(function)?;

    let idx = table
        .column_index(field)
        .ok_or_else(|| DatasetError::InvalidArgument {
            message: format!("unknown column '{field}'"),
        })?;

    let mut rows = Vec::new();
    for (key, indices) in table.partition_rows(idx) {
        let values = coerce_partition(table, field, idx, &indices)?;
        rows.push(vec![key, Value::Float64(function.apply(&values))]);
    }

    Ok(Table::new(
        vec!["Field".to_string(), "Result".to_string()],
        rows,
    ))
}

/// Coerce the cells at `indices` in column `idx` to `f64`.
pub(crate) fn coerce_partition(
    table: &Table,
    column: &str,
    idx: usize,
    indices: &[usize],
) -> DatasetResult<Vec<f64>> {
    indices
        .iter()
        .map(|&i| {
            let v = table.rows[i].get(idx).unwrap_or(&Value::Null);
            v.to_f64().ok_or_else(|| DatasetError::Coercion {
                row: i + 1,
                column: column.to_string(),
                raw: v.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{AggregateFunction, aggregate};
    use crate::error::DatasetError;
    use crate::schema::DatasetSchema;
    use crate::types::{Table, Value};

    fn rating_schema() -> DatasetSchema {
        DatasetSchema::parse(
            r#"[
                {"Name": "Genre", "DataSetControls": {"IsGroupable": true}},
                {"Name": "Rating", "DataSetControls": {"IsAggregator": true}}
            ]"#,
        )
        .unwrap()
    }

    fn rating_table() -> Table {
        Table::new(
            vec!["Genre".to_string(), "Rating".to_string()],
            vec![
                vec![Value::Utf8("Drama".to_string()), Value::Float64(9.0)],
                vec![Value::Utf8("Drama".to_string()), Value::Float64(9.0)],
                vec![Value::Utf8("Crime".to_string()), Value::Float64(8.0)],
            ],
        )
    }

    #[test]
    fn aggregate_groups_by_the_aggregated_fields_own_value() {
        let out = aggregate(&rating_table(), &rating_schema(), "Rating", "Sum").unwrap();

        assert_eq!(out.columns, vec!["Field".to_string(), "Result".to_string()]);
        assert_eq!(out.row_count(), 2);
        // 9.0 appears twice, 8.0 once.
        assert_eq!(out.rows[0], vec![Value::Float64(9.0), Value::Float64(18.0)]);
        assert_eq!(out.rows[1], vec![Value::Float64(8.0), Value::Float64(8.0)]);
    }

    #[test]
    fn aggregate_average_min_max() {
        let table = rating_table();
        let schema = rating_schema();

        let avg = aggregate(&table, &schema, "Rating", "Average").unwrap();
        assert_eq!(avg.rows[0][1], Value::Float64(9.0));

        let min = aggregate(&table, &schema, "Rating", "Min").unwrap();
        assert_eq!(min.rows[1][1], Value::Float64(8.0));

        let max = aggregate(&table, &schema, "Rating", "max").unwrap();
        assert_eq!(max.rows[0][1], Value::Float64(9.0));
    }

    #[test]
    fn aggregate_rejects_unknown_function() {
        let err = aggregate(&rating_table(), &rating_schema(), "Rating", "Variance").unwrap_err();
        assert!(
            matches!(err, DatasetError::UnsupportedOperation { ref name } if name == "Variance")
        );
    }

    #[test]
    fn aggregate_rejects_non_aggregator_field() {
        let err = aggregate(&rating_table(), &rating_schema(), "Genre", "Sum").unwrap_err();
        assert!(matches!(err, DatasetError::FieldNotSupported { .. }));
    }

    #[test]
    fn aggregate_fails_on_non_numeric_values() {
        let schema = DatasetSchema::parse(
            r#"[{"Name": "Genre", "DataSetControls": {"IsAggregator": true}}]"#,
        )
        .unwrap();
        let err = aggregate(&rating_table(), &schema, "Genre", "Sum").unwrap_err();
        assert!(matches!(err, DatasetError::Coercion { .. }));
    }

    #[test]
    fn function_names_parse_case_insensitively() {
        assert_eq!(
            AggregateFunction::from_str("AVERAGE").unwrap(),
            AggregateFunction::Average
        );
        assert!(AggregateFunction::from_str("median").is_err());
    }
}
