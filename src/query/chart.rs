//! Fused group-and-aggregate for chart rendering.

use std::str::FromStr;

use crate::error::{DatasetError, DatasetResult};
use crate::query::aggregate::{AggregateFunction, coerce_partition};
use crate::schema::{Capability, DatasetSchema};
use crate::types::Table;

/// Parallel label/value arrays ready for a chart component.
///
/// `labels[i]` is the display form of the i-th group key and `values[i]` the
/// aggregate computed over that group; the two are always the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    /// Group key labels, in partition discovery order.
    pub labels: Vec<String>,
    /// One aggregate per label.
    pub values: Vec<f64>,
}

/// Group rows by `group_field` and aggregate `agg_field` per group.
///
/// `group_field` must be groupable and `agg_field` must be an aggregator;
/// both are validated independently. `function` accepts the same names as
/// [`crate::query::aggregate()`].
pub fn prepare_chart_dataset(
    table: &Table,
    schema: &DatasetSchema,
    group_field: &str,
    agg_field: &str,
    function: &str,
) -> DatasetResult<ChartDataset> {
    schema.require(group_field, Capability::Groupable)?;
    schema.require(agg_field, Capability::Aggregator)?;
    let function = AggregateFunction::from_str(function)?;

    let group_idx = table
        .column_index(group_field)
        .ok_or_else(|| DatasetError::InvalidArgument {
            message: format!("unknown column '{group_field}'"),
        })?;
    let agg_idx = table
        .column_index(agg_field)
        .ok_or_else(|| DatasetError::InvalidArgument {
            message: format!("unknown column '{agg_field}'"),
        })?;

    let mut labels = Vec::new();
    let mut values = Vec::new();
    for (key, indices) in table.partition_rows(group_idx) {
        let partition = coerce_partition(table, agg_field, agg_idx, &indices)?;
        labels.push(key.to_string());
        values.push(function.apply(&partition));
    }

    Ok(ChartDataset { labels, values })
}

#[cfg(test)]
mod tests {
    use super::prepare_chart_dataset;
    use crate::error::DatasetError;
    use crate::schema::DatasetSchema;
    use crate::types::{Table, Value};

    fn movie_schema() -> DatasetSchema {
        DatasetSchema::parse(
            r#"[
                {"Name": "Genre", "DataSetControls": {"IsGroupable": true}},
                {"Name": "Rating", "DataSetControls": {"IsAggregator": true}}
            ]"#,
        )
        .unwrap()
    }

    fn movie_table() -> Table {
        Table::new(
            vec!["Genre".to_string(), "Rating".to_string()],
            vec![
                vec![Value::Utf8("Drama".to_string()), Value::Float64(9.0)],
                vec![Value::Utf8("Crime".to_string()), Value::Float64(9.2)],
                vec![Value::Utf8("Drama".to_string()), Value::Float64(8.8)],
            ],
        )
    }

    #[test]
    fn chart_dataset_has_parallel_labels_and_values() {
        let out =
            prepare_chart_dataset(&movie_table(), &movie_schema(), "Genre", "Rating", "Average")
                .unwrap();

        assert_eq!(out.labels, vec!["Drama".to_string(), "Crime".to_string()]);
        assert_eq!(out.values.len(), out.labels.len());
        assert!((out.values[0] - 8.9).abs() < 1e-12);
        assert!((out.values[1] - 9.2).abs() < 1e-12);
    }

    #[test]
    fn chart_dataset_validates_both_fields() {
        let table = movie_table();
        let schema = movie_schema();

        let err =
            prepare_chart_dataset(&table, &schema, "Rating", "Rating", "Sum").unwrap_err();
        assert!(matches!(err, DatasetError::FieldNotSupported { .. }));

        let err = prepare_chart_dataset(&table, &schema, "Genre", "Genre", "Sum").unwrap_err();
        assert!(matches!(err, DatasetError::FieldNotSupported { .. }));
    }

    #[test]
    fn chart_dataset_rejects_unknown_function() {
        let err = prepare_chart_dataset(
            &movie_table(),
            &movie_schema(),
            "Genre",
            "Rating",
            "Median",
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::UnsupportedOperation { .. }));
    }
}
