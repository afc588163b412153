//! Pearson correlation between two numeric columns.

use crate::error::{DatasetError, DatasetResult};
use crate::types::Table;

/// Pearson correlation coefficient between `field_x` and `field_y`:
/// `sum((x - mx)(y - my)) / sqrt(sum((x - mx)^2) * sum((y - my)^2))`.
///
/// Fails with [`DatasetError::DimensionMismatch`] if the two value sequences
/// differ in length or either is empty. A zero-variance column makes the
/// denominator zero and the result NaN, which is propagated as-is.
pub fn correlation(table: &Table, field_x: &str, field_y: &str) -> DatasetResult<f64> {
    let xs = table.numeric_column(field_x)?;
    let ys = table.numeric_column(field_y)?;

    if xs.is_empty() || xs.len() != ys.len() {
        return Err(DatasetError::DimensionMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(&ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    Ok(cov / (var_x * var_y).sqrt())
}

#[cfg(test)]
mod tests {
    use super::correlation;
    use crate::error::DatasetError;
    use crate::types::{Table, Value};

    fn xy_table(pairs: &[(f64, f64)]) -> Table {
        Table::new(
            vec!["x".to_string(), "y".to_string()],
            pairs
                .iter()
                .map(|&(x, y)| vec![Value::Float64(x), Value::Float64(y)])
                .collect(),
        )
    }

    #[test]
    fn field_correlates_perfectly_with_itself() {
        let t = xy_table(&[(1.0, 0.0), (2.0, 0.0), (4.0, 0.0)]);
        assert!((correlation(&t, "x", "x").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn perfect_negative_correlation() {
        let t = xy_table(&[(1.0, 3.0), (2.0, 2.0), (3.0, 1.0)]);
        assert!((correlation(&t, "x", "y").unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn known_coefficient() {
        // Hand-computed: cov = 11, var_x = 5, var_y = 26, r = 11 / sqrt(130).
        let t = xy_table(&[(1.0, 2.0), (2.0, 4.0), (3.0, 5.0), (4.0, 9.0)]);
        let r = correlation(&t, "x", "y").unwrap();
        assert!((r - 11.0 / 130.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn zero_variance_propagates_nan() {
        let t = xy_table(&[(1.0, 5.0), (2.0, 5.0), (3.0, 5.0)]);
        assert!(correlation(&t, "x", "y").unwrap().is_nan());
    }

    #[test]
    fn empty_table_is_a_dimension_mismatch() {
        let t = xy_table(&[]);
        assert!(matches!(
            correlation(&t, "x", "y"),
            Err(DatasetError::DimensionMismatch { left: 0, right: 0 })
        ));
    }
}
