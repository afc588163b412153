//! Single-column descriptive statistics.

use crate::error::{DatasetError, DatasetResult};
use crate::types::{Table, Value};

/// Population standard deviation of `field`: `sqrt(mean((x - mean)^2))`.
///
/// Divides by N (not N-1). Fails with [`DatasetError::EmptyDataset`] on a
/// table with zero rows.
pub fn standard_deviation(table: &Table, field: &str) -> DatasetResult<f64> {
    let values = table.numeric_column(field)?;
    if values.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Ok(variance.sqrt())
}

/// Median of `field`.
///
/// Sorts ascending; for an even count the two central elements are averaged.
pub fn median(table: &Table, field: &str) -> DatasetResult<f64> {
    let mut values = table.numeric_column(field)?;
    if values.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }

    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Ok((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Ok(values[mid])
    }
}

/// All values of `field` whose occurrence count equals the maximum observed
/// count, in first-seen order.
///
/// Values group by raw equality, without numeric coercion, so mixed-type and
/// string columns work too.
pub fn mode(table: &Table, field: &str) -> DatasetResult<Vec<Value>> {
    let idx = table
        .column_index(field)
        .ok_or_else(|| DatasetError::InvalidArgument {
            message: format!("unknown column '{field}'"),
        })?;
    if table.rows.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }

    let groups = table.partition_rows(idx);
    let max_count = groups.iter().map(|(_, idxs)| idxs.len()).max().unwrap_or(0);
    Ok(groups
        .into_iter()
        .filter(|(_, idxs)| idxs.len() == max_count)
        .map(|(value, _)| value)
        .collect())
}

/// The p-th percentile of `field`, using linear interpolation between
/// closest ranks.
///
/// `rank = p/100 * (n - 1)`; a fractional rank interpolates between the
/// neighboring sorted elements. Fails with
/// [`DatasetError::InvalidArgument`] unless `0 <= p <= 100` and with
/// [`DatasetError::EmptyDataset`] on zero rows.
pub fn percentile(table: &Table, field: &str, p: f64) -> DatasetResult<f64> {
    if !(0.0..=100.0).contains(&p) {
        return Err(DatasetError::InvalidArgument {
            message: format!("percentile must be within [0, 100], got {p}"),
        });
    }

    let mut values = table.numeric_column(field)?;
    if values.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }
    values.sort_by(f64::total_cmp);

    let rank = p / 100.0 * (values.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return Ok(values[lower]);
    }

    let frac = rank - lower as f64;
    Ok(values[lower] + frac * (values[upper] - values[lower]))
}
