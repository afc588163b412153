//! Core data model types.
//!
//! This crate operates on an in-memory [`Table`] of dynamically typed
//! [`Value`]s. Tables are supplied wholesale by the host (how they were
//! populated is the host's business) and are never mutated in place:
//! transformations return new tables.

use std::collections::HashMap;
use std::fmt;

use crate::error::{DatasetError, DatasetResult};

/// A single typed value in a [`Table`] cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Coerce this value to `f64` for numeric computation.
    ///
    /// Only `Int64` and `Float64` coerce; everything else (including `Null`)
    /// returns `None` and surfaces as a coercion error at the point of use.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Int64(v) => Some(*v as f64),
            Self::Float64(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Utf8(s) => f.write_str(s),
        }
    }
}

/// Grouping key wrapper giving [`Value`] total equality and a hash.
///
/// `Float64` keys compare by bit pattern, so grouping stays deterministic
/// even in the presence of NaN.
#[derive(Debug, Clone)]
struct GroupKey(Value);

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Value::Null, Value::Null) => true,
            (Value::Int64(a), Value::Int64(b)) => a == b,
            (Value::Float64(a), Value::Float64(b)) => a.to_bits() == b.to_bits(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Utf8(a), Value::Utf8(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for GroupKey {}

impl std::hash::Hash for GroupKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(&self.0).hash(state);
        match &self.0 {
            Value::Null => {}
            Value::Int64(v) => v.hash(state),
            Value::Float64(v) => v.to_bits().hash(state),
            Value::Bool(v) => v.hash(state),
            Value::Utf8(s) => s.hash(state),
        }
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored row-major as `Vec<Vec<Value>>`, one value per column, in
/// the same order as `columns`. Column-name lookups are ASCII
/// case-insensitive throughout the crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Ordered column names.
    pub columns: Vec<String>,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table from column names and rows.
    ///
    /// Each row is expected to carry one value per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the index of a column by name (case-insensitive), if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
    }

    /// Iterate a column's values in row order.
    ///
    /// Short rows yield [`Value::Null`] for the missing cell.
    pub fn column_values(&self, idx: usize) -> impl Iterator<Item = &Value> {
        self.rows
            .iter()
            .map(move |row| row.get(idx).unwrap_or(&Value::Null))
    }

    /// Create a new table containing only rows that match `predicate`.
    ///
    /// The returned table preserves the original columns and row order.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[Value]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Extract a column as `f64` values, in row order.
    ///
    /// Fails with [`DatasetError::InvalidArgument`] if the column does not
    /// exist, and with [`DatasetError::Coercion`] on the first value that is
    /// not numeric (rows are reported 1-based).
    pub fn numeric_column(&self, name: &str) -> DatasetResult<Vec<f64>> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| DatasetError::InvalidArgument {
                message: format!("unknown column '{name}'"),
            })?;

        self.column_values(idx)
            .enumerate()
            .map(|(i, v)| {
                v.to_f64().ok_or_else(|| DatasetError::Coercion {
                    row: i + 1,
                    column: name.to_string(),
                    raw: v.to_string(),
                })
            })
            .collect()
    }

    /// Partition row indices by the value of the column at `idx`.
    ///
    /// Returns one `(key, row indices)` entry per distinct value, in
    /// first-seen order of the keys. Values group by native scalar equality
    /// (`Int64(2)` and `Float64(2.0)` are distinct keys).
    pub fn partition_rows(&self, idx: usize) -> Vec<(Value, Vec<usize>)> {
        let mut groups: Vec<(Value, Vec<usize>)> = Vec::new();
        let mut seen: HashMap<GroupKey, usize> = HashMap::new();

        for (row_idx, row) in self.rows.iter().enumerate() {
            let value = row.get(idx).unwrap_or(&Value::Null);
            let key = GroupKey(value.clone());
            match seen.get(&key) {
                Some(&slot) => groups[slot].1.push(row_idx),
                None => {
                    seen.insert(key, groups.len());
                    groups.push((value.clone(), vec![row_idx]));
                }
            }
        }
        groups
    }
}
