//! Typed catalog columns.

use serde::{Deserialize, Serialize};

/// A single catalog column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Column {
    /// Floating-point values (coordinates, magnitudes, ...)
    Float(Vec<f64>),
    /// Integer values (observation counts, ids, ...)
    Int(Vec<i64>),
}

impl Column {
    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            Column::Float(v) => v.len(),
            Column::Int(v) => v.len(),
        }
    }

    /// True if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Column::Float(_) => "float",
            Column::Int(_) => "int",
        }
    }

    /// Value at `row` widened to `f64`.
    pub fn get_f64(&self, row: usize) -> Option<f64> {
        match self {
            Column::Float(v) => v.get(row).copied(),
            Column::Int(v) => v.get(row).map(|&n| n as f64),
        }
    }

    /// New column holding the given rows, in the given order.
    ///
    /// Every index must be below [`len`](Self::len).
    pub(crate) fn select(&self, rows: &[usize]) -> Column {
        match self {
            Column::Float(v) => Column::Float(rows.iter().map(|&r| v[r]).collect()),
            Column::Int(v) => Column::Int(rows.iter().map(|&r| v[r]).collect()),
        }
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Column::Float(values)
    }
}

impl From<Vec<i64>> for Column {
    fn from(values: Vec<i64>) -> Self {
        Column::Int(values)
    }
}
