//! # Named Numeric Tables
//!
//! A `Table` is an ordered set of uniquely named `f64` columns of equal length,
//! stored row-major in an `ndarray::Array2` of shape `[n_rows, n_cols]`.
//!
//! - Fixed Shape: rows and column identifiers are set at construction and never
//!   change. Operations that produce a new table return a new value; the only
//!   mutating operation is the explicitly named `mark_row_max_in_place`.
//! - Validated Input: empty tables, ragged columns, duplicate names and
//!   non-finite values are rejected up front, so downstream transforms never
//!   have to handle them.

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use polars::prelude::PolarsError;
use std::collections::HashSet;
use thiserror::Error;

pub mod frame;
pub mod indicator;

pub use frame::{demo_table, load_table};
pub use indicator::{hadamard, isolate_row_max, row_max_columns, row_max_indicator};

/// Errors raised while building, loading or combining tables.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Error from the underlying Polars DataFrame library: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("A table needs at least one row and one column (found {rows} rows, {cols} columns).")]
    Empty { rows: usize, cols: usize },
    #[error("Table has {values} value columns but {names} column names.")]
    ShapeMismatch { names: usize, values: usize },
    #[error("Column '{column}' has {found} rows, expected {expected}.")]
    RaggedColumns {
        column: String,
        expected: usize,
        found: usize,
    },
    #[error("The column name '{0}' appears more than once.")]
    DuplicateColumn(String),
    #[error("Non-finite value (NaN or Infinity) in column '{column}' at row {row}.")]
    NonFiniteValue { column: String, row: usize },
    #[error(
        "Tables cannot be combined: left is {left_rows}x{left_cols}, right is {right_rows}x{right_cols}."
    )]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
    #[error("Tables cannot be combined: column {index} is '{left}' on the left but '{right}' on the right.")]
    ColumnMismatch {
        index: usize,
        left: String,
        right: String,
    },
    #[error(
        "The column '{column_name}' could not be converted to the expected type '{expected_type}'. (Found type: {found_type})"
    )]
    ColumnWrongType {
        column_name: String,
        expected_type: &'static str,
        found_type: String,
    },
    #[error("Missing or null values were found in column '{0}'.")]
    MissingValues(String),
}

/// Ordered, named `f64` columns of equal length.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    names: Vec<String>,
    values: Array2<f64>,
}

impl Table {
    /// Builds a table from column names and a `[n_rows, n_cols]` value matrix.
    pub fn new(names: Vec<String>, values: Array2<f64>) -> Result<Self, TableError> {
        let (rows, cols) = values.dim();
        if names.len() != cols {
            return Err(TableError::ShapeMismatch {
                names: names.len(),
                values: cols,
            });
        }
        if rows == 0 || cols == 0 {
            return Err(TableError::Empty { rows, cols });
        }

        let mut seen = HashSet::with_capacity(cols);
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }

        for ((row, col), value) in values.indexed_iter() {
            if !value.is_finite() {
                return Err(TableError::NonFiniteValue {
                    column: names[col].clone(),
                    row,
                });
            }
        }

        Ok(Self { names, values })
    }

    /// Builds a table from `(name, column)` pairs, in the given column order.
    pub fn from_columns(columns: Vec<(String, Vec<f64>)>) -> Result<Self, TableError> {
        let cols = columns.len();
        let rows = columns.first().map_or(0, |(_, values)| values.len());

        let mut names = Vec::with_capacity(cols);
        let mut values = Array2::zeros((rows, cols));
        for (j, (name, column)) in columns.into_iter().enumerate() {
            if column.len() != rows {
                return Err(TableError::RaggedColumns {
                    column: name,
                    expected: rows,
                    found: column.len(),
                });
            }
            for (i, value) in column.into_iter().enumerate() {
                values[[i, j]] = value;
            }
            names.push(name);
        }

        Self::new(names, values)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    /// Looks a column up by name.
    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|j| self.values.column(j))
    }

    /// Iterates over the rows as views across all columns.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> {
        self.values.axis_iter(Axis(0))
    }

    /// Builds a table that shares this table's column names but carries new
    /// values. The caller guarantees the shape matches.
    pub(crate) fn with_values(&self, values: Array2<f64>) -> Self {
        debug_assert_eq!(values.dim(), self.values.dim());
        Self {
            names: self.names.clone(),
            values,
        }
    }

    pub(crate) fn values_mut(&mut self) -> &mut Array2<f64> {
        &mut self.values
    }
}
