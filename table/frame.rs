//! Conversion between `Table` and polars `DataFrame`, plus TSV loading.
//!
//! Polars is used at the edges only: reading user-provided tab-separated
//! files and pretty-printing tables. All arithmetic runs on the `ndarray`
//! storage inside `Table`.

use super::{Table, TableError};
use ndarray::Array2;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// The fixed three-column table used when no input file is supplied.
pub fn demo_table() -> Table {
    let values = ndarray::array![
        [1.0, 5.0, 2.0],
        [2.0, 6.0, 3.0],
        [3.0, 7.0, 4.0],
        [4.0, 8.0, 5.0],
    ];
    let names = vec!["A".to_string(), "B".to_string(), "c".to_string()];
    Table { names, values }
}

impl Table {
    /// Builds a polars `DataFrame` with one `Float64` column per table column.
    pub fn to_frame(&self) -> Result<DataFrame, TableError> {
        let columns: Vec<Column> = self
            .names()
            .iter()
            .zip(self.values().columns())
            .map(|(name, values)| Column::new(name.as_str().into(), values.to_vec()))
            .collect();
        Ok(DataFrame::new(columns)?)
    }

    /// Builds a table from a `DataFrame` whose columns are all numeric and complete.
    pub fn from_frame(df: &DataFrame) -> Result<Self, TableError> {
        let names: Vec<String> = df
            .get_column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();
        let (rows, cols) = (df.height(), names.len());

        let mut values = Array2::zeros((rows, cols));
        for (j, name) in names.iter().enumerate() {
            let column = extract_numeric_column(df, name)?;
            for (i, value) in column.into_iter().enumerate() {
                values[[i, j]] = value;
            }
        }

        Self::new(names, values)
    }
}

fn extract_numeric_column(df: &DataFrame, column_name: &str) -> Result<Vec<f64>, TableError> {
    let series = df.column(column_name)?;
    if series.null_count() > 0 {
        return Err(TableError::MissingValues(column_name.to_string()));
    }

    let wrong_type = || TableError::ColumnWrongType {
        column_name: column_name.to_string(),
        expected_type: "f64 (numeric)",
        found_type: format!("{:?}", series.dtype()),
    };
    let casted = series.cast(&DataType::Float64).map_err(|_| wrong_type())?;
    if casted.null_count() > 0 {
        return Err(wrong_type());
    }

    let chunked = casted.f64()?.rechunk();
    Ok(chunked.into_no_null_iter().collect())
}

/// Reads a tab-separated file with a header row into a `Table`.
pub fn load_table(path: &Path) -> Result<Table, TableError> {
    log::info!("Loading table from '{}'", path.display());

    let df = CsvReader::new(File::open(path)?)
        .with_options(
            CsvReadOptions::default()
                .with_has_header(true)
                .with_parse_options(CsvParseOptions::default().with_separator(b'\t')),
        )
        .finish()?;

    log::debug!("Loaded frame with shape {:?}", df.shape());
    Table::from_frame(&df)
}
