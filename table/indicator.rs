//! Row-wise max indicators and element-wise table products.
//!
//! Ties within a row resolve to the first column in declared order.

use super::{Table, TableError};
use ndarray::{ArrayView1, Axis, Zip};

/// Index of the largest entry of `row`; the first one wins on ties.
fn first_max_index(row: ArrayView1<'_, f64>) -> usize {
    let mut best = 0;
    for (j, &value) in row.iter().enumerate().skip(1) {
        if value > row[best] {
            best = j;
        }
    }
    best
}

/// Column index holding the maximum of each row.
pub fn row_max_columns(table: &Table) -> Vec<usize> {
    table.rows().map(first_max_index).collect()
}

impl Table {
    /// Overwrites this table with its own row-max indicator: per row, the
    /// maximum's column becomes 1.0 and every other cell becomes 0.0.
    pub fn mark_row_max_in_place(&mut self) {
        for mut row in self.values_mut().axis_iter_mut(Axis(0)) {
            let winner = first_max_index(row.view());
            row.fill(0.0);
            row[winner] = 1.0;
        }
    }
}

/// Returns a new table of the same shape holding the row-max indicator of
/// `table`. The input is left untouched.
pub fn row_max_indicator(table: &Table) -> Table {
    let mut indicator = table.clone();
    indicator.mark_row_max_in_place();
    if log::log_enabled!(log::Level::Debug) {
        let winners: Vec<&str> = row_max_columns(table)
            .into_iter()
            .map(|j| table.names()[j].as_str())
            .collect();
        log::debug!("Row-max columns: {winners:?}");
    }
    indicator
}

/// Element-wise product of two tables with identical shape and column names.
pub fn hadamard(left: &Table, right: &Table) -> Result<Table, TableError> {
    if left.values().dim() != right.values().dim() {
        return Err(TableError::DimensionMismatch {
            left_rows: left.nrows(),
            left_cols: left.ncols(),
            right_rows: right.nrows(),
            right_cols: right.ncols(),
        });
    }
    if let Some((index, (l, r))) = left
        .names()
        .iter()
        .zip(right.names())
        .enumerate()
        .find(|(_, (l, r))| l != r)
    {
        return Err(TableError::ColumnMismatch {
            index,
            left: l.clone(),
            right: r.clone(),
        });
    }

    let product = Zip::from(left.values())
        .and(right.values())
        .map_collect(|&a, &b| a * b);
    Ok(left.with_values(product))
}

/// Keeps each row's maximum in place and zeroes every other cell.
pub fn isolate_row_max(table: &Table) -> Result<Table, TableError> {
    hadamard(table, &row_max_indicator(table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::demo_table;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn named(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_demo_indicator_marks_column_b() {
        let table = demo_table();
        let indicator = row_max_indicator(&table);
        assert_eq!(indicator.names(), table.names());
        assert_eq!(indicator.column("A").unwrap().to_vec(), vec![0.0; 4]);
        assert_eq!(indicator.column("B").unwrap().to_vec(), vec![1.0; 4]);
        assert_eq!(indicator.column("c").unwrap().to_vec(), vec![0.0; 4]);
    }

    #[test]
    fn test_demo_product_isolates_column_b() {
        let table = demo_table();
        let product = hadamard(&table, &row_max_indicator(&table)).unwrap();
        assert_eq!(product.column("A").unwrap().to_vec(), vec![0.0; 4]);
        assert_eq!(
            product.column("B").unwrap().to_vec(),
            vec![5.0, 6.0, 7.0, 8.0]
        );
        assert_eq!(product.column("c").unwrap().to_vec(), vec![0.0; 4]);
        assert_eq!(isolate_row_max(&table).unwrap(), product);
    }

    #[test]
    fn test_ties_resolve_to_first_column() {
        let table = Table::new(
            named(&["x", "y", "z"]),
            array![[2.0, 2.0, 1.0], [0.0, 3.0, 3.0], [4.0, 4.0, 4.0]],
        )
        .unwrap();
        assert_eq!(row_max_columns(&table), vec![0, 1, 0]);
        let indicator = row_max_indicator(&table);
        assert_eq!(
            indicator.values(),
            array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]
        );
    }

    #[test]
    fn test_negative_values_pick_largest() {
        let table = Table::new(named(&["x", "y"]), array![[-5.0, -1.0], [-0.5, -2.0]]).unwrap();
        assert_eq!(row_max_columns(&table), vec![1, 0]);
        let isolated = isolate_row_max(&table).unwrap();
        assert_eq!(isolated.values(), array![[0.0, -1.0], [-0.5, 0.0]]);
    }

    #[test]
    fn test_single_column_is_all_ones() {
        let table = Table::new(named(&["only"]), array![[3.0], [-7.0]]).unwrap();
        let indicator = row_max_indicator(&table);
        assert_eq!(indicator.values(), array![[1.0], [1.0]]);
    }

    #[test]
    fn test_random_tables_satisfy_indicator_properties() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..50 {
            let rows = rng.gen_range(1..12);
            let cols = rng.gen_range(1..6);
            let names: Vec<String> = (0..cols).map(|j| format!("col{j}")).collect();
            let values = ndarray::Array2::from_shape_fn((rows, cols), |_| {
                // Small integer range so ties show up regularly.
                rng.gen_range(-3..4) as f64
            });
            let table = Table::new(names, values).unwrap();
            let before = table.clone();

            let indicator = row_max_indicator(&table);
            let product = hadamard(&table, &indicator).unwrap();

            assert_eq!(table, before);
            for ((row, ind), prod) in table.rows().zip(indicator.rows()).zip(product.rows()) {
                assert_abs_diff_eq!(ind.sum(), 1.0);
                let winner = ind.iter().position(|&v| v == 1.0).unwrap();
                let max = row.fold(f64::NEG_INFINITY, |a, &b| a.max(b));
                assert_eq!(row[winner], max);
                assert!(row.iter().take(winner).all(|&v| v < max));
                for j in 0..row.len() {
                    let expected = if j == winner { row[j] } else { 0.0 };
                    assert_eq!(prod[j], expected);
                }
            }
        }
    }

    #[test]
    fn test_transform_leaves_input_bit_identical() {
        let table = demo_table();
        let bits_before: Vec<u64> = table.values().iter().map(|v| v.to_bits()).collect();
        let _indicator = row_max_indicator(&table);
        let _isolated = isolate_row_max(&table).unwrap();
        let bits_after: Vec<u64> = table.values().iter().map(|v| v.to_bits()).collect();
        assert_eq!(bits_before, bits_after);
    }

    #[test]
    fn test_in_place_matches_copying_variant() {
        let table = demo_table();
        let mut marked = table.clone();
        marked.mark_row_max_in_place();
        assert_eq!(marked, row_max_indicator(&table));
    }

    #[test]
    fn test_isolate_row_max_matches_explicit_product() {
        let table = Table::new(named(&["x", "y", "z"]), array![[1.0, 9.0, 3.0], [7.0, 2.0, 7.0]]).unwrap();
        let explicit = hadamard(&table, &row_max_indicator(&table)).unwrap();
        let isolated = isolate_row_max(&table).unwrap();
        assert_eq!(isolated, explicit);
        assert_eq!(isolated.values(), array![[0.0, 9.0, 0.0], [7.0, 0.0, 0.0]]);
    }

    #[test]
    fn test_hadamard_rejects_shape_mismatch() {
        let left = demo_table();
        let right = Table::new(named(&["A"]), array![[1.0]]).unwrap();
        let err = hadamard(&left, &right).unwrap_err();
        assert!(matches!(
            err,
            TableError::DimensionMismatch { left_rows: 4, left_cols: 3, right_rows: 1, right_cols: 1 }
        ));
    }

    #[test]
    fn test_hadamard_rejects_renamed_columns() {
        let left = Table::new(named(&["x", "y"]), array![[1.0, 2.0]]).unwrap();
        let right = Table::new(named(&["x", "w"]), array![[1.0, 0.0]]).unwrap();
        match hadamard(&left, &right).unwrap_err() {
            TableError::ColumnMismatch { index, left, right } => {
                assert_eq!(index, 1);
                assert_eq!(left, "y");
                assert_eq!(right, "w");
            }
            other => panic!("Expected ColumnMismatch, got {:?}", other),
        }
    }
}
