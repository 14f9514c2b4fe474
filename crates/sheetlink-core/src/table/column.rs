//! Filtered, eagerly materialized view over one grid column.

use super::aggregate::Aggregate;
use super::filter::is_unwanted_cell;
use crate::error::{Result, SheetError};
use crate::grid::{CellRef, SharedGrid};
use std::fmt;
use tracing::{debug, info};

/// The data cells of one column, minus empty, "total" and "subtotal" cells.
///
/// Values are copied out of the grid when the column is built. Writes through
/// [`Column::set`] go back to the grid; other columns built earlier over the
/// same grid column are not refreshed.
pub struct Column {
    grid: SharedGrid,
    /// 0-based grid column index.
    index: usize,
    values: Vec<String>,
}

impl Column {
    /// Copy and filter the data cells (grid rows 2..N) at a 0-based column index.
    pub fn new(grid: SharedGrid, index: usize) -> Result<Self> {
        let values: Vec<String> = grid
            .data_rows()?
            .into_iter()
            .map(|mut row| {
                if index < row.len() {
                    row.swap_remove(index)
                } else {
                    String::new()
                }
            })
            .filter(|cell| !is_unwanted_cell(cell))
            .collect();
        debug!(column = %CellRef::col_to_letters(index), len = values.len(), "materialized column");
        Ok(Column {
            grid,
            index,
            values,
        })
    }

    /// 0-based grid column this view was built from.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.values.iter()
    }

    pub fn get(&self, i: usize) -> Result<&str> {
        self.values
            .get(i)
            .map(String::as_str)
            .ok_or(SheetError::IndexOutOfRange {
                index: i,
                len: self.values.len(),
            })
    }

    /// Overwrite position `i` and write it through to the grid.
    ///
    /// The grid target is row `i + 2`, column `index + 1`, followed by one
    /// `persist`. The in-memory value is updated first and is not rolled back
    /// if the grid write or persist fails.
    pub fn set(&mut self, i: usize, value: impl Into<String>) -> Result<()> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(i)
            .ok_or(SheetError::IndexOutOfRange { index: i, len })?;
        *slot = value.into();

        let (row, col) = (i + 2, self.index + 1);
        info!(cell = %CellRef::new(self.index, i + 1), value = %slot, "writing cell");
        self.grid.write_cell(row, col, slot)?;
        self.grid.persist()
    }

    pub fn aggregate(&self, kind: Aggregate) -> f64 {
        kind.apply(&self.values)
    }
}

impl<'a> IntoIterator for &'a Column {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.values).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, MemoryGrid};
    use std::io;
    use std::sync::Arc;

    fn grid() -> Arc<MemoryGrid> {
        Arc::new(MemoryGrid::from_rows(&[
            vec!["Item", "Amount"],
            vec!["a", "5"],
            vec!["b", ""],
            vec!["c", " Total "],
            vec!["d", "subtotal"],
            vec!["e", "3"],
        ]))
    }

    #[test]
    fn test_filters_unwanted_cells_in_row_order() {
        let column = Column::new(grid(), 1).unwrap();
        assert_eq!(column.as_slice(), ["5", "3"]);
        assert_eq!(column.len(), 2);
    }

    #[test]
    fn test_header_is_excluded() {
        let column = Column::new(grid(), 0).unwrap();
        assert_eq!(column.as_slice(), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_column_past_used_width_is_empty() {
        let column = Column::new(grid(), 9).unwrap();
        assert!(column.is_empty());
    }

    #[test]
    fn test_get_out_of_range() {
        let column = Column::new(grid(), 1).unwrap();
        assert_eq!(column.get(1).unwrap(), "3");
        assert!(matches!(
            column.get(2),
            Err(SheetError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_set_writes_through_and_persists_once() {
        let grid = grid();
        let mut column = Column::new(grid.clone(), 1).unwrap();
        column.set(1, "42").unwrap();

        assert_eq!(column.get(1).unwrap(), "42");
        assert_eq!(grid.write_count(), 1);
        assert_eq!(grid.persist_count(), 1);
        // Position 1 maps to grid row 3, column 2.
        assert_eq!(grid.read_cell(3, 2).unwrap(), "42");
    }

    #[test]
    fn test_set_out_of_range_touches_nothing() {
        let grid = grid();
        let mut column = Column::new(grid.clone(), 1).unwrap();
        assert!(matches!(
            column.set(5, "1"),
            Err(SheetError::IndexOutOfRange { index: 5, len: 2 })
        ));
        assert_eq!(grid.write_count(), 0);
        assert_eq!(grid.persist_count(), 0);
    }

    #[test]
    fn test_earlier_columns_go_stale() {
        let grid = grid();
        let before = Column::new(grid.clone(), 1).unwrap();
        let mut writer = Column::new(grid.clone(), 1).unwrap();
        writer.set(0, "9").unwrap();

        assert_eq!(before.get(0).unwrap(), "5");
        assert_eq!(Column::new(grid, 1).unwrap().get(0).unwrap(), "9");
    }

    /// Grid whose persist always fails.
    struct FailingPersist(MemoryGrid);

    impl Grid for FailingPersist {
        fn dimensions(&self) -> Result<(usize, usize)> {
            self.0.dimensions()
        }
        fn read_cell(&self, row: usize, col: usize) -> Result<String> {
            self.0.read_cell(row, col)
        }
        fn write_cell(&self, row: usize, col: usize, value: &str) -> Result<()> {
            self.0.write_cell(row, col, value)
        }
        fn persist(&self) -> Result<()> {
            Err(io::Error::other("rate limited").into())
        }
    }

    #[test]
    fn test_persist_failure_keeps_in_memory_value() {
        let grid = Arc::new(FailingPersist(MemoryGrid::from_rows(&[
            vec!["Amount"],
            vec!["1"],
        ])));
        let mut column = Column::new(grid.clone(), 0).unwrap();
        let err = column.set(0, "2").unwrap_err();

        assert!(matches!(err, SheetError::Io(_)));
        assert_eq!(column.get(0).unwrap(), "2");
        assert_eq!(grid.0.write_count(), 1);
    }

    #[test]
    fn test_iteration_and_debug() {
        let column = Column::new(grid(), 1).unwrap();
        let collected: Vec<&String> = (&column).into_iter().collect();
        assert_eq!(collected, ["5", "3"]);
        assert_eq!(column.iter().count(), 2);
        assert_eq!(format!("{:?}", column), r#"["5", "3"]"#);
    }
}
