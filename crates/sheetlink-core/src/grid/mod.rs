//! Grid collaborator API.
//!
//! A [`Grid`] is the two-dimensional store behind one worksheet. Row 1 holds
//! the headers; every coordinate passed through this trait is 1-based.
//!
//! - [`Grid`] - point read/write plus an explicit `persist`
//! - [`SharedGrid`] - the handle tables and columns hold on to
//! - [`CellRef`] - cell address with A1 display
//! - [`MemoryGrid`] - sparse in-memory grid
//! - [`CsvGrid`] - grid loaded from and persisted to a CSV file

mod cell_ref;
mod csv;
mod memory;

pub use cell_ref::CellRef;
pub use csv::{CsvGrid, parse_csv_content, write_csv_content};
pub use memory::MemoryGrid;

use crate::error::Result;
use std::sync::Arc;

/// Shared handle to a grid. Cheap to clone.
pub type SharedGrid = Arc<dyn Grid>;

/// Two-dimensional string cell store with 1-based coordinates.
///
/// Implementations use interior mutability: writes go through `&self` so a
/// table and any number of columns can share one grid.
pub trait Grid: Send + Sync {
    /// Used range as `(rows, cols)`, header row included.
    fn dimensions(&self) -> Result<(usize, usize)>;

    /// Read one cell. Cells outside the used range read as empty.
    fn read_cell(&self, row: usize, col: usize) -> Result<String>;

    /// Overwrite one cell. Not visible remotely until [`Grid::persist`].
    fn write_cell(&self, row: usize, col: usize, value: &str) -> Result<()>;

    /// Commit pending writes to the backing store.
    fn persist(&self) -> Result<()>;

    /// Row 1 cells.
    fn header_row(&self) -> Result<Vec<String>> {
        let (rows, cols) = self.dimensions()?;
        if rows == 0 {
            return Ok(Vec::new());
        }
        read_row(self, 1, cols)
    }

    /// Rows 2..=N, each padded to the used column count.
    fn data_rows(&self) -> Result<Vec<Vec<String>>> {
        let (rows, cols) = self.dimensions()?;
        (2..=rows).map(|row| read_row(self, row, cols)).collect()
    }

    /// Every cell of the used range, header row first.
    fn values(&self) -> Result<Vec<Vec<String>>> {
        let (rows, cols) = self.dimensions()?;
        (1..=rows).map(|row| read_row(self, row, cols)).collect()
    }
}

fn read_row<G: Grid + ?Sized>(grid: &G, row: usize, cols: usize) -> Result<Vec<String>> {
    (1..=cols).map(|col| grid.read_cell(row, col)).collect()
}
