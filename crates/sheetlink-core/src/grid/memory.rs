//! Sparse in-memory grid.

use super::{CellRef, Grid};
use crate::error::Result;
use dashmap::DashMap;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Grid backed by a `DashMap` of non-empty cells.
///
/// `persist` has nothing to commit; it only counts calls, as does
/// `write_cell`, so callers can observe write-through traffic.
#[derive(Debug, Default)]
pub struct MemoryGrid {
    cells: DashMap<CellRef, String>,
    writes: AtomicUsize,
    persists: AtomicUsize,
}

impl MemoryGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from row-major cell text. `rows[0]` becomes grid row 1.
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Self {
        let grid = Self::new();
        for (row_idx, row) in rows.iter().enumerate() {
            for (col_idx, value) in row.iter().enumerate() {
                let value = value.as_ref();
                if !value.is_empty() {
                    grid.cells
                        .insert(CellRef::new(col_idx, row_idx), value.to_string());
                }
            }
        }
        grid
    }

    /// Number of `write_cell` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of `persist` calls so far.
    pub fn persist_count(&self) -> usize {
        self.persists.load(Ordering::SeqCst)
    }
}

fn cell_ref(row: usize, col: usize) -> Result<CellRef> {
    CellRef::from_grid(row, col).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Grid coordinates are 1-based, got ({}, {})", row, col),
        )
        .into()
    })
}

impl Grid for MemoryGrid {
    fn dimensions(&self) -> Result<(usize, usize)> {
        let mut rows = 0usize;
        let mut cols = 0usize;
        for entry in self.cells.iter() {
            let cell_ref = entry.key();
            rows = rows.max(cell_ref.row + 1);
            cols = cols.max(cell_ref.col + 1);
        }
        Ok((rows, cols))
    }

    fn read_cell(&self, row: usize, col: usize) -> Result<String> {
        let cell_ref = cell_ref(row, col)?;
        Ok(self
            .cells
            .get(&cell_ref)
            .map(|v| v.value().clone())
            .unwrap_or_default())
    }

    fn write_cell(&self, row: usize, col: usize, value: &str) -> Result<()> {
        let cell_ref = cell_ref(row, col)?;
        if value.is_empty() {
            self.cells.remove(&cell_ref);
        } else {
            self.cells.insert(cell_ref, value.to_string());
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        self.persists.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
