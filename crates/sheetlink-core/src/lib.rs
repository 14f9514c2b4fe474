//! sheetlink-core - header-addressed table/column layer over one worksheet grid.

pub mod error;
pub mod grid;
pub mod table;

pub use error::{Result, SheetError};
pub use grid::{CellRef, CsvGrid, Grid, MemoryGrid, SharedGrid};
pub use table::{Accessor, Aggregate, Column, FieldValue, Row, Rows, Table};
