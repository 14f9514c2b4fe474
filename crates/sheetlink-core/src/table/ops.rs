use super::filter::{is_excluded_row, normalize_header};
use super::{Column, Row, Table};
use crate::error::{Result, SheetError};

/// Lazy pass over the data rows of one grid snapshot, skipping keyword and
/// blank rows and trimming every cell.
pub struct Rows {
    inner: std::vec::IntoIter<Row>,
}

impl Iterator for Rows {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        self.inner.by_ref().find(|row| !is_excluded_row(row)).map(|row| {
            row.into_iter()
                .map(|cell| cell.trim().to_string())
                .collect()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl Table {
    /// Build a fresh column for a header name.
    pub fn column_by_header(&self, name: &str) -> Result<Column> {
        let Some(idx) = self.header_index(name) else {
            return Err(SheetError::HeaderNotFound {
                name: normalize_header(name),
            });
        };
        Column::new(self.grid.clone(), idx - 1)
    }

    /// Data row at 1-based position `index` (1 is grid row 2), cells untrimmed.
    ///
    /// Returns None for position 0, positions past the last row, and keyword
    /// or blank rows.
    pub fn row_at(&self, index: usize) -> Result<Option<Row>> {
        let Some(position) = index.checked_sub(1) else {
            return Ok(None);
        };
        Ok(self
            .grid
            .data_rows()?
            .into_iter()
            .nth(position)
            .filter(|row| !is_excluded_row(row)))
    }

    /// Data rows in grid order. Each call re-reads the grid.
    pub fn rows(&self) -> Result<Rows> {
        Ok(Rows {
            inner: self.grid.data_rows()?.into_iter(),
        })
    }

    /// First data row whose cell in the 0-based column equals `value`.
    /// A keyword or blank match yields None; the scan does not continue past it.
    pub(crate) fn find_row(&self, col: usize, value: &str) -> Result<Option<Row>> {
        Ok(self
            .grid
            .data_rows()?
            .into_iter()
            .find(|row| row.get(col).map_or("", String::as_str) == value)
            .filter(|row| !is_excluded_row(row)))
    }
}
