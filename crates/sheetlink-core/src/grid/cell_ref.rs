//! Cell addresses.
//!
//! Grid coordinates are 1-based; `CellRef` stores them 0-based and displays
//! them in spreadsheet notation (e.g. "A1", "C4", "AA10").

use std::fmt;

/// A reference to a cell by column and row indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Build from 1-based grid coordinates. Returns None for a zero row or column.
    pub fn from_grid(row: usize, col: usize) -> Option<CellRef> {
        Some(CellRef::new(col.checked_sub(1)?, row.checked_sub(1)?))
    }

    /// Convert column index to spreadsheet-style letters (0 -> A, 25 -> Z, 26 -> AA).
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letters(self.col), self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::CellRef;

    #[test]
    fn test_display_a1() {
        assert_eq!(CellRef::new(0, 0).to_string(), "A1");
        assert_eq!(CellRef::new(2, 3).to_string(), "C4");
        assert_eq!(CellRef::new(26, 9).to_string(), "AA10");
    }

    #[test]
    fn test_from_grid_is_one_based() {
        assert_eq!(CellRef::from_grid(1, 1), Some(CellRef::new(0, 0)));
        assert_eq!(CellRef::from_grid(5, 3), Some(CellRef::new(2, 4)));
        assert_eq!(CellRef::from_grid(0, 1), None);
        assert_eq!(CellRef::from_grid(1, 0), None);
    }

    #[test]
    fn test_col_to_letters_handles_max_usize() {
        let letters = CellRef::col_to_letters(usize::MAX);
        assert!(!letters.is_empty());
        assert!(letters.chars().all(|c| c.is_ascii_uppercase()));
    }
}
