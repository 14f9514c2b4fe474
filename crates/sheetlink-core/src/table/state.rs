use super::filter::normalize_header;
use crate::error::Result;
use crate::grid::SharedGrid;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A worksheet addressed by normalized header names.
pub struct Table {
    /// The backing grid (shared with every column built from this table)
    pub(crate) grid: SharedGrid,
    /// Normalized header name -> 1-based column index
    pub(crate) headers: HashMap<String, usize>,
}

impl Table {
    /// Read the header row and build the header index.
    ///
    /// When two headers normalize to the same name the later column wins.
    pub fn new(grid: SharedGrid) -> Result<Self> {
        let mut headers = HashMap::new();
        for (idx, raw) in grid.header_row()?.iter().enumerate() {
            let name = normalize_header(raw);
            if let Some(previous) = headers.insert(name.clone(), idx + 1) {
                warn!(header = %name, previous, current = idx + 1, "duplicate header, keeping the later column");
            }
        }
        debug!(headers = headers.len(), "built header index");
        Ok(Table { grid, headers })
    }

    /// The backing grid.
    pub fn grid(&self) -> &SharedGrid {
        &self.grid
    }

    /// Normalized header names with their 1-based column index, in column order.
    pub fn headers(&self) -> Vec<(&str, usize)> {
        let mut headers: Vec<(&str, usize)> = self
            .headers
            .iter()
            .map(|(name, idx)| (name.as_str(), *idx))
            .collect();
        headers.sort_by_key(|&(_, idx)| idx);
        headers
    }

    /// 1-based column index of a header, after normalizing `name`.
    pub fn header_index(&self, name: &str) -> Option<usize> {
        self.headers.get(&normalize_header(name)).copied()
    }

    /// Whether `name` resolves to a header.
    pub fn has_field(&self, name: &str) -> bool {
        self.header_index(name).is_some()
    }

    /// Every cell of the used range, header row included.
    pub fn values(&self) -> Result<Vec<Vec<String>>> {
        self.grid.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::MemoryGrid;
    use std::sync::Arc;

    fn table(headers: Vec<&str>) -> Table {
        Table::new(Arc::new(MemoryGrid::from_rows(&[headers, vec!["1"]]))).unwrap()
    }

    #[test]
    fn test_headers_are_normalized_and_one_based() {
        let table = table(vec!["Prva Kolona", " Druga  Kolona", "TRECA"]);
        assert_eq!(
            table.headers(),
            vec![("prva_kolona", 1), ("druga_kolona", 2), ("treca", 3)]
        );
        assert_eq!(table.header_index("Druga Kolona"), Some(2));
        assert!(table.has_field("prva_kolona"));
        assert!(!table.has_field("cetvrta_kolona"));
    }

    #[test]
    fn test_duplicate_header_last_wins() {
        let table = table(vec!["Amount", "x", " amount "]);
        assert_eq!(table.header_index("amount"), Some(3));
        assert_eq!(table.headers(), vec![("x", 2), ("amount", 3)]);
    }

    #[test]
    fn test_empty_grid_has_no_headers() {
        let table = Table::new(Arc::new(MemoryGrid::new())).unwrap();
        assert!(table.headers().is_empty());
        assert!(table.values().unwrap().is_empty());
    }
}
