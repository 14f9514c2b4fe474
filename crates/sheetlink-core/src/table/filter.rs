//! Header normalization and row/cell filtering rules.
//!
//! Column filtering is per cell and exact-match; row filtering is per row and
//! substring-based. Both are pure functions of cell text.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Words that mark summary rows and cells.
pub const KEYWORDS: [&str; 2] = ["total", "subtotal"];

/// Trim, lowercase, and collapse internal whitespace runs to `_`.
///
/// `" Treca  Kolona "` becomes `"treca_kolona"`.
pub fn normalize_header(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    WHITESPACE_RUN.replace_all(&lowered, "_").into_owned()
}

/// True for cells a column drops: empty, "total" or "subtotal" after trimming
/// and case folding.
pub fn is_unwanted_cell(cell: &str) -> bool {
    let value = cell.trim().to_lowercase();
    value.is_empty() || KEYWORDS.contains(&value.as_str())
}

/// True if the text contains a keyword anywhere, case-insensitively.
pub fn mentions_keyword(cell: &str) -> bool {
    let lowered = cell.to_lowercase();
    KEYWORDS.iter().any(|k| lowered.contains(k))
}

/// True if any cell in the row mentions a keyword.
pub fn row_has_keyword<S: AsRef<str>>(row: &[S]) -> bool {
    row.iter().any(|cell| mentions_keyword(cell.as_ref()))
}

/// True if every cell is empty or whitespace. A row with no cells is blank.
pub fn row_is_blank<S: AsRef<str>>(row: &[S]) -> bool {
    row.iter().all(|cell| cell.as_ref().trim().is_empty())
}

/// Rows skipped by every row-yielding table operation.
pub fn is_excluded_row<S: AsRef<str>>(row: &[S]) -> bool {
    row_has_keyword(row) || row_is_blank(row)
}
