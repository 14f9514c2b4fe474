//! CSV-backed grid.
//!
//! The whole file is loaded on open; `persist` rewrites it from the current
//! cell contents.

use super::{Grid, MemoryGrid};
use crate::error::{Result, SheetError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Grid stored as a CSV file on disk.
#[derive(Debug)]
pub struct CsvGrid {
    path: PathBuf,
    cells: MemoryGrid,
}

impl CsvGrid {
    /// Load a CSV file. Row 1 of the file is the header row.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let rows = parse_csv_content(&content)?;
        debug!(path = %path.display(), rows = rows.len(), "loaded csv grid");
        Ok(CsvGrid {
            path: path.to_path_buf(),
            cells: MemoryGrid::from_rows(&rows),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Grid for CsvGrid {
    fn dimensions(&self) -> Result<(usize, usize)> {
        self.cells.dimensions()
    }

    fn read_cell(&self, row: usize, col: usize) -> Result<String> {
        self.cells.read_cell(row, col)
    }

    fn write_cell(&self, row: usize, col: usize, value: &str) -> Result<()> {
        self.cells.write_cell(row, col, value)
    }

    fn persist(&self) -> Result<()> {
        let content = write_csv_content(&self.cells.values()?);
        std::fs::write(&self.path, content)?;
        info!(path = %self.path.display(), "persisted csv grid");
        Ok(())
    }
}

/// Parse CSV text into rows of cells.
///
/// Unquoted fields are trimmed; quoted fields keep their whitespace and may
/// span lines. A trailing newline does not produce an extra row.
pub fn parse_csv_content(content: &str) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut field_was_quoted = false;
    let mut line = 1usize;
    let mut quote_line = 0usize;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' {
            line += 1;
        }
        if in_quotes {
            if c == '"' {
                // Check for escaped quote
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
            continue;
        }
        match c {
            '"' => {
                in_quotes = true;
                field_was_quoted = true;
                quote_line = line;
            }
            ',' => {
                fields.push(finish_field(&mut current, field_was_quoted));
                field_was_quoted = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(finish_field(&mut current, field_was_quoted));
                field_was_quoted = false;
                rows.push(std::mem::take(&mut fields));
            }
            _ => current.push(c),
        }
    }

    if in_quotes {
        return Err(SheetError::Parse {
            line: quote_line,
            message: "Unterminated quoted field".to_string(),
        });
    }
    if !current.is_empty() || field_was_quoted || !fields.is_empty() {
        fields.push(finish_field(&mut current, field_was_quoted));
        rows.push(fields);
    }
    Ok(rows)
}

fn finish_field(current: &mut String, quoted: bool) -> String {
    let field = std::mem::take(current);
    if quoted {
        field
    } else {
        field.trim().to_string()
    }
}

/// Render rows as CSV text, one line per row.
pub fn write_csv_content(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        let fields: Vec<String> = row.iter().map(|f| escape_csv_field(f)).collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

/// Escape a field for CSV output. Fields whose surrounding whitespace would be
/// trimmed on reload are quoted as well.
fn escape_csv_field(field: &str) -> String {
    if field.contains(',')
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r')
        || field != field.trim()
    {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let rows = parse_csv_content("a,b,c\n1,2,3\n").unwrap();
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["1", "2", "3"]]);
    }

    #[test]
    fn test_parse_without_trailing_newline() {
        let rows = parse_csv_content("a,b\n1,2").unwrap();
        assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn test_parse_crlf() {
        let rows = parse_csv_content("a,b\r\n1,2\r\n").unwrap();
        assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn test_parse_quoted_comma_and_escaped_quote() {
        let rows = parse_csv_content(r#"a,"hello, world","say ""hi""""#).unwrap();
        assert_eq!(rows, vec![vec!["a", "hello, world", r#"say "hi""#]]);
    }

    #[test]
    fn test_parse_quoted_preserves_whitespace_and_newlines() {
        let rows = parse_csv_content("\"  keep  \",\"two\nlines\"\nx,y\n").unwrap();
        assert_eq!(rows[0], vec!["  keep  ", "two\nlines"]);
        assert_eq!(rows[1], vec!["x", "y"]);
    }

    #[test]
    fn test_parse_unquoted_is_trimmed() {
        let rows = parse_csv_content(" a , b \n").unwrap();
        assert_eq!(rows, vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_parse_blank_line_is_single_empty_field() {
        let rows = parse_csv_content("a\n\nb\n").unwrap();
        assert_eq!(rows, vec![vec!["a"], vec![""], vec!["b"]]);
    }

    #[test]
    fn test_parse_unterminated_quote_reports_line() {
        let err = parse_csv_content("a,b\n\"open\n").unwrap_err();
        assert!(matches!(err, SheetError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("simple"), "simple");
        assert_eq!(escape_csv_field("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv_field("with\"quote"), "\"with\"\"quote\"");
        assert_eq!(escape_csv_field(" padded "), "\" padded \"");
        assert_eq!(escape_csv_field("-"), "-");
    }

    #[test]
    fn test_write_then_parse_keeps_cells() {
        let rows = vec![
            vec!["Name".to_string(), "Note".to_string()],
            vec!["a, b".to_string(), "  x ".to_string()],
        ];
        let parsed = parse_csv_content(&write_csv_content(&rows)).unwrap();
        assert_eq!(parsed, rows);
    }

    #[test]
    fn test_persist_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.csv");
        std::fs::write(&path, "Name,Qty\napple,3\npear,5\n").unwrap();

        let grid = CsvGrid::open(&path).unwrap();
        grid.write_cell(3, 2, "8").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Name,Qty\napple,3\npear,5\n");

        grid.persist().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Name,Qty\napple,3\npear,8\n");
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvGrid::open(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, SheetError::Io(_)));
    }
}
