//! Plain-text report over a table.

use crate::config::ReportConfig;
use sheetlink_core::table::{to_integer, Row};
use sheetlink_core::{Result, Table};
use std::fmt::Write;

/// Render every configured report section.
pub fn render(table: &Table, config: &ReportConfig) -> Result<String> {
    let mut out = String::new();

    if let Some(name) = &config.column {
        let column = table.column_by_header(name)?;
        let numbers: Vec<i64> = column.iter().map(|v| to_integer(v)).collect();

        if let Some(threshold) = config.threshold {
            let above: Vec<&String> = column
                .iter()
                .filter(|v| to_integer(v) > threshold)
                .collect();
            section(&mut out, &format!("Values greater than {} in '{}':", threshold, name));
            line(&mut out, format_args!("{:?}", above));
        }

        let product = numbers
            .iter()
            .fold(1i128, |acc, &n| acc.saturating_mul(n as i128));
        section(&mut out, &format!("Product of all values in '{}':", name));
        line(&mut out, format_args!("{}", product));

        let incremented: Vec<i64> = numbers.iter().map(|n| n.saturating_add(1)).collect();
        section(&mut out, &format!("Incremented values in '{}':", name));
        line(&mut out, format_args!("{:?}", incremented));
    }

    if let (Some(name), Some(value)) = (&config.lookup_column, &config.lookup_value) {
        let row = table.field_with(name, value)?.into_row();
        section(&mut out, &format!("Row with value '{}' in '{}':", value, name));
        line(&mut out, format_args!("{}", show_row(row.as_ref())));
    }

    if let Some(name) = &config.sum_column {
        section(&mut out, &format!("Sum of '{}':", name));
        line(&mut out, format_args!("{:?}", table.field_sum(name)?));
    }

    if let Some(name) = &config.avg_column {
        section(&mut out, &format!("Average of '{}':", name));
        line(&mut out, format_args!("{:?}", table.field_avg(name)?));
    }

    if let Some(name) = &config.list_column {
        section(&mut out, &format!("Values in '{}':", name));
        line(&mut out, format_args!("{:?}", table.column_by_header(name)?));
    }

    if let Some(index) = config.row {
        section(&mut out, &format!("Row {}:", index));
        line(&mut out, format_args!("{}", show_row(table.row_at(index)?.as_ref())));
    }

    section(&mut out, "All rows:");
    for row in table.rows()? {
        line(&mut out, format_args!("{:?}", row));
    }

    if let (Some(name), Some(index)) = (&config.index_column, config.index) {
        let column = table.column_by_header(name)?;
        section(&mut out, &format!("Element {} in '{}':", index, name));
        match column.get(index) {
            Ok(value) => line(&mut out, format_args!("{:?}", value)),
            Err(_) => line(&mut out, format_args!("none")),
        }
    }

    section(&mut out, "Grid values:");
    line(&mut out, format_args!("{:?}", table.values()?));

    Ok(out)
}

fn section(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(title);
    out.push('\n');
}

fn line(out: &mut String, args: std::fmt::Arguments<'_>) {
    // Writing to a String cannot fail.
    let _ = out.write_fmt(args);
    out.push('\n');
}

fn show_row(row: Option<&Row>) -> String {
    match row {
        Some(row) => format!("{:?}", row),
        None => "none".to_string(),
    }
}
