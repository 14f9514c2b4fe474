//! Name-based field access.
//!
//! A field name is resolved in a fixed order: an exact normalized header
//! first, then a `_sum`/`_avg` suffix over a known header, otherwise unknown.

use super::aggregate::Aggregate;
use super::filter::normalize_header;
use super::{Column, Row, Table};
use crate::error::{Result, SheetError};

/// What a field name resolves to. Column indices are 0-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Accessor {
    /// Header match without a value: the whole column.
    ColumnAccess { column: usize },
    /// Header match with a value: first row whose cell equals `value`.
    RowLookup { column: usize, value: String },
    /// Aggregation suffix over a known header.
    Aggregation { column: usize, kind: Aggregate },
    Unknown { name: String },
}

/// Result of a dispatched field access.
#[derive(Debug)]
pub enum FieldValue {
    Column(Column),
    Row(Option<Row>),
    Number(f64),
}

impl FieldValue {
    pub fn into_column(self) -> Option<Column> {
        match self {
            FieldValue::Column(column) => Some(column),
            _ => None,
        }
    }

    pub fn into_row(self) -> Option<Row> {
        match self {
            FieldValue::Row(row) => row,
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl Table {
    /// Resolve a field name without touching grid data.
    pub fn resolve(&self, name: &str, match_value: Option<&str>) -> Accessor {
        let normalized = normalize_header(name);

        if let Some(&idx) = self.headers.get(&normalized) {
            let column = idx - 1;
            return match match_value {
                Some(value) => Accessor::RowLookup {
                    column,
                    value: value.to_string(),
                },
                None => Accessor::ColumnAccess { column },
            };
        }

        if let Some((base, kind)) = Aggregate::split(&normalized) {
            if let Some(&idx) = self.headers.get(base) {
                return Accessor::Aggregation {
                    column: idx - 1,
                    kind,
                };
            }
        }

        Accessor::Unknown { name: normalized }
    }

    /// Resolve and evaluate a field name. Aggregations ignore `match_value`.
    pub fn dispatch(&self, name: &str, match_value: Option<&str>) -> Result<FieldValue> {
        match self.resolve(name, match_value) {
            Accessor::ColumnAccess { column } => {
                Ok(FieldValue::Column(Column::new(self.grid.clone(), column)?))
            }
            Accessor::RowLookup { column, value } => {
                Ok(FieldValue::Row(self.find_row(column, &value)?))
            }
            Accessor::Aggregation { column, kind } => {
                let values = Column::new(self.grid.clone(), column)?;
                Ok(FieldValue::Number(values.aggregate(kind)))
            }
            Accessor::Unknown { name } => Err(SheetError::UnknownAccessor { name }),
        }
    }

    /// Field access with no argument: a column, or a number for `_sum`/`_avg` names.
    pub fn field(&self, name: &str) -> Result<FieldValue> {
        self.dispatch(name, None)
    }

    /// Field access with a value to match in that column.
    pub fn field_with(&self, name: &str, value: &str) -> Result<FieldValue> {
        self.dispatch(name, Some(value))
    }

    /// Sum of a column's numeric values.
    pub fn field_sum(&self, name: &str) -> Result<f64> {
        self.aggregate(name, Aggregate::Sum)
    }

    /// Average of a column's numeric values, 0 for an empty column.
    pub fn field_avg(&self, name: &str) -> Result<f64> {
        self.aggregate(name, Aggregate::Avg)
    }

    fn aggregate(&self, name: &str, kind: Aggregate) -> Result<f64> {
        let Some(idx) = self.header_index(name) else {
            return Err(SheetError::UnknownAccessor {
                name: format!("{}{}", normalize_header(name), kind.suffix()),
            });
        };
        Ok(Column::new(self.grid.clone(), idx - 1)?.aggregate(kind))
    }
}
