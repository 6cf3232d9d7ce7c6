//! Table snapshot types
//!
//! The engine never mutates a snapshot. Every change is expressed as an
//! [`Intent`](super::Intent) that the embedding application applies before
//! handing the next snapshot back.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw, untyped cell value as stored by the host
pub type CellValue = serde_json::Value;

/// Stable identifier of a row
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub String);

/// Stable identifier of a column
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(pub String);

impl RowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Column value type
///
/// Closed set: all type-dependent behavior dispatches through
/// [`crate::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    #[default]
    Text,
    Number,
    Select,
    Date,
}

impl ColumnType {
    /// Every column type, in the order a type picker shows them
    pub const ALL: [ColumnType; 4] = [
        ColumnType::Text,
        ColumnType::Number,
        ColumnType::Select,
        ColumnType::Date,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Number => "number",
            ColumnType::Select => "select",
            ColumnType::Date => "date",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(rename = "type", default)]
    pub column_type: ColumnType,
    /// Choices for `select` columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            id: ColumnId::new(id),
            title: title.into(),
            column_type,
            options: None,
        }
    }

    /// Builder: attach select options
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = Some(options);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    /// May miss keys for existing columns, and may hold keys for deleted ones
    #[serde(default)]
    pub cells: HashMap<ColumnId, CellValue>,
}

impl Row {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: RowId::new(id),
            cells: HashMap::new(),
        }
    }

    /// Builder: set a cell value
    pub fn with_cell(mut self, column_id: &str, value: impl Into<CellValue>) -> Self {
        self.cells.insert(ColumnId::from(column_id), value.into());
        self
    }

    pub fn get(&self, column_id: &ColumnId) -> Option<&CellValue> {
        self.cells.get(column_id)
    }
}

/// Address of a single cell, by identity rather than position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoordinate {
    pub row_id: RowId,
    pub column_id: ColumnId,
}

impl CellCoordinate {
    pub fn new(row_id: impl Into<String>, column_id: impl Into<String>) -> Self {
        Self {
            row_id: RowId::new(row_id),
            column_id: ColumnId::new(column_id),
        }
    }
}

impl fmt::Display for CellCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row_id, self.column_id)
    }
}

/// Immutable table state supplied for one round of interaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl TableSnapshot {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    pub fn row_index(&self, row_id: &RowId) -> Option<usize> {
        self.rows.iter().position(|r| &r.id == row_id)
    }

    pub fn column_index(&self, column_id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == column_id)
    }

    pub fn row(&self, row_id: &RowId) -> Option<&Row> {
        self.rows.iter().find(|r| &r.id == row_id)
    }

    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == column_id)
    }

    /// Resolve a coordinate to `(row_index, column_index)`
    ///
    /// Returns `None` when either the row or the column is gone.
    pub fn resolve(&self, coord: &CellCoordinate) -> Option<(usize, usize)> {
        Some((
            self.row_index(&coord.row_id)?,
            self.column_index(&coord.column_id)?,
        ))
    }

    /// Build the coordinate at the given indices, if both are in range
    pub fn coordinate_at(&self, row: usize, col: usize) -> Option<CellCoordinate> {
        let row = self.rows.get(row)?;
        let column = self.columns.get(col)?;
        Some(CellCoordinate {
            row_id: row.id.clone(),
            column_id: column.id.clone(),
        })
    }

    /// Raw value of a cell; missing keys read as `None`
    pub fn cell_value(&self, coord: &CellCoordinate) -> Option<&CellValue> {
        self.row(&coord.row_id)?.get(&coord.column_id)
    }

    /// Raw value at indices, with missing cells read as `Null`
    pub fn value_at(&self, row: usize, col: usize) -> CellValue {
        let (Some(row), Some(column)) = (self.rows.get(row), self.columns.get(col)) else {
            return CellValue::Null;
        };
        row.get(&column.id).cloned().unwrap_or(CellValue::Null)
    }
}
