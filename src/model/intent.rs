//! Intents: descriptions of table changes the host applies
//!
//! Every operation that would change the table returns an [`Intent`] instead
//! of touching the snapshot. [`TableSnapshot::apply`] is a reference applier
//! for embedders that keep their table in the same shape.

use serde::{Deserialize, Serialize};

use super::table::{CellValue, Column, ColumnId, ColumnType, Row, RowId, TableSnapshot};

/// Where to insert relative to an anchor row or column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    Before,
    After,
}

/// A single cell write, as produced by paste and clear operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellUpdate {
    pub row_id: RowId,
    pub column_id: ColumnId,
    pub value: CellValue,
}

impl From<CellUpdate> for Intent {
    fn from(update: CellUpdate) -> Self {
        Intent::UpdateCell {
            row_id: update.row_id,
            column_id: update.column_id,
            value: update.value,
        }
    }
}

/// A requested change to the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    UpdateCell {
        row_id: RowId,
        column_id: ColumnId,
        value: CellValue,
    },
    AddRow {
        position: InsertPosition,
        anchor_row_id: RowId,
        row: Row,
    },
    AddColumn {
        position: InsertPosition,
        anchor_column_id: ColumnId,
        column: Column,
    },
    DeleteRow {
        row_id: RowId,
    },
    /// Row cell maps keep a dangling key for the removed column
    DeleteColumn {
        column_id: ColumnId,
    },
    /// Relabel only; stored values are not reformatted
    UpdateColumnType {
        column_id: ColumnId,
        column_type: ColumnType,
    },
    ReorderRows {
        dragged_row_id: RowId,
        target_row_id: RowId,
    },
    RenameColumn {
        column_id: ColumnId,
        title: String,
    },
    SetColumnOptions {
        column_id: ColumnId,
        options: Vec<String>,
    },
}

impl Intent {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Intent::UpdateCell { .. } => "update_cell",
            Intent::AddRow { .. } => "add_row",
            Intent::AddColumn { .. } => "add_column",
            Intent::DeleteRow { .. } => "delete_row",
            Intent::DeleteColumn { .. } => "delete_column",
            Intent::UpdateColumnType { .. } => "update_column_type",
            Intent::ReorderRows { .. } => "reorder_rows",
            Intent::RenameColumn { .. } => "rename_column",
            Intent::SetColumnOptions { .. } => "set_column_options",
        }
    }
}

fn insert_index(anchor: Option<usize>, position: InsertPosition, len: usize) -> usize {
    match (anchor, position) {
        (Some(idx), InsertPosition::Before) => idx,
        (Some(idx), InsertPosition::After) => idx + 1,
        (None, _) => len,
    }
}

impl TableSnapshot {
    /// Produce the next snapshot with `intent` applied
    ///
    /// Unknown ids never fail: adds with a missing anchor append, deletes and
    /// updates of missing rows or columns leave the table as it was.
    pub fn apply(&self, intent: &Intent) -> TableSnapshot {
        let mut next = self.clone();
        match intent {
            Intent::UpdateCell {
                row_id,
                column_id,
                value,
            } => {
                if let Some(row) = next.rows.iter_mut().find(|r| &r.id == row_id) {
                    row.cells.insert(column_id.clone(), value.clone());
                }
            }
            Intent::AddRow {
                position,
                anchor_row_id,
                row,
            } => {
                let idx = insert_index(self.row_index(anchor_row_id), *position, next.rows.len());
                next.rows.insert(idx, row.clone());
            }
            Intent::AddColumn {
                position,
                anchor_column_id,
                column,
            } => {
                let idx = insert_index(
                    self.column_index(anchor_column_id),
                    *position,
                    next.columns.len(),
                );
                next.columns.insert(idx, column.clone());
            }
            Intent::DeleteRow { row_id } => {
                next.rows.retain(|r| &r.id != row_id);
            }
            Intent::DeleteColumn { column_id } => {
                next.columns.retain(|c| &c.id != column_id);
            }
            Intent::UpdateColumnType {
                column_id,
                column_type,
            } => {
                if let Some(column) = next.columns.iter_mut().find(|c| &c.id == column_id) {
                    column.column_type = *column_type;
                }
            }
            Intent::ReorderRows {
                dragged_row_id,
                target_row_id,
            } => {
                let (Some(from), Some(to)) = (
                    self.row_index(dragged_row_id),
                    self.row_index(target_row_id),
                ) else {
                    return next;
                };
                let row = next.rows.remove(from);
                next.rows.insert(to, row);
            }
            Intent::RenameColumn { column_id, title } => {
                if let Some(column) = next.columns.iter_mut().find(|c| &c.id == column_id) {
                    column.title = title.clone();
                }
            }
            Intent::SetColumnOptions { column_id, options } => {
                if let Some(column) = next.columns.iter_mut().find(|c| &c.id == column_id) {
                    column.options = Some(options.clone());
                }
            }
        }
        next
    }

    /// Apply a sequence of intents in order
    pub fn apply_all<'a>(&self, intents: impl IntoIterator<Item = &'a Intent>) -> TableSnapshot {
        intents
            .into_iter()
            .fold(self.clone(), |table, intent| table.apply(intent))
    }
}
