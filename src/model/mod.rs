//! Grid model - the complete state of one grid instance
//!
//! The table snapshot is owned by the host and re-supplied after every
//! applied intent; everything else here is transient interaction state.

pub mod intent;
pub mod presentation;
pub mod table;

pub use intent::{CellUpdate, InsertPosition, Intent};
pub use presentation::{Alignment, CellAlignments, ColumnWidths};
pub use table::{CellCoordinate, CellValue, Column, ColumnId, ColumnType, Row, RowId, TableSnapshot};

use crate::clipboard::ClipboardSlot;
use crate::config::GridConfig;
use crate::drag::{DragKind, EditSession, Interaction, RowBand};
use crate::keymap::KeyContext;
use crate::selection::SelectionState;

#[derive(Debug, Clone)]
pub struct GridModel {
    /// Latest snapshot supplied by the host
    pub table: TableSnapshot,
    pub selection: SelectionState,
    /// The single active interaction session
    pub interaction: Interaction,
    /// Editor closed by Enter, Tab or a new session before the host
    /// committed; a trailing commit still lands on its cell
    pub closed_edit: Option<EditSession>,
    pub clipboard: ClipboardSlot,
    pub widths: ColumnWidths,
    pub alignments: CellAlignments,
    /// Rendered row extents for reorder hit-testing, top to bottom
    pub row_layout: Vec<RowBand>,
    /// Pointer listeners currently attached for a drag session
    pub listeners: Option<DragKind>,
    pub config: GridConfig,
}

impl GridModel {
    pub fn new(table: TableSnapshot, config: GridConfig) -> Self {
        Self {
            table,
            selection: SelectionState::new(),
            interaction: Interaction::Idle,
            closed_edit: None,
            clipboard: ClipboardSlot::Empty,
            widths: ColumnWidths::new(),
            alignments: CellAlignments::new(),
            row_layout: Vec::new(),
            listeners: None,
            config,
        }
    }

    /// State the keymap conditions are evaluated against
    pub fn key_context(&self) -> KeyContext {
        KeyContext {
            editing: self.interaction.is_editing(),
            selecting: self.selection.is_selecting,
            dragging: self.interaction.is_dragging(),
        }
    }

    /// Focused cell, if it still resolves in the current snapshot
    pub fn focus(&self) -> Option<&CellCoordinate> {
        self.selection
            .focus
            .as_ref()
            .filter(|coord| self.table.resolve(coord).is_some())
    }

    pub fn column_type(&self, column_id: &ColumnId) -> Option<ColumnType> {
        self.table.column(column_id).map(|c| c.column_type)
    }
}
