//! Selection and focus
//!
//! Only the anchor and focus coordinates are stored. The rectangle between
//! them is resolved against the current snapshot on every query, so a row or
//! column deleted underneath a selection empties it instead of leaving stale
//! indices behind.

use crate::model::{CellCoordinate, TableSnapshot};

/// Inclusive rectangle of row/column indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRect {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl CellRect {
    /// Normalized rectangle spanning two index pairs in any order
    pub fn spanning(a: (usize, usize), b: (usize, usize)) -> Self {
        Self {
            top: a.0.min(b.0),
            left: a.1.min(b.1),
            bottom: a.0.max(b.0),
            right: a.1.max(b.1),
        }
    }

    pub fn row_count(&self) -> usize {
        self.bottom - self.top + 1
    }

    pub fn column_count(&self) -> usize {
        self.right - self.left + 1
    }

    pub fn cell_count(&self) -> usize {
        self.row_count() * self.column_count()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.top..=self.bottom).contains(&row) && (self.left..=self.right).contains(&col)
    }

    pub fn is_single_cell(&self) -> bool {
        self.top == self.bottom && self.left == self.right
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Where the current selection gesture began
    pub anchor: Option<CellCoordinate>,
    /// Keyboard focus and the moving end of the selection
    pub focus: Option<CellCoordinate>,
    /// A selection gesture is in progress
    pub is_selecting: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_selection(&mut self, coord: CellCoordinate) {
        self.anchor = Some(coord.clone());
        self.focus = Some(coord);
        self.is_selecting = true;
    }

    /// Move the focus end of an in-progress selection; no-op otherwise
    pub fn extend_selection(&mut self, coord: CellCoordinate) {
        if !self.is_selecting {
            return;
        }
        self.focus = Some(coord);
    }

    /// End the gesture; the anchor is kept
    pub fn end_selection(&mut self) {
        self.is_selecting = false;
    }

    /// Plain navigation: focus moves and the selection collapses onto it
    pub fn move_focus(&mut self, coord: CellCoordinate) {
        self.anchor = Some(coord.clone());
        self.focus = Some(coord);
    }

    /// Select the whole table, anchored at the top-left cell
    pub fn select_all(&mut self, table: &TableSnapshot) {
        let (Some(first), Some(last)) = (
            table.coordinate_at(0, 0),
            table.coordinate_at(
                table.row_count().saturating_sub(1),
                table.column_count().saturating_sub(1),
            ),
        ) else {
            return;
        };
        self.anchor = Some(first);
        self.focus = Some(last);
        self.is_selecting = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Focus resolved against `table`, or `None` when missing or stale
    pub fn resolved_focus(&self, table: &TableSnapshot) -> Option<(usize, usize)> {
        table.resolve(self.focus.as_ref()?)
    }

    /// Rectangle between anchor and focus in `table`
    ///
    /// Without an anchor the rectangle is the focus cell alone. If either
    /// endpoint fails to resolve the selection is empty.
    pub fn rect(&self, table: &TableSnapshot) -> Option<CellRect> {
        let focus = table.resolve(self.focus.as_ref()?)?;
        let anchor = match &self.anchor {
            Some(anchor) => table.resolve(anchor)?,
            None => focus,
        };
        Some(CellRect::spanning(anchor, focus))
    }

    /// Every selected coordinate, row-major
    pub fn selected_cells(&self, table: &TableSnapshot) -> Vec<CellCoordinate> {
        let Some(rect) = self.rect(table) else {
            return Vec::new();
        };
        (rect.top..=rect.bottom)
            .flat_map(|row| (rect.left..=rect.right).map(move |col| (row, col)))
            .filter_map(|(row, col)| table.coordinate_at(row, col))
            .collect()
    }

    pub fn is_selected(&self, table: &TableSnapshot, coord: &CellCoordinate) -> bool {
        match (self.rect(table), table.resolve(coord)) {
            (Some(rect), Some((row, col))) => rect.contains(row, col),
            _ => false,
        }
    }

    pub fn top_left(&self, table: &TableSnapshot) -> Option<CellCoordinate> {
        let rect = self.rect(table)?;
        table.coordinate_at(rect.top, rect.left)
    }
}
