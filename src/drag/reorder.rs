//! Row reorder drag and row hit-testing

use crate::model::{Intent, RowId, TableSnapshot};

/// Vertical extent of a rendered row, supplied by the host
#[derive(Debug, Clone, PartialEq)]
pub struct RowBand {
    pub row_id: RowId,
    pub top: f64,
    pub height: f64,
}

impl RowBand {
    pub fn new(row_id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            row_id: RowId::new(row_id),
            top,
            height,
        }
    }

    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Row whose band contains `y`
pub fn row_at(bands: &[RowBand], y: f64) -> Option<&RowId> {
    bands.iter().find(|band| band.contains(y)).map(|band| &band.row_id)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowDrag {
    pub dragged_row_id: RowId,
    pub dragged_index: usize,
    /// Row currently under the pointer; drives drop-target highlighting only
    pub hover: Option<RowId>,
}

impl RowDrag {
    pub fn begin(dragged_row_id: RowId, dragged_index: usize) -> Self {
        Self {
            dragged_row_id,
            dragged_index,
            hover: None,
        }
    }

    /// Track the row under the pointer; returns true if it changed
    pub fn hover(&mut self, bands: &[RowBand], y: f64) -> bool {
        let hover = row_at(bands, y).cloned();
        if hover == self.hover {
            return false;
        }
        self.hover = hover;
        true
    }

    /// Row to highlight as the drop target
    pub fn drop_target(&self) -> Option<&RowId> {
        self.hover
            .as_ref()
            .filter(|row_id| **row_id != self.dragged_row_id)
    }

    /// Resolve the drop at release time
    ///
    /// Emits a reorder only when a different row that still exists in
    /// `table` is under the pointer.
    pub fn release(&self, table: &TableSnapshot, bands: &[RowBand], y: f64) -> Option<Intent> {
        let target = row_at(bands, y)?;
        if *target == self.dragged_row_id || table.row_index(target).is_none() {
            return None;
        }
        Some(Intent::ReorderRows {
            dragged_row_id: self.dragged_row_id.clone(),
            target_row_id: target.clone(),
        })
    }
}
