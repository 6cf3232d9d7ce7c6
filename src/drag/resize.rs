//! Column resize drag

use crate::model::ColumnId;

/// Live column resize, captured on pointer-down over a resize handle
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnResize {
    pub column_id: ColumnId,
    /// Pointer x when the drag began
    pub start_x: f64,
    /// Column width when the drag began
    pub start_width: f64,
}

impl ColumnResize {
    pub fn begin(column_id: ColumnId, start_x: f64, start_width: f64) -> Self {
        Self {
            column_id,
            start_x,
            start_width,
        }
    }

    /// Width for the pointer at `x`, never below `min_width`
    pub fn width_at(&self, x: f64, min_width: f64) -> f64 {
        (self.start_width + (x - self.start_x)).max(min_width)
    }
}
