//! Presentation state owned by the engine: column widths and cell alignment
//!
//! Neither map is part of the table snapshot and neither is persisted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::table::{CellCoordinate, ColumnId};

/// Sparse column width map; absent entries render at automatic width
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnWidths {
    widths: HashMap<ColumnId, f64>,
}

impl ColumnWidths {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column_id: &ColumnId) -> Option<f64> {
        self.widths.get(column_id).copied()
    }

    /// Width to use when a drag starts on a column with no explicit width
    pub fn get_or(&self, column_id: &ColumnId, fallback: f64) -> f64 {
        self.get(column_id).unwrap_or(fallback)
    }

    pub fn set(&mut self, column_id: ColumnId, width: f64) {
        self.widths.insert(column_id, width);
    }

    pub fn clear(&mut self, column_id: &ColumnId) {
        self.widths.remove(column_id);
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Sparse per-cell alignment, keyed by `"rowId:columnId"`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellAlignments {
    alignments: HashMap<String, Alignment>,
}

impl CellAlignments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(coord: &CellCoordinate) -> String {
        coord.to_string()
    }

    /// Alignment for a cell, defaulting to left
    pub fn get(&self, coord: &CellCoordinate) -> Alignment {
        self.alignments
            .get(&Self::key(coord))
            .copied()
            .unwrap_or_default()
    }

    /// Set alignment; setting `Left` drops the entry to keep the map sparse
    pub fn set(&mut self, coord: &CellCoordinate, alignment: Alignment) {
        let key = Self::key(coord);
        if alignment == Alignment::Left {
            self.alignments.remove(&key);
        } else {
            self.alignments.insert(key, alignment);
        }
    }

    pub fn len(&self) -> usize {
        self.alignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alignments.is_empty()
    }
}
