//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use gridedit::drag::{Point, PointerButton, RowBand};
use gridedit::keymap::{KeyCode, Keystroke, Modifiers};
use gridedit::model::{CellCoordinate, Column, ColumnType, Row, TableSnapshot};
use gridedit::GridEngine;

/// `rows` x `cols` text table with ids `r0..` / `c0..` and values `"r{i}c{j}"`
pub fn test_table(rows: usize, cols: usize) -> TableSnapshot {
    let columns = (0..cols)
        .map(|j| Column::new(format!("c{}", j), format!("Col {}", j), ColumnType::Text))
        .collect();
    let rows = (0..rows)
        .map(|i| {
            (0..cols).fold(Row::new(format!("r{}", i)), |row, j| {
                row.with_cell(&format!("c{}", j), format!("r{}c{}", i, j))
            })
        })
        .collect();
    TableSnapshot::new(columns, rows)
}

/// Engine over `test_table(rows, cols)` with row bands 20px tall
pub fn test_engine(rows: usize, cols: usize) -> GridEngine {
    let mut engine = GridEngine::new(test_table(rows, cols));
    engine.set_row_layout(uniform_bands(engine.table(), 20.0));
    engine
}

pub fn uniform_bands(table: &TableSnapshot, height: f64) -> Vec<RowBand> {
    table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| RowBand::new(row.id.as_str(), i as f64 * height, height))
        .collect()
}

pub fn at(row: usize, col: usize) -> CellCoordinate {
    CellCoordinate::new(format!("r{}", row), format!("c{}", col))
}

/// Press and release on a cell
pub fn click(engine: &mut GridEngine, cell: CellCoordinate) {
    engine.cell_down(cell, PointerButton::Primary, false);
    engine.pointer_up(Point::default());
}

pub fn key(code: KeyCode) -> Keystroke {
    Keystroke::key(code)
}

pub fn shift(code: KeyCode) -> Keystroke {
    Keystroke::new(code, Modifiers::SHIFT)
}

pub fn cmd(ch: char) -> Keystroke {
    Keystroke::new(KeyCode::Char(ch), Modifiers::cmd())
}
