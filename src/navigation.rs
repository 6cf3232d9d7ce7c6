//! Cell navigation over a table snapshot
//!
//! Every function resolves the starting coordinate by id first. A stale or
//! missing start, or a move past the edge of the grid, yields `None` and the
//! caller leaves focus where it is.

use crate::messages::Direction;
use crate::model::{CellCoordinate, TableSnapshot};

/// Adjacent cell in `direction`, without wrapping at the grid edge
pub fn step(
    table: &TableSnapshot,
    from: &CellCoordinate,
    direction: Direction,
) -> Option<CellCoordinate> {
    let (row, col) = table.resolve(from)?;
    let (row, col) = match direction {
        Direction::Up => (row.checked_sub(1)?, col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col.checked_sub(1)?),
        Direction::Right => (row, col + 1),
    };
    table.coordinate_at(row, col)
}

/// Next cell in row-major order (Tab), wrapping to the next row
pub fn next_cell(table: &TableSnapshot, from: &CellCoordinate) -> Option<CellCoordinate> {
    let (row, col) = table.resolve(from)?;
    if col + 1 < table.column_count() {
        table.coordinate_at(row, col + 1)
    } else {
        table.coordinate_at(row + 1, 0)
    }
}

/// Previous cell in row-major order (Shift+Tab), wrapping to the previous row
pub fn prev_cell(table: &TableSnapshot, from: &CellCoordinate) -> Option<CellCoordinate> {
    let (row, col) = table.resolve(from)?;
    if col > 0 {
        table.coordinate_at(row, col - 1)
    } else {
        table.coordinate_at(row.checked_sub(1)?, table.column_count().checked_sub(1)?)
    }
}

/// First column of the current row (Home)
pub fn row_start(table: &TableSnapshot, from: &CellCoordinate) -> Option<CellCoordinate> {
    let (row, _) = table.resolve(from)?;
    table.coordinate_at(row, 0)
}

/// Last column of the current row (End)
pub fn row_end(table: &TableSnapshot, from: &CellCoordinate) -> Option<CellCoordinate> {
    let (row, _) = table.resolve(from)?;
    table.coordinate_at(row, table.column_count().checked_sub(1)?)
}

pub fn first_cell(table: &TableSnapshot) -> Option<CellCoordinate> {
    table.coordinate_at(0, 0)
}

pub fn last_cell(table: &TableSnapshot) -> Option<CellCoordinate> {
    table.coordinate_at(
        table.row_count().checked_sub(1)?,
        table.column_count().checked_sub(1)?,
    )
}
