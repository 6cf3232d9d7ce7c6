//! Message types for the Elm-style architecture
//!
//! All interaction state changes flow through these message types.

use crate::drag::{Point, PointerButton, RowBand};
use crate::model::{CellCoordinate, ColumnId, RowId, TableSnapshot};

/// Direction for focus movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Focus movement and selection messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavMsg {
    /// Move focus to the adjacent cell (Arrow)
    Move(Direction),
    /// Extend the selection to the adjacent cell (Shift+Arrow)
    Extend(Direction),
    /// Row-major next cell (Tab)
    NextCell,
    /// Row-major previous cell (Shift+Tab)
    PrevCell,
    /// First column of the focused row (Home)
    RowStart,
    /// Last column of the focused row (End)
    RowEnd,
    /// Top-left cell (Cmd+Home)
    FirstCell,
    /// Bottom-right cell (Cmd+End)
    LastCell,
    SelectAll,
    /// Shift state seen on a key event; releasing Shift ends a selection
    ShiftState(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMsg {
    Copy,
    Cut,
    Paste,
}

/// Cell editor messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMsg {
    /// Enter: open the editor, or close it when already open
    Toggle,
    /// Open the editor on the focused cell
    Begin,
    /// Open the editor on the focused cell, replacing content with a char
    StartWithChar(char),
    /// Commit the editor text
    Commit(String),
    /// Close the editor, discarding its text
    Cancel,
    /// Clear every selected cell (Delete/Backspace)
    ClearSelection,
}

/// Pointer messages, already hit-tested by the host
#[derive(Debug, Clone, PartialEq)]
pub enum PointerMsg {
    /// Pointer pressed on a cell
    CellDown {
        cell: CellCoordinate,
        button: PointerButton,
        shift: bool,
    },
    /// Pointer entered a cell while pressed
    CellEnter { cell: CellCoordinate },
    /// Pointer pressed on a column's resize handle
    ResizeHandleDown {
        column_id: ColumnId,
        x: f64,
        /// Rendered width of the column at press time
        width: f64,
        button: PointerButton,
    },
    /// Pointer pressed on a row's drag handle
    RowHandleDown {
        row_id: RowId,
        button: PointerButton,
    },
    /// Global pointer move
    Move(Point),
    /// Global pointer release
    Up(Point),
    /// Pointer capture lost
    Cancel,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum GridMsg {
    Nav(NavMsg),
    Clipboard(ClipboardMsg),
    Edit(EditMsg),
    Pointer(PointerMsg),
    /// Escape: close the editor, otherwise end whatever session is active
    Escape,
    /// Next table snapshot from the host
    SetSnapshot(TableSnapshot),
    /// Rendered row extents for reorder hit-testing
    SetRowLayout(Vec<RowBand>),
    /// Host is tearing the grid down
    Unmount,
}

impl GridMsg {
    /// Short name used in update tracing
    pub fn name(&self) -> String {
        match self {
            GridMsg::Nav(m) => format!("Nav::{:?}", m),
            GridMsg::Clipboard(m) => format!("Clipboard::{:?}", m),
            GridMsg::Edit(m) => format!("Edit::{:?}", m),
            GridMsg::Pointer(PointerMsg::Move(_)) => "Pointer::Move".to_string(),
            GridMsg::Pointer(m) => format!("Pointer::{:?}", m),
            GridMsg::Escape => "Escape".to_string(),
            GridMsg::SetSnapshot(t) => {
                format!("SetSnapshot({}x{})", t.row_count(), t.column_count())
            }
            GridMsg::SetRowLayout(b) => format!("SetRowLayout({})", b.len()),
            GridMsg::Unmount => "Unmount".to_string(),
        }
    }

    /// Pointer moves arrive at frame rate and are not logged
    pub fn is_noisy(&self) -> bool {
        matches!(
            self,
            GridMsg::Pointer(PointerMsg::Move(_)) | GridMsg::SetRowLayout(_)
        )
    }
}
