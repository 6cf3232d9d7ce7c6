//! Interaction sessions: selection gestures, cell editing and pointer drags
//!
//! At most one session is active at a time. Every exit goes through
//! [`crate::update::terminate`], which is also the only place pointer
//! listeners are released.

mod reorder;
mod resize;

pub use reorder::{row_at, RowBand, RowDrag};
pub use resize::ColumnResize;

use crate::model::CellCoordinate;

/// A point in the host's pointer coordinate space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

impl PointerButton {
    pub fn is_primary(self) -> bool {
        matches!(self, PointerButton::Primary)
    }
}

/// Which drag holds the global move/up listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragKind {
    ColumnResize,
    RowReorder,
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Termination {
    /// Pointer released at this position
    Release(Point),
    /// Finished without a pointer: editor committed or closed, Shift released
    Complete,
    /// Escape, pointer cancel, or an explicit cancel from the host
    Cancel,
    /// A new session is starting
    Superseded,
    /// The host is tearing the grid down
    Unmount,
}

/// An open cell editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub cell: CellCoordinate,
    /// Editable text of the cell when editing began
    pub original: String,
    /// Character typed to open the editor, replacing the content
    pub seed: Option<char>,
}

impl EditSession {
    pub fn new(cell: CellCoordinate, original: String) -> Self {
        Self {
            cell,
            original,
            seed: None,
        }
    }

    pub fn with_char(cell: CellCoordinate, original: String, ch: char) -> Self {
        Self {
            cell,
            original,
            seed: Some(ch),
        }
    }

    /// Text the host editor should open with
    pub fn initial_text(&self) -> String {
        match self.seed {
            Some(ch) => ch.to_string(),
            None => self.original.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Interaction {
    #[default]
    Idle,
    /// Pointer or Shift+Arrow selection gesture
    Selecting,
    Editing(EditSession),
    ResizingColumn(ColumnResize),
    DraggingRow(RowDrag),
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Interaction::Editing(_))
    }

    pub fn editing_cell(&self) -> Option<&CellCoordinate> {
        match self {
            Interaction::Editing(edit) => Some(&edit.cell),
            _ => None,
        }
    }

    /// Listener kind held by this session, if it is a pointer drag
    pub fn drag_kind(&self) -> Option<DragKind> {
        match self {
            Interaction::ResizingColumn(_) => Some(DragKind::ColumnResize),
            Interaction::DraggingRow(_) => Some(DragKind::RowReorder),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_kind().is_some()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Interaction::Idle => "idle",
            Interaction::Selecting => "selecting",
            Interaction::Editing(_) => "editing",
            Interaction::ResizingColumn(_) => "resizing_column",
            Interaction::DraggingRow(_) => "dragging_row",
        }
    }
}
