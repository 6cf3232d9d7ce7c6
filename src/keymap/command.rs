//! Command enum representing every bindable grid action
//!
//! Commands are the bridge between keybindings and the message system.
//! Each command maps to one or more `GridMsg` values for the update loop.

use crate::messages::{ClipboardMsg, Direction, EditMsg, GridMsg, NavMsg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Focus movement
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    NextCell,
    PrevCell,
    RowStart,
    RowEnd,
    FirstCell,
    LastCell,

    // Selection
    ExtendUp,
    ExtendDown,
    ExtendLeft,
    ExtendRight,
    SelectAll,

    // Clipboard
    Copy,
    Cut,
    Paste,

    // Editing
    ToggleEdit,
    ClearCells,

    /// Close the editor, otherwise end the active session
    Escape,
    /// Explicitly unbound - disables a default binding
    Unbound,
}

impl Command {
    /// Every command, in display order
    pub const ALL: &'static [Command] = &[
        Command::MoveUp,
        Command::MoveDown,
        Command::MoveLeft,
        Command::MoveRight,
        Command::NextCell,
        Command::PrevCell,
        Command::RowStart,
        Command::RowEnd,
        Command::FirstCell,
        Command::LastCell,
        Command::ExtendUp,
        Command::ExtendDown,
        Command::ExtendLeft,
        Command::ExtendRight,
        Command::SelectAll,
        Command::Copy,
        Command::Cut,
        Command::Paste,
        Command::ToggleEdit,
        Command::ClearCells,
        Command::Escape,
        Command::Unbound,
    ];

    /// Convert this command to messages for the update loop
    pub fn to_msgs(self) -> Vec<GridMsg> {
        use Command::*;

        let msg = match self {
            MoveUp => GridMsg::Nav(NavMsg::Move(Direction::Up)),
            MoveDown => GridMsg::Nav(NavMsg::Move(Direction::Down)),
            MoveLeft => GridMsg::Nav(NavMsg::Move(Direction::Left)),
            MoveRight => GridMsg::Nav(NavMsg::Move(Direction::Right)),
            NextCell => GridMsg::Nav(NavMsg::NextCell),
            PrevCell => GridMsg::Nav(NavMsg::PrevCell),
            RowStart => GridMsg::Nav(NavMsg::RowStart),
            RowEnd => GridMsg::Nav(NavMsg::RowEnd),
            FirstCell => GridMsg::Nav(NavMsg::FirstCell),
            LastCell => GridMsg::Nav(NavMsg::LastCell),

            ExtendUp => GridMsg::Nav(NavMsg::Extend(Direction::Up)),
            ExtendDown => GridMsg::Nav(NavMsg::Extend(Direction::Down)),
            ExtendLeft => GridMsg::Nav(NavMsg::Extend(Direction::Left)),
            ExtendRight => GridMsg::Nav(NavMsg::Extend(Direction::Right)),
            SelectAll => GridMsg::Nav(NavMsg::SelectAll),

            Copy => GridMsg::Clipboard(ClipboardMsg::Copy),
            Cut => GridMsg::Clipboard(ClipboardMsg::Cut),
            Paste => GridMsg::Clipboard(ClipboardMsg::Paste),

            ToggleEdit => GridMsg::Edit(EditMsg::Toggle),
            ClearCells => GridMsg::Edit(EditMsg::ClearSelection),

            Escape => GridMsg::Escape,
            Unbound => return vec![],
        };
        vec![msg]
    }

    /// Only Escape reaches the grid while a pointer drag owns input
    pub fn allowed_while_dragging(self) -> bool {
        matches!(self, Command::Escape)
    }

    pub fn display_name(self) -> &'static str {
        use Command::*;

        match self {
            MoveUp => "Move Up",
            MoveDown => "Move Down",
            MoveLeft => "Move Left",
            MoveRight => "Move Right",
            NextCell => "Next Cell",
            PrevCell => "Previous Cell",
            RowStart => "Start of Row",
            RowEnd => "End of Row",
            FirstCell => "First Cell",
            LastCell => "Last Cell",
            ExtendUp => "Extend Selection Up",
            ExtendDown => "Extend Selection Down",
            ExtendLeft => "Extend Selection Left",
            ExtendRight => "Extend Selection Right",
            SelectAll => "Select All",
            Copy => "Copy",
            Cut => "Cut",
            Paste => "Paste",
            ToggleEdit => "Edit Cell",
            ClearCells => "Clear Cells",
            Escape => "Escape",
            Unbound => "Unbound",
        }
    }
}
