//! gridedit - Elm-style table grid editing engine
//!
//! This crate provides the interaction core of an editable table grid:
//! rectangular selection, clipboard, keyboard navigation, cell editing and
//! pointer drags. It renders nothing and never mutates the table; every
//! table change leaves as an [`Intent`] for the host to apply.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod drag;
pub mod engine;
pub mod format;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod navigation;
pub mod selection;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use clipboard::ClipboardSlot;
pub use commands::Cmd;
pub use config::GridConfig;
pub use drag::{Interaction, Point, PointerButton, RowBand, Termination};
pub use engine::GridEngine;
pub use messages::GridMsg;
pub use model::{
    CellCoordinate, CellValue, Column, ColumnId, ColumnType, GridModel, InsertPosition, Intent,
    Row, RowId, TableSnapshot,
};
pub use selection::SelectionState;
