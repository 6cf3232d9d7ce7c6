//! Grid engine façade
//!
//! `GridEngine` wraps the model, the keymap and the update loop behind the
//! operations a host calls. Table changes are returned as intents; the
//! engine never mutates the snapshot it was given. Apply the intents and
//! hand the result back with `set_snapshot`.

use uuid::Uuid;

use crate::clipboard::ClipboardSlot;
use crate::commands::Cmd;
use crate::config::GridConfig;
use crate::drag::{Interaction, Point, PointerButton, RowBand, Termination};
use crate::keymap::{load_default_keymap, Keymap, Keystroke, Modifiers};
use crate::messages::{EditMsg, GridMsg, NavMsg, PointerMsg};
use crate::model::{
    Alignment, CellAlignments, CellCoordinate, CellValue, Column, ColumnId, ColumnType,
    ColumnWidths, GridModel, InsertPosition, Intent, Row, RowId, TableSnapshot,
};
use crate::selection::SelectionState;
use crate::update;

#[derive(Debug)]
pub struct GridEngine {
    model: GridModel,
    keymap: Keymap,
}

impl GridEngine {
    /// Engine with default config and the built-in keymap only
    pub fn new(table: TableSnapshot) -> Self {
        Self {
            model: GridModel::new(table, GridConfig::default()),
            keymap: Keymap::with_bindings(load_default_keymap(false)),
        }
    }

    /// Engine with `config`, merging the user keymap if it asks for it
    pub fn with_config(table: TableSnapshot, config: GridConfig) -> Self {
        let keymap = Keymap::with_bindings(load_default_keymap(config.load_user_keymap));
        Self {
            model: GridModel::new(table, config),
            keymap,
        }
    }

    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Run one message through the update loop
    pub fn dispatch(&mut self, msg: GridMsg) -> Cmd {
        update::update(&mut self.model, msg).into()
    }

    /// Key pressed
    ///
    /// Releasing Shift ends a selection gesture before the key's own command
    /// runs. While a drag owns the pointer only Escape gets through.
    pub fn key_down(&mut self, keystroke: Keystroke) -> Cmd {
        let shift = self.dispatch(GridMsg::Nav(NavMsg::ShiftState(keystroke.mods.shift())));

        let context = self.model.key_context();
        let Some(command) = self.keymap.lookup_with_context(&keystroke, Some(&context)) else {
            return shift;
        };

        if context.dragging && !command.allowed_while_dragging() {
            tracing::debug!(target: "keymap", %keystroke, ?command, "ignored during drag");
            return shift;
        }

        tracing::debug!(target: "keymap", %keystroke, ?command, "key command");
        let mut cmds = vec![shift];
        for msg in command.to_msgs() {
            cmds.push(self.dispatch(msg));
        }
        Cmd::batch(cmds)
    }

    /// Key released; only the Shift state matters
    pub fn key_up(&mut self, mods: Modifiers) -> Cmd {
        self.dispatch(GridMsg::Nav(NavMsg::ShiftState(mods.shift())))
    }

    /// Printable character typed outside the cell editor: opens the editor
    /// seeded with it
    pub fn text_input(&mut self, ch: char) -> Cmd {
        self.dispatch(GridMsg::Edit(EditMsg::StartWithChar(ch)))
    }

    pub fn cell_down(&mut self, cell: CellCoordinate, button: PointerButton, shift: bool) -> Cmd {
        self.dispatch(GridMsg::Pointer(PointerMsg::CellDown {
            cell,
            button,
            shift,
        }))
    }

    pub fn cell_enter(&mut self, cell: CellCoordinate) -> Cmd {
        self.dispatch(GridMsg::Pointer(PointerMsg::CellEnter { cell }))
    }

    /// Pointer down on a column's resize handle; `width` is the column's
    /// rendered width at that moment
    pub fn resize_handle_down(
        &mut self,
        column_id: ColumnId,
        x: f64,
        width: f64,
        button: PointerButton,
    ) -> Cmd {
        self.dispatch(GridMsg::Pointer(PointerMsg::ResizeHandleDown {
            column_id,
            x,
            width,
            button,
        }))
    }

    pub fn row_handle_down(&mut self, row_id: RowId, button: PointerButton) -> Cmd {
        self.dispatch(GridMsg::Pointer(PointerMsg::RowHandleDown { row_id, button }))
    }

    pub fn pointer_move(&mut self, point: Point) -> Cmd {
        self.dispatch(GridMsg::Pointer(PointerMsg::Move(point)))
    }

    pub fn pointer_up(&mut self, point: Point) -> Cmd {
        self.dispatch(GridMsg::Pointer(PointerMsg::Up(point)))
    }

    pub fn pointer_cancel(&mut self) -> Cmd {
        self.dispatch(GridMsg::Pointer(PointerMsg::Cancel))
    }

    // ------------------------------------------------------------------
    // Table operations
    // ------------------------------------------------------------------

    pub fn update_cell(
        &self,
        row_id: RowId,
        column_id: ColumnId,
        value: impl Into<CellValue>,
    ) -> Intent {
        Intent::UpdateCell {
            row_id,
            column_id,
            value: value.into(),
        }
    }

    /// New row with a fresh id and an empty string in every existing column
    pub fn add_row(&self, position: InsertPosition, anchor_row_id: RowId) -> Intent {
        let mut row = Row::new(Uuid::new_v4().to_string());
        for column in &self.model.table.columns {
            row.cells
                .insert(column.id.clone(), CellValue::String(String::new()));
        }
        Intent::AddRow {
            position,
            anchor_row_id,
            row,
        }
    }

    pub fn add_column(
        &self,
        position: InsertPosition,
        anchor_column_id: ColumnId,
        title: impl Into<String>,
        column_type: ColumnType,
    ) -> Intent {
        Intent::AddColumn {
            position,
            anchor_column_id,
            column: Column::new(Uuid::new_v4().to_string(), title, column_type),
        }
    }

    pub fn delete_row(&self, row_id: RowId) -> Intent {
        Intent::DeleteRow { row_id }
    }

    pub fn delete_column(&self, column_id: ColumnId) -> Intent {
        Intent::DeleteColumn { column_id }
    }

    pub fn update_column_type(&self, column_id: ColumnId, column_type: ColumnType) -> Intent {
        Intent::UpdateColumnType {
            column_id,
            column_type,
        }
    }

    pub fn reorder_rows(&self, dragged_row_id: RowId, target_row_id: RowId) -> Intent {
        Intent::ReorderRows {
            dragged_row_id,
            target_row_id,
        }
    }

    pub fn rename_column(&self, column_id: ColumnId, title: impl Into<String>) -> Intent {
        Intent::RenameColumn {
            column_id,
            title: title.into(),
        }
    }

    pub fn set_column_options(&self, column_id: ColumnId, options: Vec<String>) -> Intent {
        Intent::SetColumnOptions { column_id, options }
    }

    // ------------------------------------------------------------------
    // Presentation
    // ------------------------------------------------------------------

    pub fn set_alignment(&mut self, cell: &CellCoordinate, alignment: Alignment) {
        self.model.alignments.set(cell, alignment);
    }

    /// Apply `alignment` to every selected cell; returns how many changed
    pub fn align_selection(&mut self, alignment: Alignment) -> usize {
        let cells = self.model.selection.selected_cells(&self.model.table);
        let mut changed = 0;
        for cell in &cells {
            if self.model.alignments.get(cell) != alignment {
                self.model.alignments.set(cell, alignment);
                changed += 1;
            }
        }
        changed
    }

    pub fn set_column_width(&mut self, column_id: ColumnId, width: f64) {
        self.model
            .widths
            .set(column_id, width.max(self.model.config.min_column_width));
    }

    // ------------------------------------------------------------------
    // Clipboard
    // ------------------------------------------------------------------

    /// Copy the selection into the clipboard slot; returns the text to
    /// mirror to the system clipboard
    pub fn copy_selection(&mut self) -> Option<String> {
        update::copy_selection(&mut self.model)
    }

    /// Intents for pasting the clipboard slot at the selection's top-left
    pub fn paste_selection(&self) -> Vec<Intent> {
        update::paste_intents(&self.model)
    }

    /// Replace the slot with text from the system clipboard
    ///
    /// One trailing line break, as spreadsheet apps append, is dropped so it
    /// does not paste as an extra empty row.
    pub fn load_clipboard_text(&mut self, text: impl Into<String>) {
        let mut text = text.into();
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        self.model.clipboard = ClipboardSlot::Multi(text);
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Open the editor on the focused cell, returning its starting text
    pub fn begin_editing(&mut self) -> Option<String> {
        self.dispatch(GridMsg::Edit(EditMsg::Begin));
        self.edit_text()
    }

    /// Commit `text` for the open editor, or for the editor that Enter, Tab
    /// or a click elsewhere just closed; yields an update if the text changed
    pub fn commit_edit(&mut self, text: impl Into<String>) -> Option<Intent> {
        self.dispatch(GridMsg::Edit(EditMsg::Commit(text.into())))
            .into_intents()
            .into_iter()
            .next()
    }

    pub fn cancel_edit(&mut self) -> Cmd {
        self.dispatch(GridMsg::Edit(EditMsg::Cancel))
    }

    /// Text the open editor should start with
    pub fn edit_text(&self) -> Option<String> {
        match &self.model.interaction {
            Interaction::Editing(edit) => Some(edit.initial_text()),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    pub fn set_snapshot(&mut self, table: TableSnapshot) -> Cmd {
        self.dispatch(GridMsg::SetSnapshot(table))
    }

    /// Apply intents with the reference applier and adopt the result
    pub fn apply_intents<'a>(&mut self, intents: impl IntoIterator<Item = &'a Intent>) -> Cmd {
        let next = self.model.table.apply_all(intents);
        self.set_snapshot(next)
    }

    /// Rendered row extents, top to bottom, for reorder hit-testing
    pub fn set_row_layout(&mut self, bands: Vec<RowBand>) {
        self.dispatch(GridMsg::SetRowLayout(bands));
    }

    pub fn terminate(&mut self, reason: Termination) -> Cmd {
        update::terminate(&mut self.model, reason).into()
    }

    /// Host is tearing the grid down; cancels any session and releases
    /// pointer listeners
    pub fn unmount(&mut self) -> Cmd {
        self.dispatch(GridMsg::Unmount)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn model(&self) -> &GridModel {
        &self.model
    }

    pub fn table(&self) -> &TableSnapshot {
        &self.model.table
    }

    pub fn selection(&self) -> &SelectionState {
        &self.model.selection
    }

    pub fn selected_cells(&self) -> Vec<CellCoordinate> {
        self.model.selection.selected_cells(&self.model.table)
    }

    pub fn is_selected(&self, cell: &CellCoordinate) -> bool {
        self.model.selection.is_selected(&self.model.table, cell)
    }

    pub fn focus(&self) -> Option<&CellCoordinate> {
        self.model.focus()
    }

    pub fn interaction(&self) -> &Interaction {
        &self.model.interaction
    }

    pub fn clipboard(&self) -> &ClipboardSlot {
        &self.model.clipboard
    }

    pub fn widths(&self) -> &ColumnWidths {
        &self.model.widths
    }

    pub fn alignments(&self) -> &CellAlignments {
        &self.model.alignments
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn config(&self) -> &GridConfig {
        &self.model.config
    }

    /// Row currently highlighted as a reorder drop target
    pub fn drop_target(&self) -> Option<&RowId> {
        match &self.model.interaction {
            Interaction::DraggingRow(drag) => drag.drop_target(),
            _ => None,
        }
    }

    pub fn has_listeners(&self) -> bool {
        self.model.listeners.is_some()
    }
}

impl Drop for GridEngine {
    fn drop(&mut self) {
        if let Some(kind) = self.model.listeners {
            tracing::warn!(
                target: "drag",
                ?kind,
                "grid engine dropped with pointer listeners attached; call unmount() first"
            );
        }
    }
}
