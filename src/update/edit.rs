//! Cell editing handlers
//!
//! The engine only tracks which cell is being edited and its starting text;
//! the host owns the text field and hands the final text back on commit.

use crate::commands::Cmd;
use crate::drag::{EditSession, Interaction, Termination};
use crate::format;
use crate::messages::EditMsg;
use crate::model::{CellValue, GridModel, Intent};

use super::{begin_session, terminate};

pub fn update_edit(model: &mut GridModel, msg: EditMsg) -> Option<Cmd> {
    match msg {
        EditMsg::Toggle => {
            if model.interaction.is_editing() {
                terminate(model, Termination::Complete)
            } else {
                begin_editing(model, None)
            }
        }
        EditMsg::Begin => {
            if model.interaction.is_editing() {
                return None;
            }
            begin_editing(model, None)
        }
        EditMsg::StartWithChar(ch) => {
            if model.interaction.is_editing() || ch.is_control() {
                return None;
            }
            begin_editing(model, Some(ch))
        }
        EditMsg::Commit(text) => commit(model, text),
        EditMsg::Cancel => {
            if !model.interaction.is_editing() {
                return None;
            }
            terminate(model, Termination::Cancel)
        }
        EditMsg::ClearSelection => {
            if model.interaction.is_editing() {
                return None;
            }
            let intents = clear_selection_intents(model);
            if intents.is_empty() {
                return None;
            }
            Some(Cmd::emit_all(intents))
        }
    }
}

/// Open the editor on the focused cell, optionally seeded with a typed char
pub fn begin_editing(model: &mut GridModel, seed: Option<char>) -> Option<Cmd> {
    let cell = model.focus()?.clone();
    let column_type = model.column_type(&cell.column_id)?;
    let value = model
        .table
        .cell_value(&cell)
        .cloned()
        .unwrap_or(CellValue::Null);
    let original = format::to_editable(&value, column_type);

    let session = match seed {
        Some(ch) => EditSession::with_char(cell, original, ch),
        None => EditSession::new(cell, original),
    };
    begin_session(model, Interaction::Editing(session))
}

/// Commit the host's text for the open editor, or for the editor most
/// recently closed by Enter, Tab or a new session
///
/// Emits an update only when the text changed and the cell still exists.
fn commit(model: &mut GridModel, text: String) -> Option<Cmd> {
    let open = match &model.interaction {
        Interaction::Editing(edit) => Some(edit.clone()),
        _ => None,
    };
    let (edit, closed) = match open {
        Some(edit) => (edit, terminate(model, Termination::Complete)),
        None => (model.closed_edit.take()?, None),
    };
    model.closed_edit = None;

    let update = if text == edit.original || model.table.resolve(&edit.cell).is_none() {
        None
    } else {
        model.column_type(&edit.cell.column_id).map(|column_type| {
            Cmd::Emit(Intent::UpdateCell {
                row_id: edit.cell.row_id.clone(),
                column_id: edit.cell.column_id.clone(),
                value: format::to_stored(&text, column_type),
            })
        })
    };

    match Cmd::batch([Cmd::from(update), Cmd::from(closed)]) {
        Cmd::None => None,
        cmd => Some(cmd),
    }
}

/// Intents blanking every selected cell
pub fn clear_selection_intents(model: &GridModel) -> Vec<Intent> {
    model
        .selection
        .selected_cells(&model.table)
        .into_iter()
        .map(|cell| Intent::UpdateCell {
            row_id: cell.row_id,
            column_id: cell.column_id,
            value: CellValue::String(String::new()),
        })
        .collect()
}
