//! Update functions for the Elm-style architecture
//!
//! Every input message flows through `update`; table changes leave as
//! `Cmd::Emit` intents and never touch the snapshot directly.

mod edit;
mod keyboard;
mod pointer;

use crate::commands::Cmd;
use crate::drag::{Interaction, Termination};
use crate::messages::GridMsg;
use crate::model::{CellCoordinate, GridModel, TableSnapshot};

#[cfg(debug_assertions)]
use crate::tracing::SelectionSnapshot;
#[cfg(debug_assertions)]
use tracing::{span, Level};

pub use edit::{begin_editing, clear_selection_intents, update_edit};
pub use keyboard::{copy_selection, paste_intents, update_clipboard, update_nav};
pub use pointer::update_pointer;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
#[inline]
pub fn update(model: &mut GridModel, msg: GridMsg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut GridModel, msg: GridMsg) -> Option<Cmd> {
    match msg {
        GridMsg::Nav(m) => keyboard::update_nav(model, m),
        GridMsg::Clipboard(m) => keyboard::update_clipboard(model, m),
        GridMsg::Edit(m) => edit::update_edit(model, m),
        GridMsg::Pointer(m) => pointer::update_pointer(model, m),
        GridMsg::Escape => terminate(model, Termination::Cancel),
        GridMsg::SetSnapshot(table) => set_snapshot(model, table),
        GridMsg::SetRowLayout(bands) => {
            model.row_layout = bands;
            None
        }
        GridMsg::Unmount => terminate(model, Termination::Unmount),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Logs the message and a before/after diff of selection and session state.
/// Pointer moves and layout updates are not logged.
#[cfg(debug_assertions)]
fn update_traced(model: &mut GridModel, msg: GridMsg) -> Option<Cmd> {
    if msg.is_noisy() {
        return update_inner(model, msg);
    }

    let msg_name = msg.name();
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    tracing::debug!(target: "message", msg = %msg_name, "processing");

    let before = SelectionSnapshot::from_model(model);
    let result = update_inner(model, msg);
    let after = SelectionSnapshot::from_model(model);

    if let Some(diff) = before.diff(&after) {
        tracing::debug!(target: "selection", %diff, "state changed");
    }

    result
}

/// End the active session
///
/// This is the only exit path for every session kind. It always releases
/// attached pointer listeners, whatever the reason.
pub fn terminate(model: &mut GridModel, reason: Termination) -> Option<Cmd> {
    let session = std::mem::take(&mut model.interaction);
    let was_active = !session.is_idle();
    let mut cmds = Vec::new();

    match session {
        Interaction::Idle | Interaction::Selecting => {}
        Interaction::Editing(edit) => {
            tracing::debug!(target: "drag", cell = %edit.cell, ?reason, "edit closed");
            model.closed_edit = match reason {
                Termination::Cancel | Termination::Unmount => None,
                _ => Some(edit),
            };
        }
        Interaction::ResizingColumn(resize) => {
            if let Termination::Release(point) = reason {
                let width = resize.width_at(point.x, model.config.min_column_width);
                model.widths.set(resize.column_id.clone(), width);
            }
            tracing::debug!(target: "drag", column = %resize.column_id, ?reason, "resize ended");
        }
        Interaction::DraggingRow(drag) => {
            if let Termination::Release(point) = reason {
                if let Some(intent) = drag.release(&model.table, &model.row_layout, point.y) {
                    cmds.push(Cmd::Emit(intent));
                }
            }
            tracing::debug!(target: "drag", row = %drag.dragged_row_id, ?reason, "reorder ended");
        }
    }

    if model.selection.is_selecting {
        model.selection.end_selection();
    }

    if reason == Termination::Unmount {
        model.closed_edit = None;
    }

    if let Some(kind) = model.listeners.take() {
        cmds.push(Cmd::DetachPointerListeners(kind));
    }

    if was_active {
        cmds.push(Cmd::Redraw);
    }

    match Cmd::batch(cmds) {
        Cmd::None => None,
        cmd => Some(cmd),
    }
}

/// Start a new session, force-terminating whatever was active
pub(crate) fn begin_session(model: &mut GridModel, session: Interaction) -> Option<Cmd> {
    let ended = terminate(model, Termination::Superseded);

    let attach = session.drag_kind().map(|kind| {
        model.listeners = Some(kind);
        Cmd::AttachPointerListeners(kind)
    });

    tracing::debug!(target: "drag", session = session.name(), "session started");
    model.interaction = session;

    Some(Cmd::batch([
        Cmd::from(ended),
        Cmd::from(attach),
        Cmd::Redraw,
    ]))
}

/// Plain focus move: ends an active selection gesture, then collapses the
/// selection onto `coord`
pub(crate) fn focus_to(model: &mut GridModel, coord: Option<CellCoordinate>) -> Option<Cmd> {
    let coord = coord?;
    let ended = if matches!(model.interaction, Interaction::Selecting) {
        terminate(model, Termination::Complete)
    } else {
        None
    };
    model.selection.move_focus(coord);
    Some(Cmd::batch([Cmd::from(ended), Cmd::Redraw]))
}

fn set_snapshot(model: &mut GridModel, table: TableSnapshot) -> Option<Cmd> {
    model.table = table;

    let edited_cell_gone = model
        .interaction
        .editing_cell()
        .is_some_and(|cell| model.table.resolve(cell).is_none());

    if model
        .closed_edit
        .as_ref()
        .is_some_and(|edit| model.table.resolve(&edit.cell).is_none())
    {
        model.closed_edit = None;
    }

    let ended = if edited_cell_gone {
        terminate(model, Termination::Cancel)
    } else {
        None
    };

    Some(Cmd::batch([Cmd::from(ended), Cmd::Redraw]))
}
