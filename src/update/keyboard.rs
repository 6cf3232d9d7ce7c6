//! Keyboard navigation and clipboard handlers
//!
//! Every handler is a no-op when focus is missing or no longer resolves.

use crate::clipboard;
use crate::commands::Cmd;
use crate::drag::{Interaction, Termination};
use crate::messages::{ClipboardMsg, Direction, NavMsg};
use crate::model::{CellCoordinate, GridModel, Intent, TableSnapshot};
use crate::navigation;

use super::{begin_session, edit, focus_to, terminate};

/// Handle focus movement and selection messages
pub fn update_nav(model: &mut GridModel, msg: NavMsg) -> Option<Cmd> {
    match msg {
        NavMsg::Move(direction) => {
            let from = model.focus()?.clone();
            let target = navigation::step(&model.table, &from, direction);
            focus_to(model, target)
        }
        NavMsg::Extend(direction) => extend(model, direction),
        NavMsg::NextCell => tab(model, navigation::next_cell),
        NavMsg::PrevCell => tab(model, navigation::prev_cell),
        NavMsg::RowStart => {
            let from = model.focus()?.clone();
            let target = navigation::row_start(&model.table, &from);
            focus_to(model, target)
        }
        NavMsg::RowEnd => {
            let from = model.focus()?.clone();
            let target = navigation::row_end(&model.table, &from);
            focus_to(model, target)
        }
        NavMsg::FirstCell => {
            let target = navigation::first_cell(&model.table);
            focus_to(model, target)
        }
        NavMsg::LastCell => {
            let target = navigation::last_cell(&model.table);
            focus_to(model, target)
        }
        NavMsg::SelectAll => {
            if model.table.is_empty() {
                return None;
            }
            let ended = end_gesture(model);
            model.selection.select_all(&model.table);
            Some(Cmd::batch([Cmd::from(ended), Cmd::Redraw]))
        }
        NavMsg::ShiftState(held) => {
            if held || !model.selection.is_selecting {
                return None;
            }
            tracing::debug!(target: "selection", "shift released, ending gesture");
            match end_gesture(model) {
                Some(cmd) => Some(cmd),
                None => {
                    model.selection.end_selection();
                    None
                }
            }
        }
    }
}

/// Shift+Arrow: start a gesture at the focus if none is active, then grow it
fn extend(model: &mut GridModel, direction: Direction) -> Option<Cmd> {
    let from = model.selection.focus.clone()?;
    let target = navigation::step(&model.table, &from, direction)?;

    let started = if model.selection.is_selecting {
        None
    } else {
        let cmd = begin_session(model, Interaction::Selecting);
        model.selection.begin_selection(from);
        cmd
    };

    model.selection.extend_selection(target);
    Some(Cmd::batch([Cmd::from(started), Cmd::Redraw]))
}

/// Tab / Shift+Tab: leave the editor, move in row-major order, and always
/// keep the host from moving focus out of the grid
fn tab(
    model: &mut GridModel,
    next: fn(&TableSnapshot, &CellCoordinate) -> Option<CellCoordinate>,
) -> Option<Cmd> {
    let closed = if model.interaction.is_editing() {
        terminate(model, Termination::Complete)
    } else {
        None
    };

    let moved = model
        .focus()
        .cloned()
        .and_then(|from| next(&model.table, &from))
        .and_then(|target| focus_to(model, Some(target)));

    Some(Cmd::batch([
        Cmd::from(closed),
        Cmd::from(moved),
        Cmd::PreventDefault,
    ]))
}

fn end_gesture(model: &mut GridModel) -> Option<Cmd> {
    if matches!(model.interaction, Interaction::Selecting) {
        terminate(model, Termination::Complete)
    } else {
        None
    }
}

/// Handle copy / cut / paste
pub fn update_clipboard(model: &mut GridModel, msg: ClipboardMsg) -> Option<Cmd> {
    match msg {
        ClipboardMsg::Copy => copy(model),
        ClipboardMsg::Cut => {
            let copied = copy(model)?;
            let cleared = edit::clear_selection_intents(model);
            Some(Cmd::batch([copied, Cmd::emit_all(cleared)]))
        }
        ClipboardMsg::Paste => {
            let intents = paste_intents(model);
            if intents.is_empty() {
                return None;
            }
            Some(Cmd::emit_all(intents))
        }
    }
}

fn copy(model: &mut GridModel) -> Option<Cmd> {
    let rect = model.selection.rect(&model.table)?;
    let grid = clipboard::collect(&model.table, &rect);
    model.clipboard = clipboard::serialize(&grid);

    tracing::debug!(
        target: "clipboard",
        rows = rect.row_count(),
        columns = rect.column_count(),
        "copied selection"
    );

    model.clipboard.text().map(Cmd::WriteClipboard)
}

/// `UpdateCell` intents for pasting the clipboard slot at the selection's
/// top-left cell
pub fn paste_intents(model: &GridModel) -> Vec<Intent> {
    let Some(anchor) = model.selection.top_left(&model.table) else {
        return Vec::new();
    };
    clipboard::paste_into(&model.table, &anchor, &model.clipboard)
        .into_iter()
        .map(Intent::from)
        .collect()
}

/// Serialize the selection into the clipboard slot, returning its text
pub fn copy_selection(model: &mut GridModel) -> Option<String> {
    copy(model)?;
    model.clipboard.text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardSlot;
    use crate::config::GridConfig;
    use crate::model::{Column, ColumnType, Row};
    use serde_json::json;

    fn model() -> GridModel {
        let columns = vec![
            Column::new("a", "A", ColumnType::Text),
            Column::new("b", "B", ColumnType::Text),
        ];
        let rows = vec![
            Row::new("r1").with_cell("a", "1").with_cell("b", "x"),
            Row::new("r2").with_cell("a", "2").with_cell("b", "y"),
        ];
        GridModel::new(TableSnapshot::new(columns, rows), GridConfig::default())
    }

    fn at(row: &str, col: &str) -> CellCoordinate {
        CellCoordinate::new(row, col)
    }

    #[test]
    fn test_move_without_focus_is_noop() {
        let mut model = model();
        assert_eq!(update_nav(&mut model, NavMsg::Move(Direction::Down)), None);
    }

    #[test]
    fn test_move_at_edge_is_noop() {
        let mut model = model();
        model.selection.move_focus(at("r1", "a"));
        assert_eq!(update_nav(&mut model, NavMsg::Move(Direction::Up)), None);
        assert_eq!(model.selection.focus, Some(at("r1", "a")));
    }

    #[test]
    fn test_tab_wraps_and_prevents_default() {
        let mut model = model();
        model.selection.move_focus(at("r1", "b"));
        let cmd = update_nav(&mut model, NavMsg::NextCell).unwrap();
        assert!(cmd.prevents_default());
        assert_eq!(model.selection.focus, Some(at("r2", "a")));

        let cmd = update_nav(&mut model, NavMsg::PrevCell).unwrap();
        assert!(cmd.prevents_default());
        assert_eq!(model.selection.focus, Some(at("r1", "b")));
    }

    #[test]
    fn test_tab_past_last_cell_stays() {
        let mut model = model();
        model.selection.move_focus(at("r2", "b"));
        let cmd = update_nav(&mut model, NavMsg::NextCell).unwrap();
        assert_eq!(cmd, Cmd::PreventDefault);
        assert_eq!(model.selection.focus, Some(at("r2", "b")));
    }

    #[test]
    fn test_extend_starts_gesture_at_focus() {
        let mut model = model();
        model.selection.move_focus(at("r1", "a"));
        update_nav(&mut model, NavMsg::Extend(Direction::Right));
        update_nav(&mut model, NavMsg::Extend(Direction::Down));

        assert!(model.selection.is_selecting);
        assert_eq!(model.selection.anchor, Some(at("r1", "a")));
        assert_eq!(model.selection.selected_cells(&model.table).len(), 4);

        update_nav(&mut model, NavMsg::ShiftState(false));
        assert!(!model.selection.is_selecting);
        assert!(model.interaction.is_idle());
        assert_eq!(model.selection.selected_cells(&model.table).len(), 4);
    }

    #[test]
    fn test_copy_single_cell_keeps_raw_value() {
        let mut model = model();
        model.selection.move_focus(at("r2", "b"));
        let cmd = update_clipboard(&mut model, ClipboardMsg::Copy).unwrap();
        assert_eq!(cmd, Cmd::WriteClipboard("y".to_string()));
        assert_eq!(model.clipboard, ClipboardSlot::Single(json!("y")));
    }

    #[test]
    fn test_paste_with_empty_clipboard_is_noop() {
        let mut model = model();
        model.selection.move_focus(at("r1", "a"));
        assert_eq!(update_clipboard(&mut model, ClipboardMsg::Paste), None);
    }

    #[test]
    fn test_cut_copies_then_clears() {
        let mut model = model();
        model.selection.select_all(&model.table);
        let cmd = update_clipboard(&mut model, ClipboardMsg::Cut).unwrap();
        assert_eq!(cmd.clipboard_text(), Some("1,x\n2,y"));
        assert_eq!(cmd.intents().len(), 4);
    }
}
