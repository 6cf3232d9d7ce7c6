//! Pointer handlers: mouse selection, column resize and row reorder drags

use crate::commands::Cmd;
use crate::drag::{ColumnResize, Interaction, Point, RowDrag, Termination};
use crate::messages::PointerMsg;
use crate::model::GridModel;

use super::{begin_session, terminate};

pub fn update_pointer(model: &mut GridModel, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::CellDown {
            cell,
            button,
            shift,
        } => {
            if !button.is_primary() || model.table.resolve(&cell).is_none() {
                return None;
            }
            // Clicks inside the open editor belong to the host's text field
            if model.interaction.editing_cell() == Some(&cell) {
                return None;
            }

            let anchor = model
                .selection
                .anchor
                .clone()
                .filter(|anchor| shift && model.table.resolve(anchor).is_some());

            let started = begin_session(model, Interaction::Selecting);
            match anchor {
                Some(anchor) => {
                    model.selection.begin_selection(anchor);
                    model.selection.extend_selection(cell);
                }
                None => model.selection.begin_selection(cell),
            }
            started
        }

        PointerMsg::CellEnter { cell } => {
            if !matches!(model.interaction, Interaction::Selecting)
                || model.table.resolve(&cell).is_none()
                || model.selection.focus.as_ref() == Some(&cell)
            {
                return None;
            }
            model.selection.extend_selection(cell);
            Some(Cmd::Redraw)
        }

        PointerMsg::ResizeHandleDown {
            column_id,
            x,
            width,
            button,
        } => {
            if !button.is_primary() || model.table.column_index(&column_id).is_none() {
                return None;
            }
            begin_session(
                model,
                Interaction::ResizingColumn(ColumnResize::begin(column_id, x, width)),
            )
        }

        PointerMsg::RowHandleDown { row_id, button } => {
            if !button.is_primary() {
                return None;
            }
            let index = model.table.row_index(&row_id)?;
            begin_session(model, Interaction::DraggingRow(RowDrag::begin(row_id, index)))
        }

        PointerMsg::Move(point) => pointer_move(model, point),

        PointerMsg::Up(point) => {
            if model.interaction.is_dragging() {
                terminate(model, Termination::Release(point))
            } else if matches!(model.interaction, Interaction::Selecting) {
                terminate(model, Termination::Complete)
            } else {
                None
            }
        }

        PointerMsg::Cancel => {
            if model.interaction.is_dragging()
                || matches!(model.interaction, Interaction::Selecting)
            {
                terminate(model, Termination::Cancel)
            } else {
                None
            }
        }
    }
}

fn pointer_move(model: &mut GridModel, point: Point) -> Option<Cmd> {
    match &mut model.interaction {
        Interaction::ResizingColumn(resize) => {
            let width = resize.width_at(point.x, model.config.min_column_width);
            if model.widths.get(&resize.column_id) == Some(width) {
                return None;
            }
            model.widths.set(resize.column_id.clone(), width);
            Some(Cmd::Redraw)
        }
        Interaction::DraggingRow(drag) => {
            if drag.hover(&model.row_layout, point.y) {
                tracing::trace!(target: "drag", hover = ?drag.drop_target(), "drop target");
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::drag::{DragKind, PointerButton, RowBand};
    use crate::model::{CellCoordinate, Column, ColumnId, ColumnType, Row, RowId, TableSnapshot};

    fn model() -> GridModel {
        let table = TableSnapshot::new(
            vec![
                Column::new("a", "A", ColumnType::Text),
                Column::new("b", "B", ColumnType::Number),
            ],
            vec![Row::new("r1"), Row::new("r2"), Row::new("r3")],
        );
        let mut model = GridModel::new(table, GridConfig::default());
        model.row_layout = vec![
            RowBand::new("r1", 0.0, 30.0),
            RowBand::new("r2", 30.0, 30.0),
            RowBand::new("r3", 60.0, 30.0),
        ];
        model
    }

    fn down(cell: CellCoordinate, shift: bool) -> PointerMsg {
        PointerMsg::CellDown {
            cell,
            button: PointerButton::Primary,
            shift,
        }
    }

    #[test]
    fn test_drag_select_rectangle() {
        let mut model = model();
        update_pointer(&mut model, down(CellCoordinate::new("r1", "a"), false));
        update_pointer(
            &mut model,
            PointerMsg::CellEnter {
                cell: CellCoordinate::new("r3", "b"),
            },
        );
        update_pointer(&mut model, PointerMsg::Up(Point::default()));

        assert!(!model.selection.is_selecting);
        assert_eq!(model.selection.selected_cells(&model.table).len(), 6);
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let mut model = model();
        let msg = PointerMsg::CellDown {
            cell: CellCoordinate::new("r1", "a"),
            button: PointerButton::Secondary,
            shift: false,
        };
        assert_eq!(update_pointer(&mut model, msg), None);
        assert!(model.interaction.is_idle());
    }

    #[test]
    fn test_shift_click_extends_from_anchor() {
        let mut model = model();
        update_pointer(&mut model, down(CellCoordinate::new("r1", "a"), false));
        update_pointer(&mut model, PointerMsg::Up(Point::default()));
        update_pointer(&mut model, down(CellCoordinate::new("r2", "b"), true));

        assert_eq!(model.selection.anchor, Some(CellCoordinate::new("r1", "a")));
        assert_eq!(model.selection.selected_cells(&model.table).len(), 4);
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let mut model = model();
        let cmd = update_pointer(
            &mut model,
            PointerMsg::ResizeHandleDown {
                column_id: ColumnId::from("a"),
                x: 200.0,
                width: 150.0,
                button: PointerButton::Primary,
            },
        )
        .unwrap();
        assert_eq!(cmd.listener_delta(), 1);

        update_pointer(&mut model, PointerMsg::Move(Point::new(240.0, 0.0)));
        assert_eq!(model.widths.get(&ColumnId::from("a")), Some(190.0));

        update_pointer(&mut model, PointerMsg::Move(Point::new(0.0, 0.0)));
        assert_eq!(model.widths.get(&ColumnId::from("a")), Some(100.0));

        let cmd = update_pointer(&mut model, PointerMsg::Up(Point::new(0.0, 0.0))).unwrap();
        assert_eq!(cmd.listener_delta(), -1);
        assert!(cmd.intents().is_empty());
        assert_eq!(model.listeners, None);
    }

    #[test]
    fn test_reorder_over_self_is_noop() {
        let mut model = model();
        update_pointer(
            &mut model,
            PointerMsg::RowHandleDown {
                row_id: RowId::from("r2"),
                button: PointerButton::Primary,
            },
        );
        assert_eq!(model.listeners, Some(DragKind::RowReorder));

        let cmd = update_pointer(&mut model, PointerMsg::Up(Point::new(0.0, 45.0))).unwrap();
        assert!(cmd.intents().is_empty());
        assert_eq!(model.listeners, None);
    }

    #[test]
    fn test_reorder_hover_tracks_target() {
        let mut model = model();
        update_pointer(
            &mut model,
            PointerMsg::RowHandleDown {
                row_id: RowId::from("r1"),
                button: PointerButton::Primary,
            },
        );
        assert_eq!(
            update_pointer(&mut model, PointerMsg::Move(Point::new(0.0, 70.0))),
            Some(Cmd::Redraw)
        );
        assert_eq!(
            update_pointer(&mut model, PointerMsg::Move(Point::new(0.0, 75.0))),
            None
        );

        let cmd = update_pointer(&mut model, PointerMsg::Up(Point::new(0.0, 75.0))).unwrap();
        assert_eq!(cmd.intents().len(), 1);
    }
}
