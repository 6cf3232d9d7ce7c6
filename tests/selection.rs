//! Rectangular selection tests: pointer gestures, Shift+Arrow, select all

mod common;

use common::{at, click, cmd, key, shift, test_engine, test_table};
use gridedit::drag::{Point, PointerButton};
use gridedit::keymap::{KeyCode, Modifiers};
use gridedit::model::CellCoordinate;
use gridedit::selection::SelectionState;
use gridedit::Interaction;

// ========================================================================
// SelectionState
// ========================================================================

#[test]
fn test_rect_is_order_independent() {
    let table = test_table(4, 4);
    let mut sel = SelectionState::new();
    sel.begin_selection(at(3, 2));
    sel.extend_selection(at(1, 0));

    let rect = sel.rect(&table).unwrap();
    assert_eq!((rect.top, rect.left, rect.bottom, rect.right), (1, 0, 3, 2));
    assert_eq!(rect.cell_count(), 9);
    assert_eq!(sel.top_left(&table), Some(at(1, 0)));
}

#[test]
fn test_extend_without_gesture_is_noop() {
    let mut sel = SelectionState::new();
    sel.move_focus(at(0, 0));
    sel.extend_selection(at(2, 2));
    assert_eq!(sel.focus, Some(at(0, 0)));
}

#[test]
fn test_stale_anchor_empties_selection() {
    let table = test_table(2, 2);
    let mut sel = SelectionState::new();
    sel.begin_selection(CellCoordinate::new("gone", "c0"));
    sel.extend_selection(at(1, 1));

    assert!(sel.selected_cells(&table).is_empty());
    assert!(!sel.is_selected(&table, &at(1, 1)));
}

#[test]
fn test_focus_only_selects_single_cell() {
    let table = test_table(3, 3);
    let sel = SelectionState {
        anchor: None,
        focus: Some(at(1, 1)),
        is_selecting: false,
    };
    assert_eq!(sel.selected_cells(&table), vec![at(1, 1)]);
}

// ========================================================================
// Pointer gestures
// ========================================================================

#[test]
fn test_pointer_drag_selects_rectangle() {
    let mut engine = test_engine(4, 4);
    engine.cell_down(at(0, 1), PointerButton::Primary, false);
    engine.cell_enter(at(1, 2));
    engine.cell_enter(at(2, 3));
    assert!(engine.selection().is_selecting);

    engine.pointer_up(Point::default());
    assert!(!engine.selection().is_selecting);
    assert!(engine.interaction().is_idle());

    let cells = engine.selected_cells();
    assert_eq!(cells.len(), 9);
    assert_eq!(cells.first(), Some(&at(0, 1)));
    assert_eq!(cells.last(), Some(&at(2, 3)));
    assert!(!engine.is_selected(&at(3, 3)));
}

#[test]
fn test_hover_without_press_does_nothing() {
    let mut engine = test_engine(3, 3);
    click(&mut engine, at(0, 0));
    engine.cell_enter(at(2, 2));
    assert_eq!(engine.selected_cells(), vec![at(0, 0)]);
}

#[test]
fn test_click_on_unknown_cell_is_ignored() {
    let mut engine = test_engine(2, 2);
    click(&mut engine, at(1, 1));
    engine.cell_down(
        CellCoordinate::new("nope", "c0"),
        PointerButton::Primary,
        false,
    );
    assert_eq!(engine.focus(), Some(&at(1, 1)));
    assert!(engine.interaction().is_idle());
}

#[test]
fn test_shift_click_keeps_anchor() {
    let mut engine = test_engine(4, 4);
    click(&mut engine, at(1, 1));
    engine.cell_down(at(3, 2), PointerButton::Primary, true);
    engine.pointer_up(Point::default());

    assert_eq!(engine.selection().anchor, Some(at(1, 1)));
    assert_eq!(engine.focus(), Some(&at(3, 2)));
    assert_eq!(engine.selected_cells().len(), 6);
}

// ========================================================================
// Keyboard selection
// ========================================================================

#[test]
fn test_shift_arrow_grows_from_focus() {
    let mut engine = test_engine(4, 4);
    click(&mut engine, at(1, 1));

    engine.key_down(shift(KeyCode::Down));
    engine.key_down(shift(KeyCode::Right));
    assert!(engine.selection().is_selecting);
    assert_eq!(engine.selection().anchor, Some(at(1, 1)));
    assert_eq!(engine.focus(), Some(&at(2, 2)));
    assert_eq!(engine.selected_cells().len(), 4);
}

#[test]
fn test_releasing_shift_ends_gesture() {
    let mut engine = test_engine(3, 3);
    click(&mut engine, at(0, 0));
    engine.key_down(shift(KeyCode::Down));

    engine.key_up(Modifiers::NONE);
    assert!(!engine.selection().is_selecting);
    assert_eq!(*engine.interaction(), Interaction::Idle);
    // Selection survives the end of the gesture
    assert_eq!(engine.selected_cells().len(), 2);
}

#[test]
fn test_shift_arrow_at_edge_is_noop() {
    let mut engine = test_engine(2, 2);
    click(&mut engine, at(0, 0));
    engine.key_down(shift(KeyCode::Up));
    assert!(!engine.selection().is_selecting);
    assert_eq!(engine.selected_cells(), vec![at(0, 0)]);
}

#[test]
fn test_plain_arrow_collapses_selection() {
    let mut engine = test_engine(4, 4);
    click(&mut engine, at(0, 0));
    engine.key_down(shift(KeyCode::Right));
    engine.key_down(shift(KeyCode::Down));

    engine.key_down(key(KeyCode::Down));
    assert_eq!(engine.focus(), Some(&at(2, 1)));
    assert_eq!(engine.selected_cells(), vec![at(2, 1)]);
    assert!(!engine.selection().is_selecting);
}

#[test]
fn test_select_all_covers_table() {
    let mut engine = test_engine(3, 4);
    engine.key_down(cmd('a'));

    assert_eq!(engine.selected_cells().len(), 12);
    assert_eq!(engine.selection().anchor, Some(at(0, 0)));
    assert_eq!(engine.focus(), Some(&at(2, 3)));
}

#[test]
fn test_select_all_on_empty_table_is_noop() {
    let mut engine = test_engine(0, 0);
    engine.key_down(cmd('a'));
    assert!(engine.selected_cells().is_empty());
    assert_eq!(engine.focus(), None);
}

#[test]
fn test_rectangle_size_for_every_pair() {
    let table = test_table(3, 4);
    let coords: Vec<(usize, usize)> = (0..3).flat_map(|r| (0..4).map(move |c| (r, c))).collect();

    for &(ar, ac) in &coords {
        for &(fr, fc) in &coords {
            let mut forward = SelectionState::new();
            forward.begin_selection(at(ar, ac));
            forward.extend_selection(at(fr, fc));

            let mut backward = SelectionState::new();
            backward.begin_selection(at(fr, fc));
            backward.extend_selection(at(ar, ac));

            let expected = (ar.abs_diff(fr) + 1) * (ac.abs_diff(fc) + 1);
            let cells = forward.selected_cells(&table);
            assert_eq!(cells.len(), expected);
            assert_eq!(cells, backward.selected_cells(&table));
        }
    }
}
