//! Column resize, row reorder and pointer listener lifecycle tests

mod common;

use common::{at, click, key, test_engine};
use gridedit::drag::{DragKind, Point, PointerButton, Termination};
use gridedit::keymap::KeyCode;
use gridedit::model::{ColumnId, RowId};
use gridedit::{Cmd, GridEngine, Intent};

/// Net listener count across every command seen
struct ListenerLedger(i32);

impl ListenerLedger {
    fn track(&mut self, cmd: &Cmd) {
        self.0 += cmd.listener_delta();
        assert!(
            (0..=1).contains(&self.0),
            "listener count out of range: {}",
            self.0
        );
    }
}

fn row_ids(engine: &GridEngine) -> Vec<String> {
    engine
        .table()
        .rows
        .iter()
        .map(|r| r.id.as_str().to_string())
        .collect()
}

// ========================================================================
// Column resize
// ========================================================================

#[test]
fn test_resize_tracks_pointer_and_clamps() {
    let mut engine = test_engine(2, 2);
    let col = ColumnId::from("c1");

    let cmd = engine.resize_handle_down(col.clone(), 300.0, 180.0, PointerButton::Primary);
    assert_eq!(
        cmd.iter().find(|c| matches!(c, Cmd::AttachPointerListeners(_))),
        Some(&Cmd::AttachPointerListeners(DragKind::ColumnResize))
    );

    engine.pointer_move(Point::new(350.0, 10.0));
    assert_eq!(engine.widths().get(&col), Some(230.0));

    engine.pointer_move(Point::new(100.0, 10.0));
    assert_eq!(engine.widths().get(&col), Some(100.0));

    let cmd = engine.pointer_up(Point::new(260.0, 10.0));
    assert_eq!(cmd.listener_delta(), -1);
    assert_eq!(engine.widths().get(&col), Some(140.0));
    assert!(!engine.has_listeners());
}

#[test]
fn test_resize_on_unknown_column_is_ignored() {
    let mut engine = test_engine(1, 1);
    let cmd = engine.resize_handle_down(
        ColumnId::from("zz"),
        0.0,
        120.0,
        PointerButton::Primary,
    );
    assert!(cmd.is_none());
    assert!(!engine.has_listeners());
}

#[test]
fn test_set_column_width_respects_minimum() {
    let mut engine = test_engine(1, 1);
    engine.set_column_width(ColumnId::from("c0"), 40.0);
    assert_eq!(engine.widths().get(&ColumnId::from("c0")), Some(100.0));
}

// ========================================================================
// Row reorder
// ========================================================================

#[test]
fn test_drag_row_down_emits_reorder() {
    let mut engine = test_engine(4, 1);
    engine.row_handle_down(RowId::from("r0"), PointerButton::Primary);

    engine.pointer_move(Point::new(5.0, 45.0));
    assert_eq!(engine.drop_target(), Some(&RowId::from("r2")));

    let cmd = engine.pointer_up(Point::new(5.0, 45.0));
    let intents = cmd.into_intents();
    assert_eq!(
        intents,
        vec![Intent::ReorderRows {
            dragged_row_id: "r0".into(),
            target_row_id: "r2".into(),
        }]
    );

    engine.apply_intents(&intents);
    assert_eq!(row_ids(&engine), vec!["r1", "r2", "r0", "r3"]);
}

#[test]
fn test_release_outside_rows_emits_nothing() {
    let mut engine = test_engine(3, 1);
    engine.row_handle_down(RowId::from("r1"), PointerButton::Primary);

    let cmd = engine.pointer_up(Point::new(0.0, 500.0));
    assert!(cmd.intents().is_empty());
    assert!(!engine.has_listeners());
    assert_eq!(row_ids(&engine), vec!["r0", "r1", "r2"]);
}

#[test]
fn test_escape_cancels_row_drag() {
    let mut engine = test_engine(3, 1);
    engine.row_handle_down(RowId::from("r0"), PointerButton::Primary);
    engine.pointer_move(Point::new(0.0, 50.0));

    let cmd = engine.key_down(key(KeyCode::Escape));
    assert!(cmd.intents().is_empty());
    assert_eq!(cmd.listener_delta(), -1);
    assert_eq!(engine.drop_target(), None);

    // Late release after cancel is a no-op
    assert!(engine.pointer_up(Point::new(0.0, 50.0)).is_none());
}

#[test]
fn test_pointer_cancel_ends_drag() {
    let mut engine = test_engine(2, 1);
    engine.row_handle_down(RowId::from("r0"), PointerButton::Primary);
    let cmd = engine.pointer_cancel();
    assert_eq!(cmd.listener_delta(), -1);
    assert!(engine.interaction().is_idle());
}

// ========================================================================
// Listener lifecycle
// ========================================================================

#[test]
fn test_listeners_never_leak_across_sessions() {
    let mut engine = test_engine(3, 3);
    let mut ledger = ListenerLedger(0);

    ledger.track(&engine.row_handle_down(RowId::from("r0"), PointerButton::Primary));
    ledger.track(&engine.resize_handle_down(
        ColumnId::from("c0"),
        0.0,
        150.0,
        PointerButton::Primary,
    ));
    ledger.track(&engine.cell_down(at(1, 1), PointerButton::Primary, false));
    ledger.track(&engine.pointer_up(Point::default()));
    ledger.track(&engine.row_handle_down(RowId::from("r2"), PointerButton::Primary));
    ledger.track(&engine.key_down(key(KeyCode::Escape)));

    assert_eq!(ledger.0, 0);
    assert!(!engine.has_listeners());
}

#[test]
fn test_editing_then_drag_closes_editor() {
    let mut engine = test_engine(2, 2);
    click(&mut engine, at(0, 0));
    engine.begin_editing();

    let cmd = engine.row_handle_down(RowId::from("r1"), PointerButton::Primary);
    assert!(cmd.intents().is_empty());
    assert!(!engine.interaction().is_editing());
    assert!(engine.has_listeners());

    engine.unmount();
}

#[test]
fn test_terminate_is_idempotent() {
    let mut engine = test_engine(2, 2);
    engine.row_handle_down(RowId::from("r0"), PointerButton::Primary);

    assert_eq!(engine.terminate(Termination::Unmount).listener_delta(), -1);
    assert!(engine.terminate(Termination::Unmount).is_none());
}

#[test]
fn test_keys_other_than_escape_ignored_during_drag() {
    let mut engine = test_engine(3, 3);
    click(&mut engine, at(0, 0));
    engine.row_handle_down(RowId::from("r0"), PointerButton::Primary);

    engine.key_down(key(KeyCode::Enter));
    engine.key_down(key(KeyCode::Delete));
    assert!(!engine.interaction().is_editing());
    assert!(engine.has_listeners());

    engine.unmount();
    assert!(!engine.has_listeners());
}
