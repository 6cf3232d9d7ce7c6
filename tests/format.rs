//! Type-aware formatting through the engine

use gridedit::format::{to_display, to_editable};
use gridedit::model::{CellCoordinate, Column, ColumnType, Row, TableSnapshot};
use gridedit::{ColumnId, GridEngine, PointerButton};
use serde_json::json;

fn notes_table() -> TableSnapshot {
    TableSnapshot::new(
        vec![Column::new("note", "Note", ColumnType::Text)],
        vec![Row::new("r1").with_cell("note", "not-a-date")],
    )
}

#[test]
fn test_retyped_column_formats_garbage_as_empty() {
    let mut engine = GridEngine::new(notes_table());
    let cell = CellCoordinate::new("r1", "note");

    engine.cell_down(cell.clone(), PointerButton::Primary, false);
    engine.pointer_up(Default::default());
    assert_eq!(engine.begin_editing(), Some("not-a-date".to_string()));
    engine.cancel_edit();

    let retype = engine.update_column_type(ColumnId::from("note"), ColumnType::Date);
    engine.apply_intents([&retype]);

    let value = engine.table().cell_value(&cell).cloned().unwrap();
    assert_eq!(value, json!("not-a-date"));
    assert_eq!(to_editable(&value, ColumnType::Date), "");
    assert_eq!(to_display(&value, ColumnType::Date), "");
    assert_eq!(engine.begin_editing(), Some(String::new()));
}

#[test]
fn test_number_cells_edit_as_text() {
    let table = TableSnapshot::new(
        vec![Column::new("qty", "Qty", ColumnType::Number)],
        vec![Row::new("r1").with_cell("qty", 12)],
    );
    let mut engine = GridEngine::new(table);
    engine.cell_down(
        CellCoordinate::new("r1", "qty"),
        PointerButton::Primary,
        false,
    );
    engine.pointer_up(Default::default());

    assert_eq!(engine.begin_editing(), Some("12".to_string()));
    // Stored as the edited string
    assert_eq!(
        engine.commit_edit("13"),
        Some(gridedit::Intent::UpdateCell {
            row_id: "r1".into(),
            column_id: "qty".into(),
            value: json!("13"),
        })
    );
}
