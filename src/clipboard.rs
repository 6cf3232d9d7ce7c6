//! Clipboard codec
//!
//! A deliberately minimal comma/newline format. The writer quotes fields that
//! contain `,` or `\n`; the reader splits strictly on `\n` then `,` and only
//! strips one layer of quotes. A quoted field containing a comma therefore
//! comes back as two fields. Single-cell copies bypass the text format
//! entirely and keep the raw value.

use crate::format::raw_text;
use crate::model::{CellCoordinate, CellUpdate, CellValue, TableSnapshot};
use crate::selection::CellRect;

/// Most recent copy payload
///
/// The tag decides how a paste is dispatched, independent of the size of the
/// selection being pasted into.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ClipboardSlot {
    #[default]
    Empty,
    /// A single raw value, pasted verbatim at the anchor
    Single(CellValue),
    /// A serialized multi-cell block
    Multi(String),
}

impl ClipboardSlot {
    pub fn is_empty(&self) -> bool {
        matches!(self, ClipboardSlot::Empty)
    }

    /// Plain-text form for mirroring to a system clipboard
    pub fn text(&self) -> Option<String> {
        match self {
            ClipboardSlot::Empty => None,
            ClipboardSlot::Single(value) => Some(raw_text(value)),
            ClipboardSlot::Multi(text) => Some(text.clone()),
        }
    }
}

/// Serialize a rectangular grid of raw values
pub fn serialize(grid: &[Vec<CellValue>]) -> ClipboardSlot {
    let cell_count: usize = grid.iter().map(Vec::len).sum();
    match cell_count {
        0 => ClipboardSlot::Empty,
        1 => grid
            .iter()
            .flatten()
            .next()
            .cloned()
            .map_or(ClipboardSlot::Empty, ClipboardSlot::Single),
        _ => {
            let text = grid
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|value| quote_field(&raw_text(value)))
                        .collect::<Vec<_>>()
                        .join(",")
                })
                .collect::<Vec<_>>()
                .join("\n");
            ClipboardSlot::Multi(text)
        }
    }
}

fn quote_field(field: &str) -> String {
    if field.contains(',') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Parse clipboard text into a grid of strings
///
/// Rows may come back ragged when a quoted field held a comma.
pub fn deserialize(text: &str) -> Vec<Vec<String>> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|line| {
            line.trim_end_matches('\r')
                .split(',')
                .map(unquote_field)
                .collect()
        })
        .collect()
}

fn unquote_field(field: &str) -> String {
    let field = field.strip_prefix('"').unwrap_or(field);
    let field = field.strip_suffix('"').unwrap_or(field);
    field.replace("\"\"", "\"")
}

/// Raw values covered by `rect`, row-major
pub fn collect(table: &TableSnapshot, rect: &CellRect) -> Vec<Vec<CellValue>> {
    (rect.top..=rect.bottom)
        .map(|row| {
            (rect.left..=rect.right)
                .map(|col| table.value_at(row, col))
                .collect()
        })
        .collect()
}

/// Compute the cell writes for pasting `slot` with its top-left at `anchor`
///
/// Targets past the last row or column are dropped. Nothing is produced for
/// an empty slot or an anchor that no longer resolves.
pub fn paste_into(
    table: &TableSnapshot,
    anchor: &CellCoordinate,
    slot: &ClipboardSlot,
) -> Vec<CellUpdate> {
    let Some((anchor_row, anchor_col)) = table.resolve(anchor) else {
        return Vec::new();
    };

    match slot {
        ClipboardSlot::Empty => Vec::new(),
        ClipboardSlot::Single(value) => vec![CellUpdate {
            row_id: anchor.row_id.clone(),
            column_id: anchor.column_id.clone(),
            value: value.clone(),
        }],
        ClipboardSlot::Multi(text) => {
            let grid = deserialize(text);
            let mut updates = Vec::new();
            for (row_offset, fields) in grid.into_iter().enumerate() {
                for (col_offset, field) in fields.into_iter().enumerate() {
                    let Some(target) =
                        table.coordinate_at(anchor_row + row_offset, anchor_col + col_offset)
                    else {
                        continue;
                    };
                    updates.push(CellUpdate {
                        row_id: target.row_id,
                        column_id: target.column_id,
                        value: CellValue::String(field),
                    });
                }
            }
            tracing::debug!(target: "clipboard", count = updates.len(), "paste");
            updates
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_cell_keeps_raw_value() {
        assert_eq!(
            serialize(&[vec![json!("a,b")]]),
            ClipboardSlot::Single(json!("a,b"))
        );
        assert_eq!(serialize(&[vec![json!(5)]]), ClipboardSlot::Single(json!(5)));
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(serialize(&[]), ClipboardSlot::Empty);
        assert_eq!(serialize(&[vec![], vec![]]), ClipboardSlot::Empty);
        assert!(deserialize("").is_empty());
    }

    #[test]
    fn test_quotes_only_when_needed() {
        let grid = vec![vec![json!("say \"hi\""), json!("a\nb")]];
        assert_eq!(
            serialize(&grid),
            ClipboardSlot::Multi("say \"hi\",\"a\nb\"".to_string())
        );
    }

    #[test]
    fn test_mixed_values_scenario() {
        let grid = vec![vec![json!(1), json!("x")], vec![json!(2), json!("y,z")]];
        let slot = serialize(&grid);
        assert_eq!(slot, ClipboardSlot::Multi("1,x\n2,\"y,z\"".to_string()));

        let ClipboardSlot::Multi(text) = slot else {
            panic!("expected multi");
        };
        let parsed = deserialize(&text);
        assert_eq!(parsed[0], vec!["1", "x"]);
        // Reader splits the quoted field
        assert_eq!(parsed[1], vec!["2", "y", "z"]);
    }

    #[test]
    fn test_unquote_undoubles() {
        assert_eq!(deserialize("\"a\"\"b\""), vec![vec!["a\"b".to_string()]]);
    }

    #[test]
    fn test_slot_text() {
        assert_eq!(ClipboardSlot::Empty.text(), None);
        assert_eq!(ClipboardSlot::Single(json!(3)).text().as_deref(), Some("3"));
        assert_eq!(
            ClipboardSlot::Multi("a,b".into()).text().as_deref(),
            Some("a,b")
        );
    }
}
