//! Command-line interface
//!
//! Supports:
//! - Replaying a scripted interaction against a table snapshot
//! - Listing the active keybindings

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::commands::Cmd;
use crate::config::GridConfig;
use crate::drag::{Point, PointerButton, RowBand};
use crate::engine::GridEngine;
use crate::keymap::{parse_key_string, KeymapError, Modifiers};
use crate::model::{CellCoordinate, ColumnId, Intent, RowId, TableSnapshot};

/// Headless driver for the grid engine
#[derive(Parser, Debug)]
#[command(name = "gridedit", version, about = "Headless driver for the grid editing engine")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Replay a scripted interaction and print the emitted intents as JSON lines
    Replay {
        /// Table snapshot (JSON)
        #[arg(long, value_name = "FILE")]
        table: PathBuf,

        /// Interaction script (YAML)
        #[arg(long, value_name = "FILE")]
        script: PathBuf,

        /// Print the final table after the last step
        #[arg(long)]
        print_table: bool,

        /// Height of each rendered row, used for row drag hit-testing
        #[arg(long, value_name = "PX", default_value_t = 32.0)]
        row_height: f64,

        /// Config file to use instead of the user config
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// List the active keybindings
    Keys {
        /// Skip the user keymap
        #[arg(long)]
        defaults_only: bool,
    },
}

/// A scripted interaction
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub steps: Vec<Step>,
}

/// One input event
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "do", rename_all = "snake_case")]
pub enum Step {
    /// Primary-button press on a cell
    Click {
        row: String,
        column: String,
        #[serde(default)]
        shift: bool,
    },
    /// Pointer entered a cell
    Hover { row: String, column: String },
    /// Pointer released
    Release {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    /// Key press in keymap notation, e.g. `shift+down`
    Key { key: String },
    /// Key release; `shift` is whether Shift is still held
    KeyUp {
        #[serde(default)]
        shift: bool,
    },
    /// Printable text typed into the grid
    Type { text: String },
    /// Commit the open editor with `text`
    Commit { text: String },
    /// Full column resize drag from `from_x` to `to_x`
    Resize {
        column: String,
        from_x: f64,
        width: f64,
        to_x: f64,
    },
    /// Full row drag, released at `to_y`
    DragRow { row: String, to_y: f64 },
    /// Host tears the grid down
    Unmount,
}

/// A line of replay output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayEvent {
    Intent { step: usize, intent: Intent },
    Clipboard { step: usize, text: String },
}

/// Drives an engine through a script, applying intents as they are emitted
pub struct Replay {
    engine: GridEngine,
    row_height: f64,
    events: Vec<ReplayEvent>,
}

impl Replay {
    pub fn new(table: TableSnapshot, config: GridConfig, row_height: f64) -> Self {
        let mut replay = Self {
            engine: GridEngine::with_config(table, config),
            row_height,
            events: Vec::new(),
        };
        replay.sync_layout();
        replay
    }

    pub fn run(&mut self, script: &Script) -> Result<(), KeymapError> {
        for (index, step) in script.steps.iter().enumerate() {
            tracing::debug!(target: "replay", step = index, ?step, "replaying");
            let cmd = self.step(step)?;
            self.record(index, cmd);
        }
        Ok(())
    }

    fn step(&mut self, step: &Step) -> Result<Cmd, KeymapError> {
        let engine = &mut self.engine;
        let cmd = match step {
            Step::Click { row, column, shift } => engine.cell_down(
                CellCoordinate::new(row.as_str(), column.as_str()),
                PointerButton::Primary,
                *shift,
            ),
            Step::Hover { row, column } => {
                engine.cell_enter(CellCoordinate::new(row.as_str(), column.as_str()))
            }
            Step::Release { x, y } => engine.pointer_up(Point::new(*x, *y)),
            Step::Key { key } => engine.key_down(parse_key_string(key)?),
            Step::KeyUp { shift } => {
                let mods = if *shift {
                    Modifiers::SHIFT
                } else {
                    Modifiers::NONE
                };
                engine.key_up(mods)
            }
            Step::Type { text } => Cmd::batch(text.chars().map(|ch| engine.text_input(ch))),
            Step::Commit { text } => engine
                .commit_edit(text.as_str())
                .map(Cmd::Emit)
                .unwrap_or_default(),
            Step::Resize {
                column,
                from_x,
                width,
                to_x,
            } => Cmd::batch([
                engine.resize_handle_down(
                    ColumnId::from(column.as_str()),
                    *from_x,
                    *width,
                    PointerButton::Primary,
                ),
                engine.pointer_move(Point::new(*to_x, 0.0)),
                engine.pointer_up(Point::new(*to_x, 0.0)),
            ]),
            Step::DragRow { row, to_y } => Cmd::batch([
                engine.row_handle_down(RowId::from(row.as_str()), PointerButton::Primary),
                engine.pointer_move(Point::new(0.0, *to_y)),
                engine.pointer_up(Point::new(0.0, *to_y)),
            ]),
            Step::Unmount => engine.unmount(),
        };
        Ok(cmd)
    }

    fn record(&mut self, step: usize, cmd: Cmd) {
        if let Some(text) = cmd.clipboard_text() {
            self.events.push(ReplayEvent::Clipboard {
                step,
                text: text.to_string(),
            });
        }

        let intents = cmd.into_intents();
        if intents.is_empty() {
            return;
        }
        for intent in &intents {
            tracing::info!(target: "replay", step, kind = intent.kind(), "intent");
        }
        self.engine.apply_intents(&intents);
        self.sync_layout();
        self.events
            .extend(intents.into_iter().map(|intent| ReplayEvent::Intent { step, intent }));
    }

    /// Uniform row bands for the current snapshot
    fn sync_layout(&mut self) {
        let bands = self
            .engine
            .table()
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| RowBand {
                row_id: row.id.clone(),
                top: i as f64 * self.row_height,
                height: self.row_height,
            })
            .collect();
        self.engine.set_row_layout(bands);
    }

    pub fn events(&self) -> &[ReplayEvent] {
        &self.events
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    /// Finish the replay, releasing any session still open
    pub fn finish(mut self) -> (TableSnapshot, Vec<ReplayEvent>) {
        self.engine.unmount();
        (self.engine.table().clone(), std::mem::take(&mut self.events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Column, ColumnType, Row};
    use clap::CommandFactory;

    fn table() -> TableSnapshot {
        TableSnapshot::new(
            vec![
                Column::new("a", "A", ColumnType::Text),
                Column::new("b", "B", ColumnType::Text),
            ],
            vec![
                Row::new("r1").with_cell("a", "1").with_cell("b", "x"),
                Row::new("r2").with_cell("a", "2").with_cell("b", "y"),
            ],
        )
    }

    fn config() -> GridConfig {
        GridConfig {
            load_user_keymap: false,
            ..GridConfig::default()
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_replay_args() {
        let args = CliArgs::try_parse_from([
            "gridedit",
            "replay",
            "--table",
            "t.json",
            "--script",
            "s.yaml",
            "--print-table",
        ])
        .unwrap();
        match args.command {
            CliCommand::Replay {
                print_table,
                row_height,
                ..
            } => {
                assert!(print_table);
                assert_eq!(row_height, 32.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_script_parses_steps() {
        let yaml = r#"
steps:
  - do: click
    row: r1
    column: a
  - do: key
    key: "shift+down"
  - do: unmount
"#;
        let script: Script = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(script.steps.len(), 3);
        assert!(matches!(script.steps[2], Step::Unmount));
    }

    #[test]
    fn test_replay_edit_applies_intent() {
        let script: Script = serde_yaml::from_str(
            r#"
steps:
  - do: click
    row: r1
    column: b
  - do: release
  - do: key
    key: enter
  - do: commit
    text: changed
"#,
        )
        .unwrap();

        let mut replay = Replay::new(table(), config(), 32.0);
        replay.run(&script).unwrap();
        let (table, events) = replay.finish();

        assert_eq!(events.len(), 1);
        assert_eq!(
            table.cell_value(&CellCoordinate::new("r1", "b")),
            Some(&serde_json::json!("changed"))
        );
    }

    #[test]
    fn test_replay_drag_row_reorders() {
        let script: Script = serde_yaml::from_str(
            r#"
steps:
  - do: drag_row
    row: r2
    to_y: 5
"#,
        )
        .unwrap();

        let mut replay = Replay::new(table(), config(), 32.0);
        replay.run(&script).unwrap();
        let ids: Vec<_> = replay
            .engine()
            .table()
            .rows
            .iter()
            .map(|r| r.id.as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["r2", "r1"]);
    }

    #[test]
    fn test_bad_key_is_an_error() {
        let script: Script =
            serde_yaml::from_str("steps:\n  - do: key\n    key: \"ctrl+nope\"\n").unwrap();
        let mut replay = Replay::new(table(), config(), 32.0);
        assert!(replay.run(&script).is_err());
    }
}
