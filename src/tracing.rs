//! Tracing infrastructure for development diagnostics
//!
//! Configure via RUST_LOG:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=debug,drag=debug` - scoped filtering
//! - `RUST_LOG=gridedit::update=debug` - module-level filtering
//!
//! Logs are also written to `~/.config/gridedit/logs/gridedit.log` with
//! daily rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::model::{CellCoordinate, GridModel};

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of selection and session state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSnapshot {
    pub anchor: Option<CellCoordinate>,
    pub focus: Option<CellCoordinate>,
    pub selecting: bool,
    pub session: &'static str,
}

impl SelectionSnapshot {
    pub fn from_model(model: &GridModel) -> Self {
        Self {
            anchor: model.selection.anchor.clone(),
            focus: model.selection.focus.clone(),
            selecting: model.selection.is_selecting,
            session: model.interaction.name(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.session != other.session {
            changes.push(format!("session {} → {}", self.session, other.session));
        }
        if self.anchor != other.anchor {
            changes.push(format!(
                "anchor {} → {}",
                describe(&self.anchor),
                describe(&other.anchor)
            ));
        }
        if self.focus != other.focus {
            changes.push(format!(
                "focus {} → {}",
                describe(&self.focus),
                describe(&other.focus)
            ));
        }
        if self.selecting != other.selecting {
            let status = if other.selecting { "started" } else { "ended" };
            changes.push(format!("gesture {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn describe(coord: &Option<CellCoordinate>) -> String {
    coord
        .as_ref()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string())
}
