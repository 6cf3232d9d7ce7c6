//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host performs after an update.
//! Table changes travel as [`Cmd::Emit`]; the engine never applies them.

use crate::drag::DragKind;
use crate::model::Intent;

/// Effects returned from update
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Presentation state changed (selection, widths, drop target, editor)
    Redraw,
    /// Apply this change to the table and supply the next snapshot
    Emit(Intent),
    /// Start routing global pointer move/up events to the engine
    AttachPointerListeners(DragKind),
    /// Stop routing global pointer events for this drag
    DetachPointerListeners(DragKind),
    /// Suppress the host's default handling of the key (Tab focus traversal)
    PreventDefault,
    /// Mirror this text to the system clipboard
    WriteClipboard(String),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    ///
    /// Nested batches are flattened and `None` entries dropped; an empty or
    /// single-entry batch collapses to its content.
    pub fn batch(cmds: impl IntoIterator<Item = Cmd>) -> Self {
        let mut flat = Vec::new();
        for cmd in cmds {
            match cmd {
                Cmd::None => {}
                Cmd::Batch(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Cmd::None,
            1 => flat.pop().unwrap_or_default(),
            _ => Cmd::Batch(flat),
        }
    }

    /// Batch of emits, one per intent
    pub fn emit_all(intents: impl IntoIterator<Item = Intent>) -> Self {
        Self::batch(intents.into_iter().map(Cmd::Emit))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Cmd::None)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // The host re-renders when it supplies the next snapshot
            Cmd::Emit(_) => false,
            Cmd::AttachPointerListeners(_) | Cmd::DetachPointerListeners(_) => false,
            Cmd::PreventDefault => false,
            Cmd::WriteClipboard(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Leaf commands in order, batches expanded
    pub fn iter(&self) -> Box<dyn Iterator<Item = &Cmd> + '_> {
        match self {
            Cmd::None => Box::new(std::iter::empty()),
            Cmd::Batch(cmds) => Box::new(cmds.iter().flat_map(|c| c.iter())),
            other => Box::new(std::iter::once(other)),
        }
    }

    /// Intents carried by this command, in emit order
    pub fn intents(&self) -> Vec<&Intent> {
        self.iter()
            .filter_map(|c| match c {
                Cmd::Emit(intent) => Some(intent),
                _ => None,
            })
            .collect()
    }

    pub fn into_intents(self) -> Vec<Intent> {
        match self {
            Cmd::Emit(intent) => vec![intent],
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_intents).collect(),
            _ => Vec::new(),
        }
    }

    /// Text to mirror to the system clipboard, if any
    pub fn clipboard_text(&self) -> Option<&str> {
        self.iter().find_map(|c| match c {
            Cmd::WriteClipboard(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn prevents_default(&self) -> bool {
        self.iter().any(|c| matches!(c, Cmd::PreventDefault))
    }

    /// Count of listener attach (+1) and detach (-1) effects
    pub fn listener_delta(&self) -> i32 {
        self.iter()
            .map(|c| match c {
                Cmd::AttachPointerListeners(_) => 1,
                Cmd::DetachPointerListeners(_) => -1,
                _ => 0,
            })
            .sum()
    }

    /// Convert Option<Cmd> with None to Cmd::None
    pub fn from_option(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RowId;

    fn delete(id: &str) -> Intent {
        Intent::DeleteRow {
            row_id: RowId::from(id),
        }
    }

    #[test]
    fn test_batch_flattens_and_drops_none() {
        let cmd = Cmd::batch(vec![
            Cmd::None,
            Cmd::batch(vec![Cmd::Redraw, Cmd::PreventDefault]),
            Cmd::None,
        ]);
        assert_eq!(cmd, Cmd::Batch(vec![Cmd::Redraw, Cmd::PreventDefault]));
    }

    #[test]
    fn test_batch_collapses_small() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
        assert_eq!(Cmd::batch(vec![Cmd::None, Cmd::Redraw]), Cmd::Redraw);
    }

    #[test]
    fn test_needs_redraw() {
        assert!(!Cmd::None.needs_redraw());
        assert!(Cmd::Redraw.needs_redraw());
        assert!(!Cmd::Emit(delete("r")).needs_redraw());
        assert!(Cmd::Batch(vec![Cmd::PreventDefault, Cmd::Redraw]).needs_redraw());
    }

    #[test]
    fn test_intents_in_order() {
        let cmd = Cmd::Batch(vec![
            Cmd::Emit(delete("a")),
            Cmd::Redraw,
            Cmd::Batch(vec![Cmd::Emit(delete("b"))]),
        ]);
        assert_eq!(cmd.intents(), vec![&delete("a"), &delete("b")]);
        assert_eq!(cmd.into_intents(), vec![delete("a"), delete("b")]);
    }

    #[test]
    fn test_listener_delta() {
        let cmd = Cmd::Batch(vec![
            Cmd::DetachPointerListeners(DragKind::ColumnResize),
            Cmd::AttachPointerListeners(DragKind::RowReorder),
        ]);
        assert_eq!(cmd.listener_delta(), 0);
    }
}
