//! Context system for conditional keybindings
//!
//! Lets the same key mean different things depending on the grid's session,
//! e.g. arrows move focus unless a cell editor is open.

/// Grid state a binding can be conditioned on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    /// A cell editor is open
    pub editing: bool,
    /// A selection gesture is in progress
    pub selecting: bool,
    /// A column resize or row reorder drag is in progress
    pub dragging: bool,
}

/// Conditions that can be attached to keybindings
///
/// Multiple conditions on a binding are ANDed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Editing,
    NotEditing,
    Selecting,
    NotSelecting,
    Dragging,
    NotDragging,
}

impl Condition {
    pub fn evaluate(self, ctx: &KeyContext) -> bool {
        match self {
            Condition::Editing => ctx.editing,
            Condition::NotEditing => !ctx.editing,
            Condition::Selecting => ctx.selecting,
            Condition::NotSelecting => !ctx.selecting,
            Condition::Dragging => ctx.dragging,
            Condition::NotDragging => !ctx.dragging,
        }
    }

    /// Evaluate all conditions (AND logic)
    pub fn evaluate_all(conditions: &[Condition], ctx: &KeyContext) -> bool {
        conditions.iter().all(|c| c.evaluate(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_conditions() {
        let mut ctx = KeyContext::default();
        assert!(Condition::NotEditing.evaluate(&ctx));
        assert!(!Condition::Editing.evaluate(&ctx));

        ctx.editing = true;
        assert!(Condition::Editing.evaluate(&ctx));
        assert!(!Condition::NotEditing.evaluate(&ctx));
    }

    #[test]
    fn test_evaluate_all_empty() {
        assert!(Condition::evaluate_all(&[], &KeyContext::default()));
    }

    #[test]
    fn test_evaluate_all_and_logic() {
        let ctx = KeyContext {
            selecting: true,
            ..Default::default()
        };
        assert!(Condition::evaluate_all(
            &[Condition::Selecting, Condition::NotDragging],
            &ctx
        ));
        assert!(!Condition::evaluate_all(
            &[Condition::Selecting, Condition::Editing],
            &ctx
        ));
    }
}
