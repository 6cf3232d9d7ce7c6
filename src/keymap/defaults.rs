//! Default keybindings for the grid
//!
//! The shipped bindings live in keymap.yaml at the crate root and are
//! embedded at compile time; `default_bindings` mirrors them in code as a
//! fallback.

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::context::Condition;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load the embedded keymap, optionally merging the user's overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap
/// 2. User config at `<config dir>/gridedit/keymap.yaml`
///
/// User bindings with `command: Unbound` remove matching default bindings.
pub fn load_default_keymap(include_user: bool) -> Vec<Keybinding> {
    let mut bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::debug!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    if !include_user {
        return bindings;
    }

    if let Some(user_path) = crate::config_paths::keymap_file() {
        if user_path.exists() {
            match load_keymap_file(&user_path) {
                Ok(user_bindings) => {
                    tracing::info!(
                        "Merging user keymap from {} ({} bindings)",
                        user_path.display(),
                        user_bindings.len()
                    );
                    bindings = merge_bindings(bindings, user_bindings);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to load user keymap from {}: {}",
                        user_path.display(),
                        e
                    );
                }
            }
        }
    }

    bindings
}

/// Merge user bindings into base bindings
///
/// - Same keystroke and conditions: the user binding replaces the base one
/// - `Unbound`: removes every base binding for that keystroke
/// - Otherwise the user binding is appended
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        let existing_idx = result
            .iter()
            .position(|b| b.keystroke == user_binding.keystroke && b.when == user_binding.when);

        match existing_idx {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Hardcoded copy of the shipped keymap
pub fn default_bindings() -> Vec<Keybinding> {
    let cmd = Modifiers::cmd();
    let shift = Modifiers::SHIFT;
    let none = Modifiers::NONE;

    let mut bindings = vec![
        // Focus movement
        idle(KeyCode::Up, none, Command::MoveUp),
        idle(KeyCode::Down, none, Command::MoveDown),
        idle(KeyCode::Left, none, Command::MoveLeft),
        idle(KeyCode::Right, none, Command::MoveRight),
        idle(KeyCode::Home, none, Command::RowStart),
        idle(KeyCode::End, none, Command::RowEnd),
        idle(KeyCode::Home, cmd, Command::FirstCell),
        idle(KeyCode::End, cmd, Command::LastCell),
        bind(KeyCode::Tab, none, Command::NextCell),
        bind(KeyCode::Tab, shift, Command::PrevCell),

        // Selection
        idle(KeyCode::Up, shift, Command::ExtendUp),
        idle(KeyCode::Down, shift, Command::ExtendDown),
        idle(KeyCode::Left, shift, Command::ExtendLeft),
        idle(KeyCode::Right, shift, Command::ExtendRight),
        idle(KeyCode::Char('a'), cmd, Command::SelectAll),

        // Clipboard
        idle(KeyCode::Char('c'), cmd, Command::Copy),
        idle(KeyCode::Char('x'), cmd, Command::Cut),
        idle(KeyCode::Char('v'), cmd, Command::Paste),

        // Editing
        bind(KeyCode::Enter, none, Command::ToggleEdit),
        idle(KeyCode::Delete, none, Command::ClearCells),
        idle(KeyCode::Backspace, none, Command::ClearCells),
        bind(KeyCode::Escape, none, Command::Escape),
    ];

    #[cfg(target_os = "macos")]
    {
        let ctrl = Modifiers::CTRL;
        bindings.push(idle(KeyCode::Char('c'), ctrl, Command::Copy));
        bindings.push(idle(KeyCode::Char('x'), ctrl, Command::Cut));
        bindings.push(idle(KeyCode::Char('v'), ctrl, Command::Paste));
    }

    bindings
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}

/// Binding that only fires while no cell editor is open
fn idle(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    bind(key, mods, command).when_single(Condition::NotEditing)
}
