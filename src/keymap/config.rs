//! YAML configuration parsing for keymaps
//!
//! Parses keymap.yaml files into Keybinding structs.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use super::binding::Keybinding;
use super::command::Command;
use super::context::Condition;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub command: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub when: Option<Vec<String>>,
}

pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::IoError(e.to_string()))?;
    parse_keymap_yaml(&content)
}

/// Parse keybindings from a YAML string, dropping other platforms' entries
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let config: KeymapConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    let platform = current_platform();
    let mut bindings = Vec::with_capacity(config.bindings.len());

    for entry in config.bindings {
        if entry.platform.as_deref().is_some_and(|p| p != platform) {
            continue;
        }

        let keystroke = parse_key_string(&entry.key)?;
        let command = Command::from_str(&entry.command)?;
        let mut binding = Keybinding::new(keystroke, command);
        if let Some(conditions) = parse_conditions(entry.when.as_deref())? {
            binding = binding.when(conditions);
        }
        bindings.push(binding);
    }

    Ok(bindings)
}

/// Parse a key string like `"cmd+shift+home"` into a Keystroke
///
/// `cmd` is the platform command key (Cmd on macOS, Ctrl elsewhere).
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    let mut mods = Modifiers::NONE;
    let mut key = None;

    for part in key_str.split('+') {
        let part = part.trim().to_lowercase();
        match part.as_str() {
            "cmd" => mods = mods | Modifiers::cmd(),
            "ctrl" | "control" => mods = mods | Modifiers::CTRL,
            "shift" => mods = mods | Modifiers::SHIFT,
            "alt" | "option" | "opt" => mods = mods | Modifiers::ALT,
            "meta" | "super" | "win" => mods = mods | Modifiers::META,
            _ => {
                if key.is_some() {
                    return Err(KeymapError::InvalidKey(format!(
                        "Multiple keys in binding: {}",
                        key_str
                    )));
                }
                key = Some(parse_key_code(&part)?);
            }
        }
    }

    let key =
        key.ok_or_else(|| KeymapError::InvalidKey(format!("No key found in binding: {}", key_str)))?;
    Ok(Keystroke::new(key, mods))
}

fn parse_key_code(key: &str) -> Result<KeyCode, KeymapError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    match key {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Space),
        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdown" | "pgdn" => Ok(KeyCode::PageDown),
        _ => key
            .strip_prefix('f')
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=24).contains(n))
            .map(KeyCode::F)
            .ok_or_else(|| KeymapError::InvalidKey(format!("Unknown key: {}", key))),
    }
}

fn parse_conditions(when: Option<&[String]>) -> Result<Option<Vec<Condition>>, KeymapError> {
    let Some(conditions) = when else {
        return Ok(None);
    };
    conditions
        .iter()
        .map(|c| parse_condition(c))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn parse_condition(cond: &str) -> Result<Condition, KeymapError> {
    match cond.to_lowercase().as_str() {
        "editing" => Ok(Condition::Editing),
        "not_editing" | "notediting" => Ok(Condition::NotEditing),
        "selecting" => Ok(Condition::Selecting),
        "not_selecting" | "notselecting" => Ok(Condition::NotSelecting),
        "dragging" => Ok(Condition::Dragging),
        "not_dragging" | "notdragging" => Ok(Condition::NotDragging),
        _ => Err(KeymapError::InvalidCondition(cond.to_string())),
    }
}

fn current_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "linux"
    }
}

/// Errors that can occur when parsing keymaps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
    InvalidKey(String),
    InvalidCommand(String),
    InvalidCondition(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "IO error: {}", e),
            KeymapError::ParseError(e) => write!(f, "Parse error: {}", e),
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::InvalidCommand(c) => write!(f, "Invalid command: {}", c),
            KeymapError::InvalidCondition(c) => write!(f, "Invalid condition: {}", c),
        }
    }
}

impl std::error::Error for KeymapError {}

impl FromStr for Command {
    type Err = KeymapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Command::*;

        let command = match s {
            "MoveUp" => MoveUp,
            "MoveDown" => MoveDown,
            "MoveLeft" => MoveLeft,
            "MoveRight" => MoveRight,
            "NextCell" => NextCell,
            "PrevCell" => PrevCell,
            "RowStart" => RowStart,
            "RowEnd" => RowEnd,
            "FirstCell" => FirstCell,
            "LastCell" => LastCell,
            "ExtendUp" => ExtendUp,
            "ExtendDown" => ExtendDown,
            "ExtendLeft" => ExtendLeft,
            "ExtendRight" => ExtendRight,
            "SelectAll" => SelectAll,
            "Copy" => Copy,
            "Cut" => Cut,
            "Paste" => Paste,
            "ToggleEdit" => ToggleEdit,
            "ClearCells" => ClearCells,
            "Escape" => Escape,
            "Unbound" => Unbound,
            _ => return Err(KeymapError::InvalidCommand(s.to_string())),
        };
        Ok(command)
    }
}
