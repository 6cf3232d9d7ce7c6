//! Configurable keyboard mapping for the grid
//!
//! - Maps keystrokes to grid commands
//! - Platform-specific command modifier (Cmd on macOS, Ctrl elsewhere)
//! - User customization via YAML
//! - Bindings conditioned on the grid's session (editing, selecting, dragging)
//!
//! ```text
//! Keystroke → Keymap::lookup_with_context() → Command → Vec<GridMsg>
//! ```

mod binding;
mod command;
mod config;
mod context;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use context::{Condition, KeyContext};
pub use defaults::{
    default_bindings, get_default_keymap_yaml, load_default_keymap, merge_bindings,
};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
