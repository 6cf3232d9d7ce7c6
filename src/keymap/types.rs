//! Key event types: Modifiers, KeyCode, Keystroke

use std::fmt;
use std::str::FromStr;

use super::config::{parse_key_string, KeymapError};

const CTRL_BIT: u8 = 1 << 0;
const SHIFT_BIT: u8 = 1 << 1;
const ALT_BIT: u8 = 1 << 2;
const META_BIT: u8 = 1 << 3;

/// Held modifier keys as a bitfield
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(CTRL_BIT);
    pub const SHIFT: Modifiers = Modifiers(SHIFT_BIT);
    pub const ALT: Modifiers = Modifiers(ALT_BIT);
    /// Cmd on macOS, Win elsewhere
    pub const META: Modifiers = Modifiers(META_BIT);

    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        Modifiers(
            (ctrl as u8) * CTRL_BIT
                | (shift as u8) * SHIFT_BIT
                | (alt as u8) * ALT_BIT
                | (meta as u8) * META_BIT,
        )
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & CTRL_BIT != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & SHIFT_BIT != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & ALT_BIT != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & META_BIT != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// The platform "command" modifier: Cmd on macOS, Ctrl elsewhere
    pub fn cmd() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers::META
        } else {
            Modifiers::CTRL
        }
    }

    /// Check if the platform command key is held
    pub fn has_cmd(self) -> bool {
        self.contains(Self::cmd())
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (self.ctrl(), "Ctrl"),
            (self.shift(), "Shift"),
            (self.alt(), if cfg!(target_os = "macos") { "Option" } else { "Alt" }),
            (self.meta(), if cfg!(target_os = "macos") { "Cmd" } else { "Win" }),
        ];
        let held: Vec<&str> = names
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&held.join("+"))
    }
}

/// Logical key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key, normalized to lowercase
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            KeyCode::Up => f.write_str("↑"),
            KeyCode::Down => f.write_str("↓"),
            KeyCode::Left => f.write_str("←"),
            KeyCode::Right => f.write_str("→"),
            KeyCode::F(n) => write!(f, "F{}", n),
            other => write!(f, "{:?}", other),
        }
    }
}

/// A key with the modifiers held when it was pressed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    /// Character keys are stored lowercase; Shift lives in `mods`
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        let key = match key {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        Self { key, mods }
    }

    /// Keystroke with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    pub fn char(c: char) -> Self {
        Self::char_with_mods(c, Modifiers::NONE)
    }

    pub fn char_with_mods(c: char, mods: Modifiers) -> Self {
        Self::new(KeyCode::Char(c), mods)
    }

    /// Same key with Shift added
    pub fn shifted(self) -> Self {
        Self {
            key: self.key,
            mods: self.mods | Modifiers::SHIFT,
        }
    }

    /// Platform-style label: symbols on macOS, `Ctrl+` prefixes elsewhere
    pub fn display_string(&self) -> String {
        let mut out = String::new();
        if cfg!(target_os = "macos") {
            for (on, sym) in [
                (self.mods.ctrl(), "⌃"),
                (self.mods.alt(), "⌥"),
                (self.mods.shift(), "⇧"),
                (self.mods.meta(), "⌘"),
            ] {
                if on {
                    out.push_str(sym);
                }
            }
        } else {
            for (on, prefix) in [
                (self.mods.ctrl(), "Ctrl+"),
                (self.mods.alt(), "Alt+"),
                (self.mods.shift(), "Shift+"),
                (self.mods.meta(), "Win+"),
            ] {
                if on {
                    out.push_str(prefix);
                }
            }
        }
        out.push_str(&self.key.to_string());
        out
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.mods, self.key)
        }
    }
}

/// Parses the keymap notation, e.g. `"cmd+shift+home"`
impl FromStr for Keystroke {
    type Err = KeymapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_string(s)
    }
}
