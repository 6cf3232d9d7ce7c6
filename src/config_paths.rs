//! Where gridedit keeps its files
//!
//! Everything lives in one directory:
//! - Unix/macOS: `$XDG_CONFIG_HOME/gridedit/`, else `~/.config/gridedit/`
//! - Windows: `%APPDATA%\gridedit\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "gridedit";

/// Prefix of the daily-rotated log files
pub const LOG_FILE_PREFIX: &str = "gridedit.log";

pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        unix_config_dir(env::var_os("XDG_CONFIG_HOME").map(PathBuf::from), dirs::home_dir())
    }
}

/// An empty `XDG_CONFIG_HOME` counts as unset
#[cfg_attr(target_os = "windows", allow(dead_code))]
fn unix_config_dir(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    xdg_config_home
        .filter(|dir| !dir.as_os_str().is_empty())
        .or_else(|| home.map(|home| home.join(".config")))
        .map(|base| base.join(APP_DIR))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// User keymap merged over the embedded defaults
pub fn keymap_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("keymap.yaml"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Create `<config dir>/logs` if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = config_dir()
        .ok_or_else(|| "No config directory available".to_string())?
        .join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}
