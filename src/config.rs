//! Grid configuration persistence
//!
//! Stores user preferences in `~/.config/gridedit/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Lower bound for column widths during a resize drag, in pixels
pub const DEFAULT_MIN_COLUMN_WIDTH: f64 = 100.0;

/// Grid configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Columns never shrink below this width while resizing
    #[serde(default = "default_min_column_width")]
    pub min_column_width: f64,

    /// Merge `~/.config/gridedit/keymap.yaml` over the built-in bindings
    #[serde(default = "default_true")]
    pub load_user_keymap: bool,
}

fn default_min_column_width() -> f64 {
    DEFAULT_MIN_COLUMN_WIDTH
}

fn default_true() -> bool {
    true
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_column_width: default_min_column_width(),
            load_user_keymap: true,
        }
    }
}

impl GridConfig {
    /// Load config from the user config dir, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file; unreadable or invalid files fall
    /// back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<GridConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    fn sanitized(mut self) -> Self {
        if !self.min_column_width.is_finite() || self.min_column_width < 0.0 {
            tracing::warn!(
                "Ignoring invalid min_column_width {}, using {}",
                self.min_column_width,
                DEFAULT_MIN_COLUMN_WIDTH
            );
            self.min_column_width = DEFAULT_MIN_COLUMN_WIDTH;
        }
        self
    }
}
