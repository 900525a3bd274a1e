//! User settings.
//!
//! Settings live in `<config_dir>/gridsmith/settings.json`. Every key is
//! optional; missing keys fall back to the built-in defaults and unknown keys
//! are ignored. A missing file is not an error. An unreadable or malformed file
//! is logged and replaced by defaults so the editor always starts.

use crate::constants::{
    DEFAULT_COLUMNS, DEFAULT_GAP, DEFAULT_MOVE_THROTTLE_MS, DEFAULT_ROWS, DEFAULT_WINDOW_HEIGHT,
    DEFAULT_WINDOW_WIDTH,
};
use crate::error::{GridError, GridResult};
use crate::types::GridConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const SETTINGS_DIR: &str = "gridsmith";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Column count of a fresh grid
    pub default_columns: i32,
    /// Row count of a fresh grid
    pub default_rows: i32,
    /// Gap of a fresh grid, in spacing units
    pub default_gap: i32,
    /// Minimum milliseconds between applied pointer moves (0 = every move)
    pub move_throttle_ms: u64,
    /// Initial window width in pixels
    pub window_width: f32,
    /// Initial window height in pixels
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_columns: DEFAULT_COLUMNS,
            default_rows: DEFAULT_ROWS,
            default_gap: DEFAULT_GAP,
            move_throttle_ms: DEFAULT_MOVE_THROTTLE_MS,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl Settings {
    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            tracing::debug!("No config directory, using default settings");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> GridResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GridError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| GridError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse settings from JSON text
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Grid configuration a new session starts with
    pub fn initial_grid(&self) -> GridConfig {
        GridConfig::new(self.default_columns, self.default_rows, self.default_gap)
    }

    pub fn move_throttle(&self) -> Duration {
        Duration::from_millis(self.move_throttle_ms)
    }
}

/// Path of the settings file, if the platform has a config directory
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}
