//! User-editable settings persisted in `settings.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the settings file.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Which storage port implementation the score store writes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
    Sqlite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogicSettings {
    /// Logic loop ticks per second.
    pub tick_rate: u32,
}

impl Default for LogicSettings {
    fn default() -> Self {
        Self { tick_rate: 200 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickSpeedSettings {
    /// Length of the click window a new click-speed game starts with.
    pub duration_secs: u32,
}

impl Default for ClickSpeedSettings {
    fn default() -> Self {
        Self { duration_secs: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub enabled: bool,
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    /// Directory for the file backend, database file for SQLite.
    pub path: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            path: PathBuf::from("data"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsState {
    pub logic: LogicSettings,
    pub click_speed: ClickSpeedSettings,
    pub server: ServerSettings,
    pub storage: StorageSettings,
}

impl SettingsState {
    /// Loads `settings.toml`, writing defaults on first run.
    pub fn load() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            let settings = Self::default();
            if let Err(e) = settings.save_to(path) {
                log::warn!("SETTINGS: Could not write default settings: {}", e);
            }
            return settings;
        }
        Self::load_from(path).unwrap_or_else(|e| {
            log::error!("SETTINGS: {}. Using defaults.", e);
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
        Self::from_toml(&content).map_err(|e| format!("Failed to parse {:?}: {}", path, e))
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        let mut settings: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        let content = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, content).map_err(|e| e.to_string())
    }

    /// Clamps values the game loop cannot run with.
    fn sanitize(&mut self) {
        self.logic.tick_rate = self.logic.tick_rate.clamp(10, 1000);
        self.click_speed.duration_secs = self.click_speed.duration_secs.clamp(
            crate::state::click_speed::MIN_DURATION_SECS,
            crate::state::click_speed::MAX_DURATION_SECS,
        );
    }
}
