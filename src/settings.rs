//! Game settings and preferences
//!
//! Persisted as JSON in the current working directory, or wherever
//! `BLOCK_ROLL_SETTINGS` points.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::sim::camera::CameraMode;
use crate::sim::level::LevelIndex;
use crate::sim::segment::HudVisibility;

/// Settings I/O failures
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings file could not be read or written: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Camera mode on startup and after a level change
    pub default_camera: CameraMode,

    // === HUD ===
    /// Show the move counter
    pub show_hud: bool,
    /// Show the minutes:seconds timer
    pub show_timer: bool,

    /// Level to start on
    pub start_level: LevelIndex,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_camera: CameraMode::Home,
            show_hud: true,
            show_timer: true,
            start_level: LevelIndex::Intro,
        }
    }
}

impl Settings {
    /// Environment variable that overrides the settings path
    pub const PATH_ENV: &'static str = "BLOCK_ROLL_SETTINGS";

    /// Settings file used when the override is unset
    const DEFAULT_FILE: &'static str = "block_roll_settings.json";

    /// The timer is part of the HUD; hiding the HUD hides it too
    pub fn effective_show_timer(&self) -> bool {
        self.show_hud && self.show_timer
    }

    /// HUD groups to draw
    pub fn hud_visibility(&self) -> HudVisibility {
        HudVisibility {
            moves: self.show_hud,
            timer: self.effective_show_timer(),
        }
    }

    /// Resolved settings path
    pub fn path() -> PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load() -> Self {
        let path = Self::path();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to the resolved path
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::path();
        self.save_to(&path)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("block_roll_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.default_camera, CameraMode::Home);
        assert_eq!(settings.start_level, LevelIndex::Intro);
        assert!(settings.effective_show_timer());
    }

    #[test]
    fn test_hidden_hud_hides_timer() {
        let settings = Settings {
            show_hud: false,
            ..Default::default()
        };
        assert!(!settings.effective_show_timer());
        assert_eq!(
            settings.hud_visibility(),
            HudVisibility {
                moves: false,
                timer: false
            }
        );
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let settings = Settings {
            default_camera: CameraMode::Behind,
            show_timer: false,
            start_level: LevelIndex::Main,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, r#"{ "start_level": "Main" }"#).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.start_level, LevelIndex::Main);
        assert!(loaded.show_hud);
    }

    #[test]
    fn test_errors() {
        let missing = temp_path("missing");
        assert!(matches!(Settings::load_from(&missing), Err(SettingsError::Io(_))));

        let path = temp_path("garbage");
        std::fs::write(&path, "not json").unwrap();
        let result = Settings::load_from(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }
}
