//! Game settings and preferences
//!
//! Read at run reset; the simulation never writes them back.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use crate::sim::{CarColor, Difficulty, VehicleClass};
use crate::sim::RunConfig;

/// Backdrop palette for the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BackgroundMode {
    #[default]
    Day,
    Sunset,
    Night,
}

impl BackgroundMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundMode::Day => "Day",
            BackgroundMode::Sunset => "Sunset",
            BackgroundMode::Night => "Night",
        }
    }

    pub fn next(self) -> Self {
        match self {
            BackgroundMode::Day => BackgroundMode::Sunset,
            BackgroundMode::Sunset => BackgroundMode::Night,
            BackgroundMode::Night => BackgroundMode::Day,
        }
    }
}

/// Errors reading a settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Gameplay ===
    /// Traffic density
    pub difficulty: Difficulty,
    /// Vehicle class driven in the next run
    pub vehicle: VehicleClass,
    /// Paint for the player's car
    pub color: CarColor,

    // === Presentation ===
    pub background: BackgroundMode,

    // === Audio ===
    pub sound_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            vehicle: VehicleClass::Sedan,
            color: CarColor::Red,
            background: BackgroundMode::Day,
            sound_enabled: true,
            master_volume: 0.8,
        }
    }
}

impl Settings {
    /// Choices that shape the next run
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            difficulty: self.difficulty,
            vehicle: self.vehicle,
            color: self.color,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} ({}), using default settings", e, path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "difficulty": "Hard", "vehicle": "Suv" }"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.vehicle, VehicleClass::Suv);
        assert!(settings.sound_enabled);
        assert_eq!(settings.color, CarColor::Red);
    }

    #[test]
    fn test_volume_clamped() {
        let settings = Settings::from_json(r#"{ "master_volume": 3.5 }"#).unwrap();
        assert_eq!(settings.master_volume, 1.0);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Some(Path::new("/nonexistent/road-racer/settings.json")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_json_roundtrip_and_run_config() {
        let settings = Settings {
            difficulty: Difficulty::Medium,
            color: CarColor::Orange,
            ..Default::default()
        };
        let back = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back, settings);

        let config = back.run_config();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.color, CarColor::Orange);
    }

    #[test]
    fn test_background_cycle() {
        assert_eq!(BackgroundMode::Night.next(), BackgroundMode::Day);
    }
}
