//! Game settings and preferences
//!
//! Persisted as JSON in the user's home directory, separately from any
//! session state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Selectable bike liveries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BikeStyle {
    #[default]
    Classic,
    Sport,
    Retro,
}

impl BikeStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BikeStyle::Classic => "classic",
            BikeStyle::Sport => "sport",
            BikeStyle::Retro => "retro",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(BikeStyle::Classic),
            "sport" => Some(BikeStyle::Sport),
            "retro" => Some(BikeStyle::Retro),
            _ => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Bike livery the host builds the sprite bank from
    pub bike_style: BikeStyle,
    /// Show the position/road/direction debug rows in the HUD
    pub debug_overlay: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bike_style: BikeStyle::Classic,
            debug_overlay: false,
        }
    }
}

impl Settings {
    const FILE_NAME: &'static str = ".moto-rush.json";

    /// Config file in the user's home directory, or the working directory
    /// when no home is set
    fn default_path() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_default()
            .join(Self::FILE_NAME)
    }

    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Any read or parse failure falls back to defaults
    pub fn load_from(path: &Path) -> Self {
        let parsed = fs::read_to_string(path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok());
        match parsed {
            Some(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        self.save_to(&Self::default_path());
    }

    pub fn save_to(&self, path: &Path) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            match fs::write(path, json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Failed to save settings to {}: {e}", path.display()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_strings_round_trip() {
        for style in [BikeStyle::Classic, BikeStyle::Sport, BikeStyle::Retro] {
            assert_eq!(BikeStyle::from_str(style.as_str()), Some(style));
        }
        assert_eq!(BikeStyle::from_str("SPORT"), Some(BikeStyle::Sport));
        assert_eq!(BikeStyle::from_str("tron"), None);
    }

    #[test]
    fn test_default_settings() {
        let s = Settings::default();
        assert_eq!(s.bike_style, BikeStyle::Classic);
        assert!(!s.debug_overlay);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let s = Settings::load_from(Path::new("/nonexistent/moto-rush.json"));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path =
            std::env::temp_dir().join(format!("moto-rush-settings-{}.json", std::process::id()));
        let saved = Settings {
            bike_style: BikeStyle::Retro,
            debug_overlay: true,
        };
        saved.save_to(&path);
        assert_eq!(Settings::load_from(&path), saved);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_garbage_file_falls_back_to_defaults() {
        let path =
            std::env::temp_dir().join(format!("moto-rush-garbage-{}.json", std::process::id()));
        fs::write(&path, "not json at all").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
        fs::remove_file(&path).ok();
    }
}
