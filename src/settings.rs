//! Player preferences
//!
//! Persisted as JSON under the platform config directory, separately from
//! any in-session state.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Persisted preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Master switch for music and sound-effect triggers
    pub audio_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            audio_enabled: true,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
        }
    }
}

impl Settings {
    fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("flycatch").join("settings.json"))
    }

    /// Load settings, falling back to defaults on any failure.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings file: {err}");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings. Best-effort; failures are logged and ignored.
    pub fn save(&self) {
        let Some(path) = Self::path() else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                log::warn!("could not create {}: {err}", parent.display());
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(&path, json) {
                    log::warn!("could not save settings: {err}");
                }
            }
            Err(err) => log::warn!("could not encode settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.audio_enabled);
        assert!(settings.master_volume > 0.0 && settings.master_volume <= 1.0);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            audio_enabled: false,
            master_volume: 0.5,
            sfx_volume: 0.25,
            music_volume: 0.0,
        };
        let json = serde_json::to_string(&settings).expect("encode");
        let back: Settings = serde_json::from_str(&json).expect("decode");
        assert_eq!(back, settings);
    }
}
