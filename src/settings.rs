//! Game settings and preferences
//!
//! Read from `face-catcher.json` in the working directory when present.
//! Every field has a default, so a partial file only overrides what it names.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for spawns and particles (random when unset)
    pub seed: Option<u64>,
    /// Camera frame rate the loop is paced to
    pub target_fps: u32,
    /// Flip frames horizontally so the feed reads like a mirror
    pub mirror: bool,

    // === Visual Effects ===
    /// Particle bursts on catches
    pub particles: bool,

    // === Audio ===
    /// Play catch/avoid beeps
    pub sound: bool,
    /// Master volume (0.0 - 1.0)
    pub volume: f32,

    /// Gameplay balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            target_fps: 30,
            mirror: true,

            particles: true,

            sound: true,
            volume: 0.5,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Settings file looked up by [`Settings::load`]
    pub const FILE_NAME: &'static str = "face-catcher.json";

    /// Parse settings from JSON text and validate them
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from the working directory, falling back to defaults
    pub fn load() -> Result<Self, GameError> {
        Self::load_from(Self::FILE_NAME)
    }

    /// Load settings from `path`. A missing file yields defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Reject values the game loop cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        if self.target_fps == 0 {
            return Err(GameError::InvalidSettings("target_fps must be non-zero".into()));
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(GameError::InvalidSettings(format!(
                "volume {} outside 0.0 - 1.0",
                self.volume
            )));
        }
        self.tuning.check().map_err(GameError::InvalidSettings)
    }

    /// Effective cue volume (respects the sound toggle)
    pub fn effective_volume(&self) -> f32 {
        if self.sound { self.volume } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "tuning": { "max_speed": 12 } }"#)
            .expect("valid settings");
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.tuning.max_speed, 12);
        assert_eq!(settings.tuning.initial_speed, 5);
        assert_eq!(settings.target_fps, 30);
        assert!(settings.mirror);
    }

    #[test]
    fn test_invalid_volume_rejected() {
        let result = Settings::from_json(r#"{ "volume": 3.0 }"#);
        assert!(matches!(result, Err(GameError::InvalidSettings(_))));
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let result = Settings::from_json(r#"{ "tuning": { "game_duration_secs": 0 } }"#);
        assert!(matches!(result, Err(GameError::InvalidSettings(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = Settings::from_json("{ seed: ");
        assert!(matches!(result, Err(GameError::SettingsParse(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load_from("/nonexistent/face-catcher.json").expect("defaults");
        assert_eq!(settings.tuning, Tuning::default());
    }

    #[test]
    fn test_effective_volume_respects_sound_toggle() {
        let settings = Settings {
            sound: false,
            ..Default::default()
        };
        assert_eq!(settings.effective_volume(), 0.0);
    }
}
