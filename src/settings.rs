//! User settings
//!
//! Read once at startup from the JSON file named by `WIND_IT_SETTINGS`.
//! Nothing is ever written back.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::audio::SoundCue;
use crate::consts::{DIFFICULTY_BOUND, MUSIC_VOLUME, START_DIFFICULTY};
use crate::error::{Error, Result};

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame rate the backend is asked to pace at
    pub target_fps: u32,

    // === Audio ===
    /// Volume applied to a dropped music track (0.0 - 1.0)
    pub music_volume: f32,
    /// Wind-up loop volume (0.0 - 1.0)
    pub wind_volume: f32,
    /// Button click volume (0.0 - 1.0)
    pub click_volume: f32,
    /// Jumpscare volume (0.0 - 1.0)
    pub jumpscare_volume: f32,
    /// Static loop played after death (0.0 - 1.0)
    pub static_volume: f32,

    // === Gameplay ===
    /// Difficulty the box starts at
    pub start_difficulty: i32,

    // === Window ===
    /// Initial window is the screen size divided by this
    pub screen_divisor: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: 60,

            music_volume: MUSIC_VOLUME,
            wind_volume: 1.0,
            click_volume: 1.0,
            jumpscare_volume: 0.6,
            static_volume: 0.6,

            start_difficulty: START_DIFFICULTY,

            screen_divisor: 5.0,
        }
    }
}

impl Settings {
    /// Environment variable holding the settings path
    pub const ENV_VAR: &'static str = "WIND_IT_SETTINGS";

    /// Volume for a sound cue
    pub fn cue_volume(&self, cue: SoundCue) -> f32 {
        match cue {
            SoundCue::Wind => self.wind_volume,
            SoundCue::Click => self.click_volume,
            SoundCue::Jumpscare => self.jumpscare_volume,
            SoundCue::PopStatic => self.static_volume,
        }
    }

    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a file
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `WIND_IT_SETTINGS` if set, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        let path = PathBuf::from(path);
        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.target_fps == 0 {
            return Err(Error::InvalidSettings("target_fps must be positive".into()));
        }
        let volumes = [
            ("music_volume", self.music_volume),
            ("wind_volume", self.wind_volume),
            ("click_volume", self.click_volume),
            ("jumpscare_volume", self.jumpscare_volume),
            ("static_volume", self.static_volume),
        ];
        for (name, vol) in volumes {
            if !(0.0..=1.0).contains(&vol) {
                return Err(Error::InvalidSettings(format!("{name} must be within 0.0..=1.0")));
            }
        }
        if !(0..=DIFFICULTY_BOUND).contains(&self.start_difficulty) {
            return Err(Error::InvalidSettings(format!(
                "start_difficulty must be within 0..={DIFFICULTY_BOUND}"
            )));
        }
        if !(self.screen_divisor > 0.0) {
            return Err(Error::InvalidSettings("screen_divisor must be positive".into()));
        }
        Ok(())
    }
}
