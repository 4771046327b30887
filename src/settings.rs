//! Game settings and preferences
//!
//! Stored as JSON. A missing or malformed file never stops the game: the
//! defaults are used and the problem is logged.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::tuning::VariantKind;

/// Audio preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl AudioSettings {
    /// Combined volume, clamped to the valid range
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume.clamp(0.0, 1.0) * self.sfx_volume.clamp(0.0, 1.0)
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which game variant to play
    pub variant: VariantKind,

    // === Audio ===
    pub audio: AudioSettings,

    // === Demo ===
    /// Let the autopilot play
    pub idle_mode: bool,
    /// Autopilot RNG seed
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: VariantKind::Volley,
            audio: AudioSettings::default(),
            idle_mode: false,
            seed: 0x5EED,
        }
    }
}

/// Settings file problems
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "cannot read settings: {e}"),
            SettingsError::Parse(e) => write!(f, "invalid settings: {e}"),
            SettingsError::Serialize(e) => write!(f, "cannot encode settings: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) | SettingsError::Serialize(e) => Some(e),
        }
    }
}

impl Settings {
    /// Strict parse
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(SettingsError::Parse)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self).map_err(SettingsError::Serialize)
    }

    /// Strict load; the file must exist and parse
    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(SettingsError::Io)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("{e} ({}), using default settings", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(SettingsError::Io)?;
        log::info!("Settings saved");
        Ok(())
    }
}
