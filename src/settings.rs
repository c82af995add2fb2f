//! Game settings
//!
//! Loaded from a JSON file; any field left out takes its default.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::renderer::Palette;

/// Errors raised while loading or checking settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame buffer size in pixels
    pub window_width: u32,
    pub window_height: u32,

    /// Seconds advanced per tick
    pub fixed_dt: f32,

    /// Launch velocity of the ball, units per second
    pub ball_velocity: Vec2,

    /// Encode presented frames with the gamma tables
    pub gamma_correct: bool,

    /// Background and entity colors
    pub palette: Palette,

    /// Headless runs quit after this many frames (0 = no limit)
    pub demo_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: PLAYFIELD_WIDTH as u32,
            window_height: PLAYFIELD_HEIGHT as u32,
            fixed_dt: SIM_DT,
            ball_velocity: BALL_START_VELOCITY,
            gamma_correct: false,
            palette: Palette::default(),
            demo_frames: 600,
        }
    }
}

impl Settings {
    /// Read and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json_pretty(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(SettingsError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if !(self.fixed_dt.is_finite() && self.fixed_dt > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "fixed_dt must be positive, got {}",
                self.fixed_dt
            )));
        }
        if !self.ball_velocity.is_finite() {
            return Err(SettingsError::Invalid("ball_velocity must be finite".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::colors;

    #[test]
    fn test_defaults_match_playfield() {
        let settings = Settings::default();
        assert_eq!(settings.window_width, 800);
        assert_eq!(settings.window_height, 600);
        assert_eq!(settings.ball_velocity, Vec2::new(200.0, 200.0));
        assert_eq!(settings.palette.background, colors::BACKGROUND);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let json = r#"{ "gamma_correct": true, "demo_frames": 5 }"#;
        let settings = Settings::from_json(json).unwrap();
        assert!(settings.gamma_correct);
        assert_eq!(settings.demo_frames, 5);
        assert_eq!(settings.fixed_dt, SIM_DT);
        assert_eq!(settings.palette, Palette::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut settings = Settings::default();
        settings.ball_velocity = Vec2::new(-150.0, 250.0);
        settings.palette.by_kind = Some(Default::default());
        let json = settings.to_json_pretty().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "fixed_dt": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        let err = Settings::from_json(r#"{ "window_width": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load("/definitely/not/here/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
        assert!(err.to_string().contains("settings.json"));
    }
}
