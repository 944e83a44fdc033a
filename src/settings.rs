//! Game settings
//!
//! Loaded from an optional JSON file; any missing field takes its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Arena, speed and driver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Entities ===
    /// Paddle thickness (length is always 20% of the arena width)
    pub paddle_width: f32,
    /// Gap between each paddle and its wall
    pub paddle_margin: f32,
    /// Pixels per frame
    pub paddle_speed: f32,
    pub ball_size: f32,
    /// Pixels per frame
    pub ball_speed: f32,

    // === Driver ===
    pub frame_rate: u32,
    /// Serve RNG seed; derived from the clock when absent
    pub seed: Option<u64>,
    /// Frames the headless demo runs before exiting (0 = until quit)
    pub demo_frames: u64,
    /// Sleep between frames to hold `frame_rate`
    pub realtime: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: SCREEN_W,
            arena_height: SCREEN_H,

            paddle_width: PADDLE_WIDTH,
            paddle_margin: PADDLE_MARGIN,
            paddle_speed: PADDLE_SPEED,
            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,

            frame_rate: FRAME_RATE,
            seed: None,
            demo_frames: 3600,
            realtime: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::validated)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace non-positive sizes and speeds with their defaults
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        let fields = [
            (&mut self.arena_width, defaults.arena_width, "arena_width"),
            (&mut self.arena_height, defaults.arena_height, "arena_height"),
            (&mut self.paddle_width, defaults.paddle_width, "paddle_width"),
            (&mut self.paddle_speed, defaults.paddle_speed, "paddle_speed"),
            (&mut self.ball_size, defaults.ball_size, "ball_size"),
            (&mut self.ball_speed, defaults.ball_speed, "ball_speed"),
        ];
        for (value, default, name) in fields {
            if !(value.is_finite() && *value > 0.0) {
                log::warn!("{} = {} is not usable, using {}", name, value, default);
                *value = default;
            }
        }
        if !(self.paddle_margin.is_finite() && self.paddle_margin >= 0.0) {
            self.paddle_margin = defaults.paddle_margin;
        }
        if self.frame_rate == 0 {
            self.frame_rate = defaults.frame_rate;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_arena() {
        let settings = Settings::default();
        assert_eq!(settings.arena_width, 800.0);
        assert_eq!(settings.arena_height, 600.0);
        assert_eq!(settings.frame_rate, 60);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings =
            Settings::from_json(r#"{ "arena_width": 1024, "seed": 7 }"#).unwrap();
        assert_eq!(settings.arena_width, 1024.0);
        assert_eq!(settings.arena_height, 600.0);
        assert_eq!(settings.seed, Some(7));
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "frame_rate": -3 }"#).is_err());
    }

    #[test]
    fn test_validated_replaces_degenerate_values() {
        let settings = Settings::from_json(
            r#"{ "ball_size": 0, "paddle_speed": -4, "paddle_margin": -1, "frame_rate": 0 }"#,
        )
        .unwrap();
        assert_eq!(settings.ball_size, BALL_SIZE);
        assert_eq!(settings.paddle_speed, PADDLE_SPEED);
        assert_eq!(settings.paddle_margin, PADDLE_MARGIN);
        assert_eq!(settings.frame_rate, FRAME_RATE);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/nonexistent/paddle-duel.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_json_survives_save_and_load() {
        let settings = Settings {
            seed: Some(99),
            realtime: false,
            ..Settings::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
