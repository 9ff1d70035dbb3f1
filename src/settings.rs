//! Game settings and preferences
//!
//! Read from a JSON file at startup. Missing fields take their defaults.

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BALL_START_VELOCITY, PADDLE_SPEED};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    /// Window title
    pub title: String,
    /// Wait for vertical sync when presenting
    pub vsync: bool,

    // === Gameplay ===
    /// Paddle speed (units per second)
    pub paddle_speed: f32,
    /// Ball velocity at launch (units per second)
    pub ball_velocity: Vec2,
    /// Freeze the ball once every block is gone
    pub stop_when_cleared: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Breakout".to_string(),
            vsync: true,
            paddle_speed: PADDLE_SPEED,
            ball_velocity: BALL_START_VELOCITY,
            stop_when_cleared: false,
        }
    }
}

impl Settings {
    /// Environment variable overriding the settings path
    pub const PATH_ENV: &'static str = "BREAKOUT_SETTINGS";

    /// Settings file used when the environment variable is unset
    const DEFAULT_PATH: &'static str = "breakout_settings.json";

    /// Path settings are read from
    pub fn path() -> PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PATH))
    }

    /// Load settings from the default location
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Present mode matching the vsync preference
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}
