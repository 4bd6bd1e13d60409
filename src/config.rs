//! Simulation tuning
//!
//! Defaults mirror the built-in constants; a JSON file can override any
//! subset of them for balance experiments without recompiling. Tuning is
//! the only fallible surface the crate has, and callers are expected to
//! fall back to defaults on error.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable simulation parameters, handed to the sim as one context value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Head speed in world units per second
    pub snake_speed: f32,
    /// Half-width of the snake body (also the food half-extent)
    pub snake_radius: f32,
    /// Side length of the square platform
    pub platform_scale: f32,
    /// Ticks between food spawn attempts
    pub food_spawn_interval_ticks: u64,
    /// Target-length gain per food piece
    pub growth_per_food: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            snake_speed: SNAKE_SPEED,
            snake_radius: SNAKE_RADIUS,
            platform_scale: PLATFORM_SCALE,
            food_spawn_interval_ticks: FOOD_SPAWN_INTERVAL_TICKS,
            growth_per_food: GROWTH_PER_FOOD,
        }
    }
}

impl SimConfig {
    /// Load tuning from a JSON file. Fields absent from the file keep
    /// their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Why a tuning file could not be used
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "reading tuning file: {err}"),
            ConfigError::Parse(err) => write!(f, "parsing tuning file: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}
