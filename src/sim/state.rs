//! Simulation context: everything the frame driver owns and mutates
//!
//! The whole simulation lives in one `GameState` value passed to each
//! component call; there are no module-level globals. The driver creates
//! it once and drives it until the phase turns terminal.

use crate::config::SimConfig;

use super::food::FoodField;
use super::snake::Snake;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimPhase {
    /// Snake alive and advancing
    Playing,
    /// A wall or self collision ended the run; further ticks are no-ops.
    /// Hosts treat this as their close/exit signal.
    GameOver,
}

/// The square legal play area, centered at the plane origin
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    /// Side length
    pub scale: f32,
}

impl Platform {
    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.scale / 2.0
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Tuning this run was started with
    pub cfg: SimConfig,
    /// Food spawn seed, kept for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: SimPhase,
    pub snake: Snake,
    pub food: FoodField,
    pub platform: Platform,
    /// Food pieces consumed this run
    pub food_eaten: u32,
}

impl GameState {
    /// Fresh run: one-segment snake at the platform center, empty food
    /// field seeded for deterministic spawning.
    pub fn new(cfg: SimConfig, seed: u64) -> Self {
        Self {
            seed,
            time_ticks: 0,
            phase: SimPhase::Playing,
            snake: Snake::new(),
            food: FoodField::new(seed),
            platform: Platform {
                scale: cfg.platform_scale,
            },
            food_eaten: 0,
            cfg,
        }
    }
}
