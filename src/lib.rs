//! Gridless Snake - a continuously-growing, grid-free snake simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (body polyline, food, collisions, tick)
//! - `scene`: Core-to-renderer geometry (world-space box instances)
//! - `config`: Data-driven simulation tuning
//!
//! Rendering, windowing and input polling are external collaborators: a
//! renderer reads `scene::build_frame` after each tick, and the host loop
//! feeds one requested direction per tick into `sim::tick`.

pub mod config;
pub mod scene;
pub mod sim;

pub use config::SimConfig;

/// Simulation constants
pub mod consts {
    /// Fixed timestep used by the headless driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Head speed in world units per second
    pub const SNAKE_SPEED: f32 = 1.0;
    /// Half-width of the snake body (also the food half-extent)
    pub const SNAKE_RADIUS: f32 = 0.125;

    /// Side length of the square platform, centered at the plane origin
    pub const PLATFORM_SCALE: f32 = 5.0;

    /// Ticks between food spawn attempts
    pub const FOOD_SPAWN_INTERVAL_TICKS: u64 = 125;
    /// Target-length gain per food piece (one body width)
    pub const GROWTH_PER_FOOD: f32 = 2.0 * SNAKE_RADIUS;

    /// Target length a fresh snake grows toward
    pub const INITIAL_TARGET_LENGTH: f32 = 1.0;

    /// Platform center height and thickness (world y axis)
    pub const PLATFORM_Y: f32 = -1.0;
    pub const PLATFORM_THICKNESS: f32 = 0.5;
    /// Height of snake body and food boxes above the plane
    pub const BODY_Y: f32 = 0.5;
}
