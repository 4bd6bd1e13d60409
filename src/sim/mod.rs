//! Deterministic simulation module
//!
//! All gameplay logic lives here. The module is pure and self-contained:
//! - Seeded RNG only (food spawning)
//! - One `GameState` context value, owned by the host loop
//! - No rendering or platform dependencies

pub mod collision;
pub mod food;
pub mod segment;
pub mod snake;
pub mod state;
pub mod tick;

pub use collision::{food_collision, self_collision, wall_collision};
pub use food::FoodField;
pub use segment::{Axis, Bounds, Direction, Segment};
pub use snake::Snake;
pub use state::{GameState, Platform, SimPhase};
pub use tick::{TickInput, tick};
