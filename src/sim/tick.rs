//! Per-tick order of operations
//!
//! Thin glue over the sim components, keeping the host loop's sequencing
//! in one place: periodic food spawn, head advance, then collision checks.
//! Policy on collision results lives here, not in the detector.

use super::collision;
use super::segment::Direction;
use super::state::{GameState, SimPhase};

/// Externally polled input for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Requested travel direction; `None` keeps the current one
    pub direction: Option<Direction>,
}

/// Advance the simulation by one tick of `dt` seconds.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == SimPhase::GameOver {
        return;
    }

    let cfg = state.cfg;

    // Spawn cadence counts from tick zero, so a fresh run gets its first
    // food attempt immediately.
    if state.time_ticks.is_multiple_of(cfg.food_spawn_interval_ticks) {
        state
            .food
            .try_spawn(&state.snake, &state.platform, cfg.snake_radius);
    }
    state.time_ticks += 1;

    let requested = input.direction.unwrap_or(state.snake.current_direction);
    state.snake.advance(requested, dt, &cfg);

    if collision::wall_collision(&state.snake, &state.platform)
        || collision::self_collision(&state.snake, cfg.snake_radius)
    {
        state.phase = SimPhase::GameOver;
        return;
    }

    if let Some(index) = collision::food_collision(&state.snake, &state.food, cfg.snake_radius) {
        state.food.remove(index);
        state.snake.grow(cfg.growth_per_food);
        state.food_eaten += 1;
    }
}
