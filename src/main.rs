//! Gridless Snake entry point
//!
//! Runs the simulation headless: logger up, tuning in, then a fixed-step
//! session steered by a small autopilot until the run ends. A windowed
//! host would poll real input instead of the autopilot and hand each
//! `scene::build_frame` snapshot to its renderer.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use gridless_snake::config::SimConfig;
use gridless_snake::consts::SIM_DT;
use gridless_snake::scene;
use gridless_snake::sim::{Direction, GameState, SimPhase, TickInput, tick};

/// How close the head may get to a wall before the autopilot steers away
const WALL_MARGIN: f32 = 0.6;

/// Demo steering: turn toward the platform center whenever the head closes
/// in on the wall ahead.
fn autopilot(state: &GameState) -> Option<Direction> {
    let half = state.platform.half_extent();
    let head = state.snake.head();
    let front = head.front;

    match head.direction {
        Direction::Up | Direction::Down => {
            let ahead = if head.direction == Direction::Up {
                -front.x
            } else {
                front.x
            };
            if ahead > half - WALL_MARGIN {
                // Swing onto the z axis, aiming back toward the center.
                return Some(if front.y > 0.0 {
                    Direction::Right
                } else {
                    Direction::Left
                });
            }
        }
        Direction::Left | Direction::Right => {
            let ahead = if head.direction == Direction::Left {
                front.y
            } else {
                -front.y
            };
            if ahead > half - WALL_MARGIN {
                return Some(if front.x > 0.0 {
                    Direction::Up
                } else {
                    Direction::Down
                });
            }
        }
    }
    None
}

fn main() {
    env_logger::init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => match SimConfig::load(Path::new(&path)) {
            Ok(cfg) => {
                log::info!("loaded tuning from {path}");
                cfg
            }
            Err(err) => {
                log::warn!("ignoring tuning file {path}: {err}");
                SimConfig::default()
            }
        },
        None => SimConfig::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default();
    log::info!("starting run with seed {seed}");

    let mut state = GameState::new(cfg, seed);
    let mut input = TickInput::default();

    // Cap the session; the autopilot is cautious enough to circle for a
    // long time once the body has grown.
    const MAX_TICKS: u64 = 20_000;
    while state.phase == SimPhase::Playing && state.time_ticks < MAX_TICKS {
        input.direction = autopilot(&state);
        tick(&mut state, &input, SIM_DT);
    }

    let frame = scene::build_frame(&state);
    log::info!(
        "run over after {} ticks ({:?}): ate {}, length {:.2} of {:.2} across {} segments, {} boxes staged",
        state.time_ticks,
        state.phase,
        state.food_eaten,
        state.snake.traversed_length(),
        state.snake.target_length,
        state.snake.body.len(),
        1 + frame.snake.len() + frame.food.len(),
    );
}
