//! Collision queries: wall, self and food
//!
//! All three are pure reads over the current body. What a hit means
//! (ending the run, growing the snake) is the frame driver's decision, so
//! nothing in here mutates state.

use glam::Vec2;

use super::food::FoodField;
use super::segment::{Bounds, Segment};
use super::snake::Snake;
use super::state::Platform;

/// The head's two probe points: the front point offset by the radius to
/// either side across the travel axis.
fn leading_corners(head: &Segment, radius: f32) -> [Vec2; 2] {
    let across = head.direction.axis().cross().unit() * radius;
    [head.front + across, head.front - across]
}

/// Head front point past the platform half-extent on either plane axis
pub fn wall_collision(snake: &Snake, platform: &Platform) -> bool {
    let half = platform.half_extent();
    let front = snake.head().front;
    front.x.abs() > half || front.y.abs() > half
}

/// Leading corners probed against every segment from index 2 on.
///
/// Index 1 always meets the head at the turn joint and is excluded by
/// construction.
pub fn self_collision(snake: &Snake, radius: f32) -> bool {
    let corners = leading_corners(snake.head(), radius);
    snake.body.iter().skip(2).any(|seg| {
        let bounds = seg.bounds(radius);
        corners.iter().any(|&corner| bounds.contains(corner))
    })
}

/// First food item the head's leading corners probe into, if any
pub fn food_collision(snake: &Snake, food: &FoodField, radius: f32) -> Option<usize> {
    let corners = leading_corners(snake.head(), radius);
    food.items.iter().position(|&item| {
        let bounds = Bounds::around(item, radius);
        corners.iter().any(|&corner| bounds.contains(corner))
    })
}
