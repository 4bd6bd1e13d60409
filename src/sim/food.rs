//! Food spawning and consumption
//!
//! Spawn attempts draw from a seeded RNG and are validated against the
//! snake body; a rejected attempt is simply dropped until the next spawn
//! tick comes around. Food may land on other food; overlaps are allowed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::segment::Bounds;
use super::snake::Snake;
use super::state::Platform;

/// Unordered collection of live food points plus the spawn RNG
#[derive(Debug, Clone)]
pub struct FoodField {
    /// Live food points in the plane
    pub items: Vec<Vec2>,
    rng: Pcg32,
}

impl FoodField {
    pub fn new(seed: u64) -> Self {
        Self {
            items: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Remove a consumed item
    pub fn remove(&mut self, index: usize) -> Vec2 {
        self.items.remove(index)
    }

    /// One spawn attempt: a uniform candidate over the platform inset by
    /// the snake radius, kept only when its box clears the whole body.
    pub fn try_spawn(&mut self, snake: &Snake, platform: &Platform, radius: f32) {
        let candidate = Vec2::new(
            self.sample_coord(platform.scale, radius),
            self.sample_coord(platform.scale, radius),
        );
        if placement_clear(candidate, snake, radius) {
            self.items.push(candidate);
        }
    }

    /// Uniform over the platform extent, scaled inward so a spawned box
    /// cannot touch the wall
    fn sample_coord(&mut self, scale: f32, radius: f32) -> f32 {
        let u: f32 = self.rng.random();
        (scale * u - scale / 2.0) * ((scale - 2.0 * radius) / scale)
    }
}

/// All four corners of the candidate's box must stay out of every body
/// segment's bounds.
fn placement_clear(candidate: Vec2, snake: &Snake, radius: f32) -> bool {
    let corners = [
        candidate + Vec2::new(radius, radius),
        candidate + Vec2::new(radius, -radius),
        candidate + Vec2::new(-radius, radius),
        candidate + Vec2::new(-radius, -radius),
    ];
    snake.body.iter().all(|seg| {
        let bounds = seg.bounds(radius);
        corners.iter().all(|&corner| !bounds.contains(corner))
    })
}
