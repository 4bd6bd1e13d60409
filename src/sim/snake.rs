//! Snake state machine
//!
//! The body is an ordered polyline of axis-aligned segments, head first.
//! A perpendicular turn prepends a one-body-width corner segment whose
//! rectangle tiles flush with its neighbors; the tail's back point then
//! retracts continuously to pin total traversed length at the target once
//! the target has been reached for the first time.

use glam::Vec2;

use super::segment::{Direction, Segment};
use crate::config::SimConfig;
use crate::consts::INITIAL_TARGET_LENGTH;

/// The snake body and growth state
#[derive(Debug, Clone)]
pub struct Snake {
    /// Ordered segments, index 0 = head
    pub body: Vec<Segment>,
    /// Latest requested direction. Differs from the head's direction only
    /// until a rejected reversal resets it.
    pub current_direction: Direction,
    /// Length the body grows toward; only ever increases
    pub target_length: f32,
}

impl Snake {
    /// Fresh snake: a single half-unit segment heading up the platform
    pub fn new() -> Self {
        Self {
            body: vec![Segment::new(
                Vec2::new(0.0, 0.0),
                Vec2::new(0.5, 0.0),
                Direction::Up,
            )],
            current_direction: Direction::Up,
            target_length: INITIAL_TARGET_LENGTH,
        }
    }

    /// The actively advancing head segment
    #[inline]
    pub fn head(&self) -> &Segment {
        &self.body[0]
    }

    /// Sum of segment lengths, each along its own axis
    pub fn traversed_length(&self) -> f32 {
        self.body.iter().map(Segment::length).sum()
    }

    /// Raise the target length (a food piece was consumed)
    pub fn grow(&mut self, amount: f32) {
        self.target_length += amount;
    }

    /// Advance one tick: apply the requested direction, move the head by
    /// `speed * dt` along its own axis, and retract the tail when the body
    /// had already reached its target length.
    pub fn advance(&mut self, requested: Direction, dt: f32, cfg: &SimConfig) {
        // Retraction is decided on the length measured at entry, before the
        // turn. A turn itself is length-neutral: the head yields exactly
        // the width the corner piece adds.
        let retract = self.traversed_length() >= self.target_length;

        self.current_direction = requested;
        if requested != self.body[0].direction {
            self.apply_turn(requested, cfg.snake_radius);
        }

        let step = cfg.snake_speed * dt;
        let head = &mut self.body[0];
        head.front += head.direction.unit() * step;

        if retract {
            self.retract_tail(step);
        }
    }

    /// Prepend a corner segment for a perpendicular turn. A reversal is not
    /// a move: `current_direction` resets to the head's direction and the
    /// body is untouched.
    fn apply_turn(&mut self, requested: Direction, radius: f32) {
        let old = self.body[0].direction;
        if !requested.is_perpendicular_to(old) {
            self.current_direction = old;
            return;
        }

        let front = self.body[0].front;
        let pivot = front - old.unit() * radius;
        // The old head gives up one body width; the corner rectangle tiles
        // flush in its place.
        self.body[0].front = front - old.unit() * (2.0 * radius);
        self.body.insert(
            0,
            Segment::new(
                pivot + requested.unit() * radius,
                pivot - requested.unit() * radius,
                requested,
            ),
        );
    }

    /// Pull the tail in by `increment` world units.
    ///
    /// At most one segment is dropped per call; an increment still longer
    /// than the next tail after one drop over-retracts that segment instead
    /// (only reachable when `speed * dt` exceeds a corner's width). The sole
    /// remaining segment is never dropped.
    fn retract_tail(&mut self, mut increment: f32) {
        let last = self.body.len() - 1;
        let tail_length = self.body[last].length();
        if increment >= tail_length && self.body.len() > 1 {
            self.body.pop();
            increment -= tail_length;
        }

        let last = self.body.len() - 1;
        let tail = &mut self.body[last];
        tail.back += tail.direction.unit() * increment;
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
