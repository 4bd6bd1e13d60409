//! Core-to-renderer geometry
//!
//! Builds the per-frame world transforms a renderer needs: one axis-aligned
//! box per platform, body segment and food piece. The core issues no draw
//! calls itself; a renderer consumes the frame read-only, and `BoxInstance`
//! is `Pod` so an instance buffer can take the slice as raw bytes.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::consts::{BODY_Y, PLATFORM_THICKNESS, PLATFORM_Y};
use crate::sim::{Axis, GameState, Segment};

/// One axis-aligned box for instanced rendering
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct BoxInstance {
    /// World-space center
    pub position: Vec3,
    /// Per-axis extent
    pub scale: Vec3,
}

/// Everything a renderer draws for one frame
#[derive(Debug, Clone)]
pub struct SceneFrame {
    pub platform: BoxInstance,
    pub snake: Vec<BoxInstance>,
    pub food: Vec<BoxInstance>,
}

/// Snapshot the current state as renderable boxes.
pub fn build_frame(state: &GameState) -> SceneFrame {
    let radius = state.cfg.snake_radius;
    SceneFrame {
        platform: BoxInstance {
            position: Vec3::new(0.0, PLATFORM_Y, 0.0),
            scale: Vec3::new(
                state.platform.scale,
                PLATFORM_THICKNESS,
                state.platform.scale,
            ),
        },
        snake: state
            .snake
            .body
            .iter()
            .map(|seg| segment_instance(seg, radius))
            .collect(),
        food: state
            .food
            .items
            .iter()
            .map(|&item| food_instance(item, radius))
            .collect(),
    }
}

/// Box for one body segment: midpoint along the travel axis, body width
/// across it and in height.
fn segment_instance(seg: &Segment, radius: f32) -> BoxInstance {
    let width = 2.0 * radius;
    let axis = seg.direction.axis();
    let mid = (axis.of(seg.front) + axis.of(seg.back)) / 2.0;
    let across = axis.cross().of(seg.front);
    let (plane, scale) = match axis {
        Axis::X => (
            Vec2::new(mid, across),
            Vec3::new(seg.length(), width, width),
        ),
        Axis::Z => (
            Vec2::new(across, mid),
            Vec3::new(width, width, seg.length()),
        ),
    };
    BoxInstance {
        position: Vec3::new(plane.x, BODY_Y, plane.y),
        scale,
    }
}

/// Cube for one food piece
fn food_instance(item: Vec2, radius: f32) -> BoxInstance {
    BoxInstance {
        position: Vec3::new(item.x, BODY_Y, item.y),
        scale: Vec3::splat(2.0 * radius),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimConfig;
    use crate::consts::{PLATFORM_SCALE, SNAKE_RADIUS};
    use crate::sim::Direction;

    const EPS: f32 = 1e-6;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert!((a - b).length() < EPS, "{a} != {b}");
    }

    #[test]
    fn test_fresh_frame_shapes() {
        let state = GameState::new(SimConfig::default(), 5);
        let frame = build_frame(&state);

        assert_vec3_eq(frame.platform.position, Vec3::new(0.0, -1.0, 0.0));
        assert_vec3_eq(
            frame.platform.scale,
            Vec3::new(PLATFORM_SCALE, 0.5, PLATFORM_SCALE),
        );
        assert_eq!(frame.snake.len(), 1);
        assert!(frame.food.is_empty());

        // Initial segment (0,0)-(0.5,0) heading up: centered at x 0.25.
        assert_vec3_eq(frame.snake[0].position, Vec3::new(0.25, 0.5, 0.0));
        assert_vec3_eq(frame.snake[0].scale, Vec3::new(0.5, 0.25, 0.25));
    }

    #[test]
    fn test_sideways_segment_scales_along_z() {
        let seg = Segment::new(Vec2::new(1.0, 2.0), Vec2::new(1.0, 1.0), Direction::Left);
        let instance = segment_instance(&seg, SNAKE_RADIUS);
        assert_vec3_eq(instance.position, Vec3::new(1.0, 0.5, 1.5));
        assert_vec3_eq(instance.scale, Vec3::new(0.25, 0.25, 1.0));
    }

    #[test]
    fn test_food_boxes_are_body_width_cubes() {
        let instance = food_instance(Vec2::new(-1.5, 2.0), SNAKE_RADIUS);
        assert_vec3_eq(instance.position, Vec3::new(-1.5, 0.5, 2.0));
        assert_vec3_eq(instance.scale, Vec3::splat(0.25));
    }

    #[test]
    fn test_instances_are_plain_old_data() {
        let boxes = [food_instance(Vec2::new(0.0, 0.0), SNAKE_RADIUS)];
        let bytes: &[u8] = bytemuck::cast_slice(&boxes);
        assert_eq!(bytes.len(), std::mem::size_of::<BoxInstance>());
    }
}
