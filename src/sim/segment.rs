//! Axis-aligned segment geometry for the snake body
//!
//! The play plane is horizontal. Points are `Vec2` with `x` = world x and
//! `y` = world z; +x runs "down" the platform and +z runs "left", the
//! orientation the rest of the sim is built around.

use glam::Vec2;

/// A travel axis within the plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Z,
}

impl Axis {
    /// Component of `p` on this axis
    #[inline]
    pub fn of(self, p: Vec2) -> f32 {
        match self {
            Axis::X => p.x,
            Axis::Z => p.y,
        }
    }

    /// The other plane axis
    #[inline]
    pub fn cross(self) -> Axis {
        match self {
            Axis::X => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// Unit vector along this axis
    #[inline]
    pub fn unit(self) -> Vec2 {
        match self {
            Axis::X => Vec2::new(1.0, 0.0),
            Axis::Z => Vec2::new(0.0, 1.0),
        }
    }
}

/// One of the four cardinal travel directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector in the plane: Up = -x, Down = +x, Left = +z, Right = -z.
    ///
    /// Every per-direction decision in the sim routes through this table
    /// (and `axis`) instead of repeating four-way branches.
    #[inline]
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(-1.0, 0.0),
            Direction::Down => Vec2::new(1.0, 0.0),
            Direction::Left => Vec2::new(0.0, 1.0),
            Direction::Right => Vec2::new(0.0, -1.0),
        }
    }

    /// Axis this direction travels along
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::X,
            Direction::Left | Direction::Right => Axis::Z,
        }
    }

    /// The reverse direction
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when `other` is a quarter turn from `self`
    #[inline]
    pub fn is_perpendicular_to(self, other: Direction) -> bool {
        self.axis() != other.axis()
    }
}

/// A straight rectangular body piece, axis-aligned along its direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Head-ward end
    pub front: Vec2,
    /// Tail-ward end
    pub back: Vec2,
    pub direction: Direction,
}

impl Segment {
    pub fn new(front: Vec2, back: Vec2, direction: Direction) -> Self {
        Self {
            front,
            back,
            direction,
        }
    }

    /// Traversal extent along the segment's own axis
    pub fn length(&self) -> f32 {
        let axis = self.direction.axis();
        (axis.of(self.front) - axis.of(self.back)).abs()
    }

    /// Axis-aligned bounding box of the piece: the traversal extent along
    /// the travel axis, widened by `radius` to each side across it.
    ///
    /// Front/back are min/max-normalized here; `Bounds::contains` needs
    /// `x1 <= x2` and `z1 <= z2` no matter which way the piece travels.
    pub fn bounds(&self, radius: f32) -> Bounds {
        let axis = self.direction.axis();
        let (a, b) = (axis.of(self.front), axis.of(self.back));
        let (lo, hi) = (a.min(b), a.max(b));
        let across = axis.cross().of(self.front);
        match axis {
            Axis::X => Bounds {
                x1: lo,
                x2: hi,
                z1: across - radius,
                z2: across + radius,
            },
            Axis::Z => Bounds {
                x1: across - radius,
                x2: across + radius,
                z1: lo,
                z2: hi,
            },
        }
    }
}

/// An axis-aligned box in the plane, with `x1 <= x2` and `z1 <= z2`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x1: f32,
    pub x2: f32,
    pub z1: f32,
    pub z2: f32,
}

impl Bounds {
    /// Square box of half-extent `half` around a point
    pub fn around(center: Vec2, half: f32) -> Self {
        Self {
            x1: center.x - half,
            x2: center.x + half,
            z1: center.y - half,
            z2: center.y + half,
        }
    }

    /// Strict containment: points exactly on an edge are outside, which is
    /// what keeps flush segment joints from reading as collisions.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.x1 < p.x && p.x < self.x2 && self.z1 < p.y && p.y < self.z2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_units_are_cardinal() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let u = dir.unit();
            assert_eq!(u.length_squared(), 1.0);
            assert_eq!(dir.axis().of(u).abs(), 1.0);
            assert_eq!(dir.axis().cross().of(u), 0.0);
            assert_eq!(dir.opposite().unit(), -u);
            assert!(!dir.is_perpendicular_to(dir));
            assert!(!dir.is_perpendicular_to(dir.opposite()));
        }
        assert!(Direction::Up.is_perpendicular_to(Direction::Left));
        assert!(Direction::Right.is_perpendicular_to(Direction::Down));
    }

    #[test]
    fn test_segment_length_uses_travel_axis() {
        let seg = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.0), Direction::Up);
        assert!((seg.length() - 0.5).abs() < 1e-6);

        let seg = Segment::new(Vec2::new(1.0, 2.0), Vec2::new(1.0, -1.0), Direction::Left);
        assert!((seg.length() - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_are_normalized_for_both_travel_senses() {
        // Up travels toward -x, Down toward +x; both must produce the same
        // well-formed box for the same endpoints.
        let up = Segment::new(Vec2::new(-1.0, 0.5), Vec2::new(1.0, 0.5), Direction::Up);
        let down = Segment::new(Vec2::new(1.0, 0.5), Vec2::new(-1.0, 0.5), Direction::Down);
        let r = 0.125;

        let bu = up.bounds(r);
        let bd = down.bounds(r);
        assert_eq!(bu, bd);
        assert!(bu.x1 <= bu.x2 && bu.z1 <= bu.z2);
        assert!((bu.x1 - (-1.0)).abs() < 1e-6);
        assert!((bu.x2 - 1.0).abs() < 1e-6);
        assert!((bu.z1 - 0.375).abs() < 1e-6);
        assert!((bu.z2 - 0.625).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_of_sideways_segment() {
        let seg = Segment::new(Vec2::new(1.0, 2.0), Vec2::new(1.0, 1.0), Direction::Left);
        let b = seg.bounds(0.125);
        assert!((b.x1 - 0.875).abs() < 1e-6);
        assert!((b.x2 - 1.125).abs() < 1e-6);
        assert!((b.z1 - 1.0).abs() < 1e-6);
        assert!((b.z2 - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_contains_is_strict_on_edges() {
        let b = Bounds {
            x1: 0.0,
            x2: 1.0,
            z1: 0.0,
            z2: 1.0,
        };
        assert!(b.contains(Vec2::new(0.5, 0.5)));
        // Boundary points are outside by design.
        assert!(!b.contains(Vec2::new(0.0, 0.5)));
        assert!(!b.contains(Vec2::new(1.0, 0.5)));
        assert!(!b.contains(Vec2::new(0.5, 0.0)));
        assert!(!b.contains(Vec2::new(0.5, 1.0)));
        assert!(!b.contains(Vec2::new(0.0, 0.0)));
        assert!(!b.contains(Vec2::new(2.0, 0.5)));
    }

    #[test]
    fn test_bounds_around_point() {
        let b = Bounds::around(Vec2::new(1.0, -1.0), 0.125);
        assert!(b.contains(Vec2::new(1.0, -1.0)));
        assert!(b.contains(Vec2::new(1.1, -0.9)));
        assert!(!b.contains(Vec2::new(1.125, -1.0)));
        assert!(!b.contains(Vec2::new(1.2, -1.0)));
    }
}
