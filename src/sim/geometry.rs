//! Rectangle, segment and ray primitives for the swept collision solver
//!
//! Rectangles are axis-aligned and stored as (min, max) corners. The solver only
//! ever intersects a ray against one side of a rectangle at a time, so a single
//! ray–segment test is the whole intersection kernel.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect2 {
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y, "inverted rect {min} {max}");
        Self { min, max }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self::from_min_max(min, min + size)
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = 0.5 * size;
        Self::from_min_max(center - half, center + half)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + 0.5 * (self.max - self.min)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Closed containment test (edges count as inside)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Open overlap test: rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect2) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// The four sides paired with their outward normals, in the fixed order
    /// top, right, left, bottom.
    pub fn edges(&self) -> [(Line2, Vec2); 4] {
        let Rect2 { min, max } = *self;
        [
            (Line2::new(Vec2::new(min.x, max.y), max), Vec2::Y),
            (Line2::new(Vec2::new(max.x, min.y), max), Vec2::X),
            (Line2::new(min, Vec2::new(min.x, max.y)), Vec2::NEG_X),
            (Line2::new(min, Vec2::new(max.x, min.y)), Vec2::NEG_Y),
        ]
    }
}

/// Line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2 {
    pub a: Vec2,
    pub b: Vec2,
}

impl Line2 {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }
}

/// Origin plus displacement. `t = 1` is the end of the displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2 {
    pub origin: Vec2,
    pub displacement: Vec2,
}

impl Ray2 {
    pub fn new(origin: Vec2, displacement: Vec2) -> Self {
        Self {
            origin,
            displacement,
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec2 {
        self.origin + t * self.displacement
    }
}

/// Solve `x·a + y·b = c` by Cramer's rule. `None` when `a` and `b` are parallel.
pub fn solve_linear_system2(a: Vec2, b: Vec2, c: Vec2) -> Option<Vec2> {
    let d = a.x * b.y - a.y * b.x;
    if d == 0.0 {
        return None;
    }
    Some(Vec2::new(
        (c.x * b.y - c.y * b.x) / d,
        (a.x * c.y - a.y * c.x) / d,
    ))
}

/// Intersect a ray with a segment.
///
/// Returns the fraction `t` along the ray's displacement when the hit lies on the
/// segment (`0 <= s <= 1`) and ahead of the origin (`t >= 0`). `t` is not bounded
/// above: callers keep a running minimum, so a far hit is simply never the closest.
pub fn ray_segment_intersection(ray: Ray2, segment: Line2) -> Option<f32> {
    // origin + t·dir = a + s·(b - a)  <=>  t·dir + s·(a - b) = a - origin
    let solution = solve_linear_system2(
        ray.displacement,
        segment.a - segment.b,
        segment.a - ray.origin,
    )?;
    let (t, s) = (solution.x, solution.y);
    (t >= 0.0 && (0.0..=1.0).contains(&s)).then_some(t)
}

/// Mirror `v` about the surface with unit normal `n`: `v - 2(v·n)n`
#[inline]
pub fn reflect(v: Vec2, n: Vec2) -> Vec2 {
    v - 2.0 * v.dot(n) * n
}
