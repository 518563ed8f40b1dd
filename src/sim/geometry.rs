//! Axis-aligned boxes and the two measurements the physics is built on
//!
//! A `Bound` is a top-left anchored rectangle. Zero-size bounds are points.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::cartesian_to_polar;

/// Axis-aligned rectangle, `(x, y)` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bound {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bound {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A zero-size bound sitting at `p`
    pub const fn point(p: Vec2) -> Self {
        Self::new(p.x, p.y, 0.0, 0.0)
    }

    /// Bound of side lengths `size` centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::new(
            center.x - size.x / 2.0,
            center.y - size.y / 2.0,
            size.x,
            size.y,
        )
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Collapse to a point at the center
    #[inline]
    pub fn center_point(&self) -> Self {
        Self::point(self.center())
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict AABB overlap. Touching edges do not count.
    #[inline]
    pub fn overlaps(&self, other: &Bound) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// True when `other` lies entirely inside `self`
    pub fn contains(&self, other: &Bound) -> bool {
        other.x >= self.x
            && other.right() <= self.right()
            && other.y >= self.y
            && other.bottom() <= self.bottom()
    }
}

/// Euclidean distance between the centers of `a` and `b`
#[inline]
pub fn distance_aabb(a: &Bound, b: &Bound) -> f32 {
    cartesian_to_polar(b.center() - a.center()).0
}

/// Heading (radians) of the vector pointing from `a`'s center toward `b`'s center.
///
/// Coincident centers give `atan2(0, 0)`, which is 0; the caller's speed is
/// zero in that case so the result never matters.
#[inline]
pub fn distance_angle(a: &Bound, b: &Bound) -> f32 {
    cartesian_to_polar(b.center() - a.center()).1
}
