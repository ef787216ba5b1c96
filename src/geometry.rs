//! Geometric primitives in integer pixel space.

use serde::{Deserialize, Serialize};

/// A pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned box with inclusive `min` and `max` corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Top-left corner (inclusive).
    pub min: Point,
    /// Bottom-right corner (inclusive).
    pub max: Point,
}

impl BoundingBox {
    /// Box returned for an empty point sequence.
    ///
    /// `min` is as large as possible and `max` sits at the origin, so the box
    /// is empty and iterating it visits nothing.
    pub const EMPTY: Self = Self {
        min: Point::new(i32::MAX, i32::MAX),
        max: Point::ORIGIN,
    };

    /// Create a box from its corners.
    #[must_use]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Min/max over x and y independently.
    ///
    /// The max corner is seeded at the origin: for points left of or above
    /// the origin `max` stays at zero. Callers must check [`is_empty`] before
    /// using the box of a possibly empty sequence.
    ///
    /// [`is_empty`]: BoundingBox::is_empty
    #[must_use]
    pub fn of(points: &[Point]) -> Self {
        points.iter().fold(Self::EMPTY, |acc, p| Self {
            min: Point::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
            max: Point::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
        })
    }

    /// True when the box contains no pixel.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Inclusive containment test.
    #[must_use]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// A rectangle defined by its top-left corner and size.
///
/// Width and height may be zero or negative, in which case the rectangle
/// covers no pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: i32,
    /// Y coordinate of the top-left corner.
    pub y: i32,
    /// Width of the rectangle.
    pub width: i32,
    /// Height of the rectangle.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrink by `by` pixels on every side, saturating at the `i32` range.
    #[must_use]
    pub const fn inset(self, by: i32) -> Self {
        let both_sides = by.saturating_mul(2);
        Self::new(
            self.x.saturating_add(by),
            self.y.saturating_add(by),
            self.width.saturating_sub(both_sides),
            self.height.saturating_sub(both_sides),
        )
    }

    /// True when the rectangle covers no pixel.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}
