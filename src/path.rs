//! Pending subpaths and arcs.
//!
//! Shapes accumulate between a path reset and the draw calls that consume
//! them. Drawing reads the model and never clears it.

use crate::error::{Error, Result};
use crate::geometry::Point;

/// One chain of points begun by `move_to` and extended by `line_to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subpath {
    points: Vec<Point>,
}

impl Subpath {
    /// Start a subpath at `origin`.
    #[must_use]
    pub fn new(origin: Point) -> Self {
        Self {
            points: vec![origin],
        }
    }

    /// Points in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a subpath is seeded with its origin.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the subpath encloses a fill region.
    #[must_use]
    pub fn is_fillable(&self) -> bool {
        self.points.len() >= 3
    }

    fn push(&mut self, p: Point) {
        self.points.push(p);
    }
}

/// A circular arc, or a full circle when the span covers 2π.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularArc {
    /// Center of the circle.
    pub center: Point,
    /// Radius in pixels.
    pub radius: i32,
    /// Start angle in radians.
    pub start_angle: f64,
    /// End angle in radians.
    pub end_angle: f64,
}

impl CircularArc {
    /// Create an arc without validating the radius.
    #[must_use]
    pub const fn new(center: Point, radius: i32, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }
}

/// Ordered pending subpaths and arcs.
#[derive(Debug, Clone, Default)]
pub struct PathModel {
    subpaths: Vec<Subpath>,
    arcs: Vec<CircularArc>,
}

impl PathModel {
    /// Create an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every pending subpath. Arcs are kept.
    pub fn reset_paths(&mut self) {
        self.subpaths.clear();
    }

    /// Drop every pending arc.
    pub fn clear_arcs(&mut self) {
        self.arcs.clear();
    }

    /// Start a new subpath at `(x, y)`.
    pub fn begin_subpath(&mut self, x: i32, y: i32) {
        self.subpaths.push(Subpath::new(Point::new(x, y)));
    }

    /// Append `(x, y)` to the most recently begun subpath.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCurrentSubpath`] if no subpath was begun since the
    /// last [`reset_paths`](Self::reset_paths).
    pub fn extend_subpath(&mut self, x: i32, y: i32) -> Result<()> {
        let current = self.subpaths.last_mut().ok_or(Error::NoCurrentSubpath)?;
        current.push(Point::new(x, y));
        Ok(())
    }

    /// Queue an arc.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRadius`] if `radius <= 0`.
    pub fn add_arc(
        &mut self,
        x: i32,
        y: i32,
        radius: i32,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<()> {
        if radius <= 0 {
            return Err(Error::InvalidRadius(radius));
        }
        self.arcs.push(CircularArc::new(
            Point::new(x, y),
            radius,
            start_angle,
            end_angle,
        ));
        Ok(())
    }

    /// Pending subpaths in insertion order.
    #[must_use]
    pub fn subpaths(&self) -> &[Subpath] {
        &self.subpaths
    }

    /// Pending arcs in insertion order.
    #[must_use]
    pub fn arcs(&self) -> &[CircularArc] {
        &self.arcs
    }

    /// True when nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty() && self.arcs.is_empty()
    }
}
