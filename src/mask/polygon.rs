//! Even-odd polygon inclusion.

use crate::geometry::{BoundingBox, Point};

/// Fill region of one subpath, implicitly closed from the last vertex back
/// to the first.
#[derive(Debug, Clone, Copy)]
pub struct PolygonMask<'a> {
    vertices: &'a [Point],
    bbox: BoundingBox,
}

impl<'a> PolygonMask<'a> {
    /// Build a mask over an ordered vertex list.
    #[must_use]
    pub fn new(vertices: &'a [Point]) -> Self {
        Self {
            vertices,
            bbox: BoundingBox::of(vertices),
        }
    }

    /// Bounding box of the vertices.
    #[must_use]
    pub const fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// True when the polygon has too few vertices to enclose anything.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Parity test for `p`.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        if self.is_degenerate() || !self.bbox.contains(p) {
            return false;
        }
        crossing_parity(self.vertices, p)
    }
}

/// Point-in-polygon test over a raw vertex list.
///
/// Equivalent to `PolygonMask::new(vertices).contains(p)`.
#[must_use]
pub fn is_inside(p: Point, vertices: &[Point]) -> bool {
    PolygonMask::new(vertices).contains(p)
}

/// Ray casting toward +x. Horizontal edges never satisfy the straddle
/// condition, so they never toggle.
///
/// The crossing is compared exactly, by cross multiplication rather than a
/// truncating division, so an edge gives the same answer whichever of its
/// endpoints comes first.
fn crossing_parity(vertices: &[Point], p: Point) -> bool {
    let (px, py) = (i64::from(p.x), i64::from(p.y));
    let mut inside = false;
    let mut j = vertices.len() - 1;

    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        if (vi.y > p.y) != (vj.y > p.y) {
            let (xi, yi) = (i64::from(vi.x), i64::from(vi.y));
            let (dx, dy) = (i64::from(vj.x) - xi, i64::from(vj.y) - yi);
            // px < xi + dx * (py - yi) / dy, with dy != 0 here
            let lhs = (px - xi) * dy;
            let rhs = dx * (py - yi);
            let crosses_right = if dy > 0 { lhs < rhs } else { lhs > rhs };
            if crosses_right {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
