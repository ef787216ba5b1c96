//! Exact polyline membership.

use crate::geometry::{BoundingBox, Point};

/// Stroke region of one subpath: the pixels exactly collinear with one of its
/// segments and inside that segment's bounding box.
///
/// `width` is carried for callers that inspect it, but the predicate is
/// zero-tolerance and never produces a line thicker than one pixel.
#[derive(Debug, Clone, Copy)]
pub struct LineMask<'a> {
    points: &'a [Point],
    width: u32,
    bbox: BoundingBox,
}

impl<'a> LineMask<'a> {
    /// Build a mask over an ordered polyline.
    #[must_use]
    pub fn new(points: &'a [Point], width: u32) -> Self {
        Self {
            points,
            width,
            bbox: BoundingBox::of(points),
        }
    }

    /// Nominal stroke width.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Bounding box of the whole polyline.
    #[must_use]
    pub const fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// True when the polyline has no segment.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    /// Whether `p` lies on any segment.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        if self.is_degenerate() {
            return false;
        }
        self.points
            .windows(2)
            .any(|seg| on_segment(seg[0], seg[1], p))
    }
}

/// Point-on-polyline test over a raw point list.
///
/// Equivalent to `LineMask::new(points, width).contains(p)`.
#[must_use]
pub fn on_line(p: Point, points: &[Point], width: u32) -> bool {
    LineMask::new(points, width).contains(p)
}

/// Slope equality by cross multiplication, so vertical segments need no
/// division: with `dx1 == 0` the test reduces to `p.x == a.x`.
fn on_segment(a: Point, b: Point, p: Point) -> bool {
    if a == b {
        return false;
    }
    if !BoundingBox::new(
        Point::new(a.x.min(b.x), a.y.min(b.y)),
        Point::new(a.x.max(b.x), a.y.max(b.y)),
    )
    .contains(p)
    {
        return false;
    }

    let dx1 = i64::from(b.x) - i64::from(a.x);
    let dy1 = i64::from(b.y) - i64::from(a.y);
    let dx2 = i64::from(p.x) - i64::from(a.x);
    let dy2 = i64::from(p.y) - i64::from(a.y);
    dy1 * dx2 == dy2 * dx1
}
