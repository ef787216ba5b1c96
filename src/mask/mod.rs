//! Per-pixel shape masks.
//!
//! Every pending shape becomes one [`Mask`]: an inclusion predicate plus a
//! bounding box. The compositor treats all variants alike.
//!
//! # Predicates
//!
//! - **Polygon**: even-odd ray casting, implicitly closed.
//! - **Line**: exact collinearity with a segment, inside its bounding box.
//! - **Arc**: strictly inside the disk and inside the angular wedge.

mod arc;
mod line;
mod polygon;

pub use arc::ArcMask;
pub use line::{on_line, LineMask};
pub use polygon::{is_inside, PolygonMask};

use crate::geometry::{BoundingBox, Point};

/// One paintable region.
#[derive(Debug, Clone, Copy)]
pub enum Mask<'a> {
    /// Filled subpath.
    Polygon(PolygonMask<'a>),
    /// Stroked subpath.
    Line(LineMask<'a>),
    /// Disk wedge.
    Arc(ArcMask),
}

impl Mask<'_> {
    /// Whether the pixel at `p` is covered.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Self::Polygon(m) => m.contains(p),
            Self::Line(m) => m.contains(p),
            Self::Arc(m) => m.contains(p),
        }
    }

    /// Inclusive box outside which `contains` is always false.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Self::Polygon(m) => m.bounding_box(),
            Self::Line(m) => m.bounding_box(),
            Self::Arc(m) => m.bounding_box(),
        }
    }
}

impl<'a> From<PolygonMask<'a>> for Mask<'a> {
    fn from(m: PolygonMask<'a>) -> Self {
        Self::Polygon(m)
    }
}

impl<'a> From<LineMask<'a>> for Mask<'a> {
    fn from(m: LineMask<'a>) -> Self {
        Self::Line(m)
    }
}

impl From<ArcMask> for Mask<'_> {
    fn from(m: ArcMask) -> Self {
        Self::Arc(m)
    }
}
