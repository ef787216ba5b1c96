//! Mask compositing.
//!
//! Walks pending shapes in insertion order and writes mask coverage into the
//! framebuffer. Later shapes paint over earlier ones.

use log::{debug, trace, warn};

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::mask::{ArcMask, LineMask, Mask, PolygonMask};
use crate::path::PathModel;

/// Width handed to every stroke line mask, whatever the canvas stroke width.
pub const PATH_STROKE_WIDTH: u32 = 1;

/// How a covered pixel takes the new color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeOp {
    /// Alpha "over" blend onto the existing pixel.
    #[default]
    Over,
    /// Unconditional overwrite.
    Replace,
}

/// Write `color` into every pixel covered by `mask`.
///
/// Only the mask's bounding box, clipped to the framebuffer, is visited.
/// Returns the number of pixels written.
pub fn composite(fb: &mut Framebuffer, mask: &Mask<'_>, color: Rgba, op: CompositeOp) -> usize {
    let bb = mask.bounding_box();
    if bb.is_empty() {
        return 0;
    }

    let x0 = bb.min.x.max(0);
    let y0 = bb.min.y.max(0);
    let x1 = bb.max.x.min(fb.width() as i32 - 1);
    let y1 = bb.max.y.min(fb.height() as i32 - 1);

    let mut written = 0;
    for y in y0..=y1 {
        for x in x0..=x1 {
            if !mask.contains(Point::new(x, y)) {
                continue;
            }
            match op {
                CompositeOp::Over => fb.blend_pixel(x as u32, y as u32, color),
                CompositeOp::Replace => fb.set_pixel(x as u32, y as u32, color),
            }
            written += 1;
        }
    }
    written
}

/// Fill every pending subpath as an even-odd polygon, then every pending arc
/// as a disk wedge, over-compositing `color`.
pub fn fill(fb: &mut Framebuffer, model: &PathModel, color: Rgba) -> usize {
    let mut written = 0;

    for (i, subpath) in model.subpaths().iter().enumerate() {
        if !subpath.is_fillable() {
            warn!(
                "fill: subpath {i} has {} point(s), nothing to fill",
                subpath.len()
            );
            continue;
        }
        let n = composite(
            fb,
            &PolygonMask::new(subpath.points()).into(),
            color,
            CompositeOp::Over,
        );
        trace!("fill: subpath {i} wrote {n} px");
        written += n;
    }

    for (i, arc) in model.arcs().iter().enumerate() {
        let n = composite(fb, &ArcMask::new(arc).into(), color, CompositeOp::Over);
        trace!("fill: arc {i} wrote {n} px");
        written += n;
    }

    debug!(
        "fill: {} subpath(s), {} arc(s), {written} px",
        model.subpaths().len(),
        model.arcs().len()
    );
    written
}

/// Stroke every pending subpath as a one-pixel polyline, then ring every
/// pending arc.
///
/// An arc ring is drawn in two passes: the wedge at the arc radius
/// over-composited in `color`, then the same wedge one pixel smaller
/// replaced with `background`.
pub fn stroke(fb: &mut Framebuffer, model: &PathModel, color: Rgba, background: Rgba) -> usize {
    let mut written = 0;

    for (i, subpath) in model.subpaths().iter().enumerate() {
        let mask = LineMask::new(subpath.points(), PATH_STROKE_WIDTH);
        let n = composite(fb, &mask.into(), color, CompositeOp::Over);
        trace!("stroke: subpath {i} wrote {n} px");
        written += n;
    }

    for (i, arc) in model.arcs().iter().enumerate() {
        let outer = ArcMask::new(arc);
        let inner = outer.with_radius(arc.radius - 1);
        let painted = composite(fb, &outer.into(), color, CompositeOp::Over);
        let erased = composite(fb, &inner.into(), background, CompositeOp::Replace);
        trace!("stroke: arc {i} painted {painted} px, erased {erased} px");
        written += painted + erased;
    }

    debug!(
        "stroke: {} subpath(s), {} arc(s), {written} px",
        model.subpaths().len(),
        model.arcs().len()
    );
    written
}
