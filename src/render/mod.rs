//! Compositing of masks and rectangles into the framebuffer.
//!
//! - [`fill`]: even-odd polygons and disk wedges, over-composited.
//! - [`stroke`]: one-pixel polylines and two-pass arc rings.
//! - [`draw_rect`] / [`draw_rect_outline`]: uniform rectangle blits.

mod compositor;
mod rect;

pub use compositor::{composite, fill, stroke, CompositeOp, PATH_STROKE_WIDTH};
pub use rect::{draw_rect, draw_rect_outline};
