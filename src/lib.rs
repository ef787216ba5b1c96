//! # Trueno-Canvas
//!
//! Immediate-mode 2D rasterizer that paints polygons, polylines and circular
//! arcs onto an in-memory RGBA framebuffer.
//!
//! Shapes are queued on a [`Canvas`](canvas::Canvas) and painted by `fill`
//! or `stroke`. Each pending shape becomes a per-pixel [`Mask`](mask::Mask)
//! that the compositor evaluates over the shape's bounding box.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_canvas::prelude::*;
//!
//! let mut ctx = Canvas::new(400, 400)?;
//! ctx.begin_path();
//! ctx.move_to(0, 0);
//! ctx.line_to(40, 0)?;
//! ctx.line_to(0, 40)?;
//! ctx.arc(50, 50, 50, std::f64::consts::FRAC_PI_2, std::f64::consts::PI)?;
//! ctx.fill();
//!
//! let png = ctx.to_png_bytes()?;
//! assert!(!png.is_empty());
//! # Ok::<(), trueno_canvas::Error>(())
//! ```
//!
//! ## Rasterization Rules
//!
//! - **Fill**: even-odd ray casting; subpaths close implicitly.
//! - **Stroke**: one-pixel exact polylines; arcs as rings drawn by painting
//!   the wedge and erasing the wedge one pixel smaller.
//! - **Arcs**: angles in radians, vertical axis flipped, never normalized;
//!   `start > end` selects the complementary wedge.
//!
//! ## Logging
//!
//! Uses the [`log`](https://crates.io/crates/log) facade. Install any logger
//! to see canvas creation, per-call pixel counts and degenerate-subpath
//! warnings.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and style conversion.
pub mod color;

/// RGBA framebuffer.
pub mod framebuffer;

/// Integer pixel-space geometry.
pub mod geometry;

/// Pending subpaths and arcs.
pub mod path;

// ============================================================================
// Rasterization Modules
// ============================================================================

/// Per-pixel shape masks.
pub mod mask;

/// Compositing into the framebuffer.
pub mod render;

/// Drawing surface.
pub mod canvas;

// ============================================================================
// Configuration and Output
// ============================================================================

/// Canvas configuration.
pub mod config;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-canvas operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust
/// use trueno_canvas::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Rgba;
    pub use crate::config::{CanvasConfig, StrokePaint};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{BoundingBox, Point, Rect};
    pub use crate::mask::{ArcMask, LineMask, Mask, PolygonMask};
    pub use crate::output::PngEncoder;
    pub use crate::path::{CircularArc, PathModel, Subpath};
    pub use crate::render::CompositeOp;
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
