//! Immediate-mode drawing surface.
//!
//! A [`Canvas`] owns one framebuffer, the current styles and the pending
//! shapes. Shapes are queued with [`move_to`], [`line_to`] and [`arc`], then
//! painted by [`fill`] or [`stroke`]. Painting does not consume them: only
//! [`begin_path`] drops subpaths, and only [`clear_arcs`] drops arcs.
//!
//! ```
//! use trueno_canvas::canvas::Canvas;
//! use trueno_canvas::color::Rgba;
//!
//! let mut ctx = Canvas::new(100, 100).unwrap();
//! ctx.begin_path();
//! ctx.move_to(10, 10);
//! ctx.line_to(90, 10).unwrap();
//! ctx.line_to(50, 90).unwrap();
//! ctx.fill();
//! assert_eq!(ctx.framebuffer().get_pixel(50, 30), Some(Rgba::BLACK));
//! ```
//!
//! [`move_to`]: Canvas::move_to
//! [`line_to`]: Canvas::line_to
//! [`arc`]: Canvas::arc
//! [`fill`]: Canvas::fill
//! [`stroke`]: Canvas::stroke
//! [`begin_path`]: Canvas::begin_path
//! [`clear_arcs`]: Canvas::clear_arcs

use std::path::Path;

use log::debug;

use crate::color::Rgba;
use crate::config::{CanvasConfig, StrokePaint};
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Rect;
use crate::output::PngEncoder;
use crate::path::PathModel;
use crate::render::{self, CompositeOp};

/// Drawing surface with canvas-style state.
#[derive(Debug, Clone)]
pub struct Canvas {
    framebuffer: Framebuffer,
    model: PathModel,
    fill_color: Rgba,
    stroke_color: Rgba,
    stroke_width: u32,
    background: Rgba,
    stroke_paint: StrokePaint,
}

impl Canvas {
    /// Create a `width` × `height` canvas with default settings: opaque
    /// white background, black fill and stroke, stroke width 1.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_config(&CanvasConfig::new(width, height))
    }

    /// Create a canvas from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn with_config(config: &CanvasConfig) -> Result<Self> {
        config.validate()?;
        let framebuffer = Framebuffer::filled(config.width, config.height, config.background)?;
        debug!(
            "canvas {}x{} created, backend {:?}",
            config.width,
            config.height,
            Framebuffer::backend()
        );
        Ok(Self {
            framebuffer,
            model: PathModel::new(),
            fill_color: config.fill,
            stroke_color: config.stroke,
            stroke_width: config.stroke_width,
            background: config.background,
            stroke_paint: config.stroke_paint,
        })
    }

    // ------------------------------------------------------------------
    // Styles
    // ------------------------------------------------------------------

    /// Set the fill color from style values; see [`Rgba::from_style`].
    pub fn fill_style(&mut self, r: f64, g: f64, b: f64, a: f64) {
        self.fill_color = Rgba::from_style(r, g, b, a);
    }

    /// Set the stroke color from style values; see [`Rgba::from_style`].
    ///
    /// Strokes only use it when the canvas was configured with
    /// [`StrokePaint::Stroke`].
    pub fn stroke_style(&mut self, r: f64, g: f64, b: f64, a: f64) {
        self.stroke_color = Rgba::from_style(r, g, b, a);
    }

    /// Set the stroke width used by [`stroke_rect`](Self::stroke_rect).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStrokeWidth`] for zero.
    pub fn set_line_width(&mut self, width: u32) -> Result<()> {
        if width == 0 {
            return Err(Error::InvalidStrokeWidth(width));
        }
        self.stroke_width = width;
        Ok(())
    }

    /// Current fill color.
    #[must_use]
    pub const fn fill_color(&self) -> Rgba {
        self.fill_color
    }

    /// Current stroke color.
    #[must_use]
    pub const fn stroke_color(&self) -> Rgba {
        self.stroke_color
    }

    /// Current stroke width.
    #[must_use]
    pub const fn line_width(&self) -> u32 {
        self.stroke_width
    }

    /// Background color used by clears and erase passes.
    #[must_use]
    pub const fn background(&self) -> Rgba {
        self.background
    }

    fn stroke_paint_color(&self) -> Rgba {
        match self.stroke_paint {
            StrokePaint::Fill => self.fill_color,
            StrokePaint::Stroke => self.stroke_color,
        }
    }

    // ------------------------------------------------------------------
    // Rectangles
    // ------------------------------------------------------------------

    /// Over-composite the fill color onto a rectangle.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        render::draw_rect(
            &mut self.framebuffer,
            Rect::new(x, y, width, height),
            self.fill_color,
            CompositeOp::Over,
        );
    }

    /// Outline a rectangle: fill it with the stroke paint color, then reset
    /// the interior inset by the stroke width to the background.
    pub fn stroke_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let color = self.stroke_paint_color();
        render::draw_rect_outline(
            &mut self.framebuffer,
            Rect::new(x, y, width, height),
            color,
            self.background,
            self.stroke_width,
        );
    }

    /// Reset a rectangle to the background color.
    pub fn clear_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        render::draw_rect(
            &mut self.framebuffer,
            Rect::new(x, y, width, height),
            self.background,
            CompositeOp::Replace,
        );
    }

    // ------------------------------------------------------------------
    // Paths
    // ------------------------------------------------------------------

    /// Drop all pending subpaths. Pending arcs are kept.
    pub fn begin_path(&mut self) {
        self.model.reset_paths();
    }

    /// Start a new subpath at `(x, y)`.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.model.begin_subpath(x, y);
    }

    /// Extend the current subpath to `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCurrentSubpath`] if `move_to` has not been called
    /// since the last `begin_path`.
    pub fn line_to(&mut self, x: i32, y: i32) -> Result<()> {
        self.model.extend_subpath(x, y)
    }

    /// Queue a circular arc centered on `(x, y)`.
    ///
    /// Angles are in radians and are not normalized; `start > end` selects
    /// the complementary wedge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRadius`] if `radius <= 0`.
    pub fn arc(&mut self, x: i32, y: i32, radius: i32, start: f64, end: f64) -> Result<()> {
        self.model.add_arc(x, y, radius, start, end)
    }

    /// Drop all pending arcs.
    pub fn clear_arcs(&mut self) {
        self.model.clear_arcs();
    }

    /// Pending shapes.
    #[must_use]
    pub const fn path(&self) -> &PathModel {
        &self.model
    }

    // ------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------

    /// Fill every pending subpath and arc with the fill color.
    ///
    /// Returns the number of pixels written.
    pub fn fill(&mut self) -> usize {
        render::fill(&mut self.framebuffer, &self.model, self.fill_color)
    }

    /// Stroke every pending subpath and arc.
    ///
    /// Returns the number of pixels written, erase passes included.
    pub fn stroke(&mut self) -> usize {
        let color = self.stroke_paint_color();
        render::stroke(&mut self.framebuffer, &self.model, color, self.background)
    }

    // ------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------

    /// The pixel buffer.
    #[must_use]
    pub const fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Take the pixel buffer, dropping the rest of the canvas.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.framebuffer
    }

    /// Write the buffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or encoding fails.
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PngEncoder::write_to_file(&self.framebuffer, path)
    }

    /// Encode the buffer as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        PngEncoder::to_bytes(&self.framebuffer)
    }
}
