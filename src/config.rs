//! Canvas configuration.
//!
//! Every field has a default, so a YAML document only needs the keys it
//! changes:
//!
//! ```yaml
//! width: 400
//! height: 400
//! stroke_paint: stroke
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Which style color arc and path strokes are painted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokePaint {
    /// Stroke with the current fill color.
    #[default]
    Fill,
    /// Stroke with the current stroke color.
    Stroke,
}

/// Construction-time settings for a [`Canvas`](crate::canvas::Canvas).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Initial buffer color, also used by clears and stroke erase passes.
    #[serde(default = "default_background")]
    pub background: Rgba,

    /// Initial fill color.
    #[serde(default = "default_style_color")]
    pub fill: Rgba,

    /// Initial stroke color.
    #[serde(default = "default_style_color")]
    pub stroke: Rgba,

    /// Initial stroke width in pixels.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: u32,

    /// Color source for strokes.
    #[serde(default)]
    pub stroke_paint: StrokePaint,
}

fn default_width() -> u32 {
    400
}
fn default_height() -> u32 {
    400
}
fn default_background() -> Rgba {
    Rgba::WHITE
}
fn default_style_color() -> Rgba {
    Rgba::BLACK
}
fn default_stroke_width() -> u32 {
    1
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
            fill: default_style_color(),
            stroke: default_style_color(),
            stroke_width: default_stroke_width(),
            stroke_paint: StrokePaint::default(),
        }
    }
}

impl CanvasConfig {
    /// Defaults with the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the background color.
    #[must_use]
    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }

    /// Set the initial fill color.
    #[must_use]
    pub fn with_fill(mut self, color: Rgba) -> Self {
        self.fill = color;
        self
    }

    /// Set the initial stroke color.
    #[must_use]
    pub fn with_stroke(mut self, color: Rgba) -> Self {
        self.stroke = color;
        self
    }

    /// Set the initial stroke width.
    #[must_use]
    pub fn with_stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Choose the stroke color source.
    #[must_use]
    pub fn with_stroke_paint(mut self, paint: StrokePaint) -> Self {
        self.stroke_paint = paint;
        self
    }

    /// Check the settings a canvas cannot be built from.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero dimension or a zero stroke width.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.stroke_width == 0 {
            return Err(Error::InvalidStrokeWidth(self.stroke_width));
        }
        Ok(())
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or the values are invalid.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self =
            serde_yaml_ng::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
