//! Color type and style conversion.
//!
//! Canvas styles arrive as floating-point channel values and are stored as
//! 8-bit RGBA. Conversions truncate rather than round.

use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color from canvas style values.
    ///
    /// `r`, `g` and `b` are in the 0-255 range and truncated toward zero;
    /// `a` is a 0-1 fraction, scaled by 255 and truncated. Values outside
    /// the representable range saturate.
    ///
    /// ```
    /// use trueno_canvas::color::Rgba;
    ///
    /// let c = Rgba::from_style(12.9, 0.0, 255.0, 0.5);
    /// assert_eq!(c, Rgba::new(12, 0, 255, 127));
    /// ```
    #[must_use]
    pub fn from_style(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(r as u8, g as u8, b as u8, (a * 255.0) as u8)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Whether the color fully covers whatever it is composited over.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::RED.r, 255);
        assert_eq!(Rgba::GREEN.g, 255);
        assert_eq!(Rgba::BLUE.b, 255);
        assert_eq!(Rgba::TRANSPARENT.a, 0);
    }

    #[test]
    fn test_from_style_truncates() {
        let c = Rgba::from_style(254.99, 1.5, 0.2, 1.0);
        assert_eq!(c, Rgba::new(254, 1, 0, 255));
    }

    #[test]
    fn test_from_style_alpha_scaling() {
        // 0.999 * 255 = 254.745, truncated not rounded
        assert_eq!(Rgba::from_style(0.0, 0.0, 0.0, 0.999).a, 254);
        assert_eq!(Rgba::from_style(0.0, 0.0, 0.0, 0.0).a, 0);
        assert_eq!(Rgba::from_style(0.0, 0.0, 0.0, 0.5).a, 127);
    }

    #[test]
    fn test_from_style_saturates() {
        let c = Rgba::from_style(300.0, -4.0, 128.0, 2.0);
        assert_eq!(c, Rgba::new(255, 0, 128, 255));
    }

    #[test]
    fn test_rgba_with_alpha() {
        let semi_red = Rgba::RED.with_alpha(128);
        assert_eq!(semi_red.r, 255);
        assert_eq!(semi_red.a, 128);
        assert!(!semi_red.is_opaque());
        assert!(Rgba::RED.is_opaque());
    }

    #[test]
    fn test_rgba_to_array_from_array() {
        let color = Rgba::new(10, 20, 30, 40);
        let arr = color.to_array();
        assert_eq!(arr, [10, 20, 30, 40]);
        assert_eq!(Rgba::from_array(arr), color);
    }

    #[test]
    fn test_rgba_default() {
        assert_eq!(Rgba::default(), Rgba::TRANSPARENT);
    }
}
