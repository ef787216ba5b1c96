//! Circular wedge membership.
//!
//! Angles use a screen-space convention with the vertical axis flipped:
//! `dy = center.y - p.y`. Measured that way, 0 (and 2π) points left of the
//! center, π/2 up, π right and 3π/2 down. Angles are never normalized; the
//! order of the two bounds selects the wedge:
//!
//! - `start <= end`: the convex wedge, `start < angle < end`.
//! - `start > end`: the bounds are swapped and the test inverted, giving the
//!   complementary (reflex) wedge. This is how arcs across the 0/2π seam are
//!   written without normalizing.

use std::f64::consts::{PI, TAU};

use crate::geometry::{BoundingBox, Point};
use crate::path::CircularArc;

/// Disk-and-wedge region of one arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcMask {
    center: Point,
    radius: i32,
    start_angle: f64,
    end_angle: f64,
}

impl ArcMask {
    /// Build a mask from an arc.
    #[must_use]
    pub fn new(arc: &CircularArc) -> Self {
        Self {
            center: arc.center,
            radius: arc.radius,
            start_angle: arc.start_angle,
            end_angle: arc.end_angle,
        }
    }

    /// Same wedge with a different radius. The stroke erase pass uses this
    /// one pixel in from the arc's own radius.
    #[must_use]
    pub const fn with_radius(self, radius: i32) -> Self {
        Self { radius, ..self }
    }

    /// Radius of the disk.
    #[must_use]
    pub const fn radius(&self) -> i32 {
        self.radius
    }

    /// Square around the disk, saturated at the `i32` range.
    #[must_use]
    pub const fn bounding_box(&self) -> BoundingBox {
        let (cx, cy, r) = (self.center.x, self.center.y, self.radius);
        BoundingBox::new(
            Point::new(cx.saturating_sub(r), cy.saturating_sub(r)),
            Point::new(cx.saturating_add(r), cy.saturating_add(r)),
        )
    }

    /// Whether `p` is strictly inside the disk and inside the wedge.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        let dx = f64::from(p.x) - f64::from(self.center.x);
        let dy = f64::from(self.center.y) - f64::from(p.y);
        let r = f64::from(self.radius);

        if dx * dx + dy * dy >= r * r {
            return false;
        }

        let angle = polar_angle(dx, dy);
        if self.start_angle <= self.end_angle {
            strictly_between(angle, self.start_angle, self.end_angle)
        } else {
            !strictly_between(angle, self.end_angle, self.start_angle)
        }
    }
}

/// Angle of `(dx, dy)` in the flipped convention, via `asin` with a
/// half-plane correction. The center has no angle.
fn polar_angle(dx: f64, dy: f64) -> Option<f64> {
    let h = dx.hypot(dy);
    if h == 0.0 {
        return None;
    }
    let s = (dy / h).asin();
    Some(if dx > 0.0 {
        PI - s
    } else if dy > 0.0 {
        s
    } else {
        s + TAU
    })
}

/// The center pixel is never strictly inside any interval.
fn strictly_between(angle: Option<f64>, lo: f64, hi: f64) -> bool {
    angle.is_some_and(|a| lo < a && a < hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn mask(cx: i32, cy: i32, r: i32, start: f64, end: f64) -> ArcMask {
        ArcMask::new(&CircularArc::new(Point::new(cx, cy), r, start, end))
    }

    #[test]
    fn test_polar_angle_axes() {
        assert_relative_eq!(polar_angle(0.0, 1.0).unwrap(), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(polar_angle(1.0, 0.0).unwrap(), PI, epsilon = 1e-12);
        assert_relative_eq!(polar_angle(0.0, -1.0).unwrap(), 3.0 * FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(polar_angle(-1.0, 0.0).unwrap(), TAU, epsilon = 1e-12);
        assert!(polar_angle(0.0, 0.0).is_none());
    }

    #[test]
    fn test_polar_angle_quadrants() {
        // up-left, up-right, down-right, down-left
        assert_relative_eq!(polar_angle(-1.0, 1.0).unwrap(), PI / 4.0, epsilon = 1e-12);
        assert_relative_eq!(polar_angle(1.0, 1.0).unwrap(), 3.0 * PI / 4.0, epsilon = 1e-12);
        assert_relative_eq!(polar_angle(1.0, -1.0).unwrap(), 5.0 * PI / 4.0, epsilon = 1e-12);
        assert_relative_eq!(polar_angle(-1.0, -1.0).unwrap(), 7.0 * PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_radial_test_is_strict() {
        let full = mask(50, 50, 10, 0.0, TAU);
        // Straight up at distance 9 and 10
        assert!(full.contains(Point::new(50, 41)));
        assert!(!full.contains(Point::new(50, 40)));
    }

    #[test]
    fn test_half_disk_zero_to_pi() {
        let upper = mask(50, 50, 20, 0.0, PI);
        // Straight up: angle π/2
        assert!(upper.contains(Point::new(50, 40)));
        // Straight right: angle π, an excluded boundary
        assert!(!upper.contains(Point::new(60, 50)));
        // Below the center
        assert!(!upper.contains(Point::new(45, 60)));
    }

    #[test]
    fn test_center_pixel_polarity() {
        let convex = mask(10, 10, 5, 0.0, PI);
        let reflex = mask(10, 10, 5, PI, 0.0);
        assert!(!convex.contains(Point::new(10, 10)));
        assert!(reflex.contains(Point::new(10, 10)));
    }

    #[test]
    fn test_reflex_wedge_is_complement() {
        let convex = mask(50, 50, 20, FRAC_PI_2, PI);
        let reflex = mask(50, 50, 20, PI, FRAC_PI_2);
        // Up-right quadrant is angle (π/2, π)
        let up_right = Point::new(55, 45);
        let down_left = Point::new(45, 55);
        assert!(convex.contains(up_right));
        assert!(!reflex.contains(up_right));
        assert!(!convex.contains(down_left));
        assert!(reflex.contains(down_left));
    }

    #[test]
    fn test_reflex_wedge_outside_disk_stays_off() {
        let reflex = mask(50, 50, 5, PI, 0.0);
        assert!(!reflex.contains(Point::new(50, 70)));
    }

    #[test]
    fn test_angles_are_not_normalized() {
        // Shifting by 2π moves the wedge out of range of computed angles
        let shifted = mask(50, 50, 20, TAU, TAU + PI);
        assert!(!shifted.contains(Point::new(50, 40)));
    }

    #[test]
    fn test_bounding_box_and_with_radius() {
        let m = mask(10, 20, 4, 0.0, TAU);
        assert_eq!(m.bounding_box().min, Point::new(6, 16));
        assert_eq!(m.bounding_box().max, Point::new(14, 24));
        let inner = m.with_radius(3);
        assert_eq!(inner.radius(), 3);
        assert_eq!(inner.bounding_box().min, Point::new(7, 17));
    }

    #[test]
    fn test_bounding_box_saturates_near_i32_limits() {
        let high = mask(i32::MAX - 1, i32::MAX - 1, 5, 0.0, TAU);
        assert_eq!(high.bounding_box().max, Point::new(i32::MAX, i32::MAX));
        assert_eq!(high.bounding_box().min, Point::new(i32::MAX - 6, i32::MAX - 6));

        let low = mask(i32::MIN + 1, i32::MIN + 1, 5, 0.0, TAU);
        assert_eq!(low.bounding_box().min, Point::new(i32::MIN, i32::MIN));
        assert!(low.contains(Point::new(i32::MIN + 1, i32::MIN)));
    }

    #[test]
    fn test_zero_radius_contains_nothing() {
        let empty = mask(5, 5, 0, PI, 0.0);
        assert!(!empty.contains(Point::new(5, 5)));
    }
}
