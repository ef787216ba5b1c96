//! Axis-aligned rectangle blits.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Rect;

use super::compositor::CompositeOp;

/// Blit `color` over `rect`, clipped to the framebuffer.
pub fn draw_rect(fb: &mut Framebuffer, rect: Rect, color: Rgba, op: CompositeOp) {
    if rect.is_empty() {
        return;
    }
    // Clip the negative side here; the framebuffer clamps the positive side
    let x0 = rect.x.max(0);
    let y0 = rect.y.max(0);
    let x1 = rect.x.saturating_add(rect.width);
    let y1 = rect.y.saturating_add(rect.height);
    if x1 <= x0 || y1 <= y0 {
        return;
    }

    let (x, y) = (x0 as u32, y0 as u32);
    let (w, h) = ((x1 - x0) as u32, (y1 - y0) as u32);
    match op {
        CompositeOp::Over => fb.blend_rect(x, y, w, h, color),
        CompositeOp::Replace => fb.fill_rect(x, y, w, h, color),
    }
}

/// Rectangle outline: fill the whole rectangle in `color`, then replace the
/// interior inset by `thickness` with `background`.
pub fn draw_rect_outline(
    fb: &mut Framebuffer,
    rect: Rect,
    color: Rgba,
    background: Rgba,
    thickness: u32,
) {
    let thickness = i32::try_from(thickness.max(1)).unwrap_or(i32::MAX);
    draw_rect(fb, rect, color, CompositeOp::Over);
    draw_rect(fb, rect.inset(thickness), background, CompositeOp::Replace);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white(w: u32, h: u32) -> Framebuffer {
        Framebuffer::filled(w, h, Rgba::WHITE).expect("framebuffer creation should succeed")
    }

    #[test]
    fn test_draw_rect() {
        let mut fb = white(100, 100);
        draw_rect(&mut fb, Rect::new(20, 20, 30, 30), Rgba::RED, CompositeOp::Over);

        assert_eq!(fb.get_pixel(25, 25), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(49, 49), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(10, 10), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_rect_negative_origin() {
        let mut fb = white(10, 10);
        draw_rect(&mut fb, Rect::new(-3, -3, 5, 5), Rgba::RED, CompositeOp::Replace);
        assert_eq!(fb.count_pixels(Rgba::RED), 4);
    }

    #[test]
    fn test_draw_rect_empty() {
        let mut fb = white(10, 10);
        draw_rect(&mut fb, Rect::new(2, 2, 0, 5), Rgba::RED, CompositeOp::Over);
        draw_rect(&mut fb, Rect::new(2, 2, -4, 5), Rgba::RED, CompositeOp::Over);
        draw_rect(&mut fb, Rect::new(-9, 2, 4, 5), Rgba::RED, CompositeOp::Over);
        assert_eq!(fb.count_pixels(Rgba::WHITE), 100);
    }

    #[test]
    fn test_draw_rect_outline() {
        let mut fb = white(100, 100);
        draw_rect_outline(&mut fb, Rect::new(20, 20, 30, 30), Rgba::RED, Rgba::WHITE, 2);

        assert_eq!(fb.get_pixel(20, 20), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(21, 35), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(48, 35), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(22, 22), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(35, 35), Some(Rgba::WHITE));
    }

    #[test]
    fn test_outline_thicker_than_half_is_solid() {
        let mut fb = white(20, 20);
        draw_rect_outline(&mut fb, Rect::new(0, 0, 6, 6), Rgba::BLUE, Rgba::WHITE, 3);
        assert_eq!(fb.count_pixels(Rgba::BLUE), 36);
    }

    #[test]
    fn test_outline_huge_thickness_is_solid() {
        for thickness in [2_000_000_000, i32::MAX as u32, u32::MAX] {
            let mut fb = white(20, 20);
            draw_rect_outline(&mut fb, Rect::new(5, 5, 10, 10), Rgba::BLUE, Rgba::WHITE, thickness);
            assert_eq!(fb.count_pixels(Rgba::BLUE), 100, "thickness {thickness}");
        }
    }
}
