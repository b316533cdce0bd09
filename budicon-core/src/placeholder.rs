//! Generated fallback asset for catalog entries without an extracted icon.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_ellipse_mut, draw_hollow_circle_mut};

const DISC_FILL: Rgba<u8> = Rgba([200, 220, 200, 255]);
const LEAF_GREEN: Rgba<u8> = Rgba([100, 150, 100, 255]);

/// Draws the generic circle-and-leaf glyph on a transparent square canvas.
///
/// A pale green disc inset by `size / 20`, outlined in the leaf color, with
/// a filled leaf ellipse sitting slightly above center. Proportions are
/// relative to `size`, so any canvas size yields the same glyph.
pub fn generic_icon(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 0]));

    let center = (size / 2) as i32;
    let padding = (size / 20) as i32;
    let radius = center - padding;
    draw_filled_circle_mut(&mut img, (center, center), radius, DISC_FILL);
    draw_hollow_circle_mut(&mut img, (center, center), radius, LEAF_GREEN);

    let leaf_radius = (size * 3 / 20) as i32;
    let leaf_center_y = center - padding;
    draw_filled_ellipse_mut(
        &mut img,
        (center, leaf_center_y),
        leaf_radius,
        leaf_radius,
        LEAF_GREEN,
    );

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size_and_transparency() {
        let icon = generic_icon(200);
        assert_eq!(icon.width(), 200);
        assert_eq!(icon.height(), 200);

        // Corners lie outside the disc and stay transparent.
        assert_eq!(icon.get_pixel(0, 0)[3], 0);
        assert_eq!(icon.get_pixel(199, 199)[3], 0);
    }

    #[test]
    fn test_leaf_sits_above_center() {
        let icon = generic_icon(200);

        // The leaf ellipse covers the point just above center...
        assert_eq!(icon.get_pixel(100, 90), &LEAF_GREEN);
        // ...while the disc fill shows through near the bottom of the disc.
        assert_eq!(icon.get_pixel(100, 170), &DISC_FILL);
    }
}
