//! Read-back checks for generated icons

use crate::gradient::row_color;
use image::{Rgb, RgbImage};
use rusttype::{point, Rect};

/// Bounding box of every pixel that differs from its row's gradient color
///
/// This is where the label ended up. Returns `None` for a plain gradient.
pub fn label_ink_bounds(img: &RgbImage, start: Rgb<u8>, end: Rgb<u8>) -> Option<Rect<i32>> {
    let size = img.height();
    let mut bounds: Option<Rect<i32>> = None;

    for (x, y, pixel) in img.enumerate_pixels() {
        if *pixel == row_color(start, end, y, size) {
            continue;
        }
        let (x, y) = (x as i32, y as i32);
        bounds = Some(match bounds {
            None => Rect {
                min: point(x, y),
                max: point(x + 1, y + 1),
            },
            Some(r) => Rect {
                min: point(r.min.x.min(x), r.min.y.min(y)),
                max: point(r.max.x.max(x + 1), r.max.y.max(y + 1)),
            },
        });
    }

    bounds
}

/// Offset of `bounds` from the position that would center it in a square of `size`
pub fn centering_offset(size: u32, bounds: &Rect<i32>) -> (i32, i32) {
    let expected_x = (size as i32 - bounds.width()).div_euclid(2);
    let expected_y = (size as i32 - bounds.height()).div_euclid(2);
    (bounds.min.x - expected_x, bounds.min.y - expected_y)
}
