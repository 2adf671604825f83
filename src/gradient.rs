//! Vertical gradient backgrounds
//!
//! Every row of the canvas is filled with a single color. The color of row `i`
//! is interpolated linearly between `start` and `end` with `t = i / size`, so the
//! first row is exactly `start` and the last row only approaches `end`.

use image::{Rgb, RgbImage};

/// Default first-row color (`#667eea`)
pub const DEFAULT_START: Rgb<u8> = Rgb([102, 126, 234]);

/// Default color approached by the last row (`#767eea`)
pub const DEFAULT_END: Rgb<u8> = Rgb([118, 126, 234]);

/// Color of `row` in a gradient spanning `size` rows
pub fn row_color(start: Rgb<u8>, end: Rgb<u8>, row: u32, size: u32) -> Rgb<u8> {
    if size == 0 {
        return start;
    }

    let t = row as f64 / size as f64;
    Rgb([
        lerp_channel(start[0], end[0], t),
        lerp_channel(start[1], end[1], t),
        lerp_channel(start[2], end[2], t),
    ])
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let value = from as f64 + (to as f64 - from as f64) * t;
    value.round().clamp(0.0, 255.0) as u8
}

/// Fill every row of `canvas` with its gradient color
pub fn paint_vertical_gradient(canvas: &mut RgbImage, start: Rgb<u8>, end: Rgb<u8>) {
    let size = canvas.height();
    for (y, row) in canvas.enumerate_rows_mut() {
        let color = row_color(start, end, y, size);
        for (_, _, pixel) in row {
            *pixel = color;
        }
    }
}
