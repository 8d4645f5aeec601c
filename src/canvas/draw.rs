//! Software rasterization of strokes
//!
//! Strokes are rendered with a round brush: a single point is a filled disc and a segment
//! stamps that disc along a Bresenham walk between its two endpoints. All pixel writes are
//! clipped against the canvas bounds so out-of-range stroke coordinates never fault.

use crate::canvas::{Canvas, Color, Point};

/// Put a single pixel, silently dropping writes that fall outside the canvas
#[inline]
fn put_pixel(canvas: &mut Canvas, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 {
        return;
    }
    let _ = canvas.set_pixel(x as usize, y as usize, color);
}

/// Stamp a filled disc of the given diameter centered on (cx,cy)
fn put_disc(canvas: &mut Canvas, cx: i32, cy: i32, diameter: u32, color: Color) {
    let r = (diameter / 2) as i32;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                put_pixel(canvas, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Render a single stroke point with a round cap
pub fn draw_point(canvas: &mut Canvas, at: Point, stroke_width: u32, color: Color) {
    put_disc(canvas, at.x, at.y, stroke_width, color);
}

/// Render the stroke segment between two sampled pointer positions
///
/// The brush disc is stamped at every step of the walk so that fast pointer movement still
/// leaves a continuous line.
pub fn draw_segment(canvas: &mut Canvas, from: Point, to: Point, stroke_width: u32, color: Color) {
    let (mut x0, mut y0) = (from.x, from.y);
    let (x1, y1) = (to.x, to.y);

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put_disc(canvas, x0, y0, stroke_width, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
