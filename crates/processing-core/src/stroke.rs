//! Aliased stroke rasterization onto raster buffers.
//!
//! Lines and circle outlines are one pixel wide and drawn with
//! `imageproc`. Segments are clipped to the buffer before they are walked,
//! so a pointer far outside the surface costs no more than one that stays
//! on it.

use imageproc::drawing::{draw_hollow_circle_mut, draw_line_segment_mut};
use spinetrace_model::raster::{RasterBuffer, Rgba};
use spinetrace_model::skeleton::{Circle, ReferenceSkeleton};

/// Colour of the reference skeleton layer.
pub const SKELETON_INK: Rgba<u8> = Rgba([96, 96, 96, 255]);

/// Draw a line between two pixel positions, both endpoints included.
///
/// Returns `false` when no part of the segment lies inside the buffer.
pub fn draw_line(
    buffer: &mut RasterBuffer,
    from: (i64, i64),
    to: (i64, i64),
    color: Rgba<u8>,
) -> bool {
    let Some((start, end)) = clip_segment(from, to, buffer.width(), buffer.height()) else {
        return false;
    };
    draw_line_segment_mut(buffer.image_mut(), start, end, color);
    true
}

/// Draw connected line segments through `points`.
pub fn draw_polyline(buffer: &mut RasterBuffer, points: &[(i32, i32)], color: Rgba<u8>) {
    let widen = |(x, y): (i32, i32)| (i64::from(x), i64::from(y));
    match points {
        [] => {}
        [only] => {
            draw_line(buffer, widen(*only), widen(*only), color);
        }
        _ => {
            for pair in points.windows(2) {
                draw_line(buffer, widen(pair[0]), widen(pair[1]), color);
            }
        }
    }
}

/// Draw a circle outline. Pixels outside the buffer are skipped.
pub fn draw_circle(buffer: &mut RasterBuffer, circle: &Circle, color: Rgba<u8>) {
    draw_hollow_circle_mut(
        buffer.image_mut(),
        (circle.cx, circle.cy),
        circle.radius,
        color,
    );
}

/// Draw the reference skeleton (head outline and legs).
pub fn draw_skeleton(buffer: &mut RasterBuffer, skeleton: &ReferenceSkeleton, color: Rgba<u8>) {
    draw_circle(buffer, &skeleton.head, color);
    draw_polyline(buffer, &skeleton.legs, color);
}

/// Clip a segment to the pixel grid of a `width`×`height` buffer
/// (Cohen-Sutherland). Clipped endpoints snap to the nearest pixel.
///
/// Each clip pins one coordinate to the edge exactly, so endpoints near
/// the `i64` limits still land on the right row or column.
fn clip_segment(
    from: (i64, i64),
    to: (i64, i64),
    width: u32,
    height: u32,
) -> Option<((f32, f32), (f32, f32))> {
    const LEFT: u8 = 1;
    const RIGHT: u8 = 2;
    const TOP: u8 = 4;
    const BOTTOM: u8 = 8;

    let x_max = f64::from(width.saturating_sub(1));
    let y_max = f64::from(height.saturating_sub(1));
    let outcode = |(x, y): (f64, f64)| {
        let mut code = 0;
        if x < 0.0 {
            code |= LEFT;
        } else if x > x_max {
            code |= RIGHT;
        }
        if y < 0.0 {
            code |= TOP;
        } else if y > y_max {
            code |= BOTTOM;
        }
        code
    };

    let mut a = (from.0 as f64, from.1 as f64);
    let mut b = (to.0 as f64, to.1 as f64);

    // Each pass moves one endpoint onto an edge it was outside of.
    for _ in 0..8 {
        let (code_a, code_b) = (outcode(a), outcode(b));
        if code_a | code_b == 0 {
            break;
        }
        if code_a & code_b != 0 {
            return None;
        }

        let clip_a = code_a != 0;
        let (code, (x0, y0), (x1, y1)) = if clip_a {
            (code_a, a, b)
        } else {
            (code_b, b, a)
        };
        let clipped = if code & TOP != 0 {
            (x0 + (x1 - x0) * (0.0 - y0) / (y1 - y0), 0.0)
        } else if code & BOTTOM != 0 {
            (x0 + (x1 - x0) * (y_max - y0) / (y1 - y0), y_max)
        } else if code & LEFT != 0 {
            (0.0, y0 + (y1 - y0) * (0.0 - x0) / (x1 - x0))
        } else {
            (x_max, y0 + (y1 - y0) * (x_max - x0) / (x1 - x0))
        };
        if clip_a {
            a = clipped;
        } else {
            b = clipped;
        }
    }

    if outcode(a) | outcode(b) != 0 {
        return None;
    }
    let snap = |(x, y): (f64, f64)| {
        (
            x.round().clamp(0.0, x_max) as f32,
            y.round().clamp(0.0, y_max) as f32,
        )
    };
    Some((snap(a), snap(b)))
}
