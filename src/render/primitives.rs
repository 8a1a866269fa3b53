//! Primitive drawing functions.
//!
//! Glue between the rasterizers and a [`PixelSink`]: outlines, filled discs
//! and thick round-capped strokes.

use crate::color::Rgba;
use crate::geometry::{Circle, Point, Segment};
use crate::raster::{
    circle_points, distinct_circle_points, line_points, line_points_any_octant, line_points_clipped,
};
use crate::sink::{paint_points, PixelSink};
use std::collections::BTreeMap;

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive into a sink.
    fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba);
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a line with the x-driven DDA rasterizer.
///
/// Right-to-left segments draw nothing; see [`draw_line_any_octant`].
pub fn draw_line<S: PixelSink + ?Sized>(sink: &mut S, segment: Segment, color: Rgba) {
    paint_points(sink, line_points(segment), color);
}

/// Draw a one pixel wide line in any direction.
pub fn draw_line_any_octant<S: PixelSink + ?Sized>(sink: &mut S, segment: Segment, color: Rgba) {
    paint_points(sink, line_points_any_octant(segment), color);
}

/// Draw a thick line with round caps.
///
/// A disc of diameter `width` is stamped at every pixel of the centre line.
/// Stamps are merged into one span per row, so each covered pixel is written
/// once and translucent colours do not build up where stamps overlap.
///
/// When the sink reports [`bounds`](PixelSink::bounds), only centre pixels
/// within a brush radius of that area are visited and only visible rows are
/// kept, so the cost does not grow with how far the segment reaches outside.
pub fn draw_stroke<S: PixelSink + ?Sized>(sink: &mut S, segment: Segment, width: u32, color: Rgba) {
    let radius = i64::from(brush_radius(width));
    let brush = row_spans(Circle::from_coords(0, 0, radius as i32));

    let (visible_min, visible_max) = match sink.bounds() {
        Some(size) if size.is_empty() => return,
        Some(size) => ((0, 0), (i64::from(size.width) - 1, i64::from(size.height) - 1)),
        None => (
            (i64::from(i32::MIN), i64::from(i32::MIN)),
            (i64::from(i32::MAX), i64::from(i32::MAX)),
        ),
    };
    let centre_min = Point::new(clamp_i32(visible_min.0 - radius), clamp_i32(visible_min.1 - radius));
    let centre_max = Point::new(clamp_i32(visible_max.0 + radius), clamp_i32(visible_max.1 + radius));

    // Consecutive centres differ by at most one pixel on each axis, so the
    // stamps covering any one row form a single run.
    let mut rows: BTreeMap<i32, (i32, i32)> = BTreeMap::new();
    for center in line_points_clipped(segment, centre_min, centre_max) {
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        let dy_range = clamp_i32(visible_min.1 - cy)..=clamp_i32(visible_max.1 - cy);

        for (&dy, &(lo, hi)) in brush.range(dy_range) {
            let x_lo = (cx + i64::from(lo)).max(visible_min.0);
            let x_hi = (cx + i64::from(hi)).min(visible_max.0);
            if x_lo > x_hi {
                continue;
            }
            let (y, x_lo, x_hi) = ((cy + i64::from(dy)) as i32, x_lo as i32, x_hi as i32);
            rows.entry(y)
                .and_modify(|(a, b)| {
                    *a = (*a).min(x_lo);
                    *b = (*b).max(x_hi);
                })
                .or_insert((x_lo, x_hi));
        }
    }

    for (y, (x_lo, x_hi)) in rows {
        for x in x_lo..=x_hi {
            sink.put_pixel(Point::new(x, y), color);
        }
    }
}

/// Radius of the disc stamped for a brush `width` pixels wide.
#[inline]
fn brush_radius(width: u32) -> i32 {
    (width.max(1) / 2).min(i32::MAX as u32) as i32
}

#[inline]
fn clamp_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl Drawable for Segment {
    fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba) {
        draw_line(sink, *self, color);
    }
}

// ============================================================================
// Circle/Point Drawing
// ============================================================================

/// Draw a circle outline with the midpoint rasterizer.
///
/// Every emitted point is written, including the duplicates on the axes and
/// diagonals.
pub fn draw_circle_outline<S: PixelSink + ?Sized>(sink: &mut S, circle: Circle, color: Rgba) {
    paint_points(sink, circle_points(circle), color);
}

/// Draw a filled circle.
///
/// Each row between the outline's leftmost and rightmost pixel is filled.
pub fn draw_circle<S: PixelSink + ?Sized>(sink: &mut S, circle: Circle, color: Rgba) {
    for (y, (x_min, x_max)) in row_spans(circle) {
        for x in x_min..=x_max {
            sink.put_pixel(Point::new(x, y), color);
        }
    }
}

/// Draw a single pixel.
pub fn draw_point<S: PixelSink + ?Sized>(sink: &mut S, point: Point, color: Rgba) {
    sink.put_pixel(point, color);
}

/// Horizontal extent of the rasterized outline on each row.
fn row_spans(circle: Circle) -> BTreeMap<i32, (i32, i32)> {
    let mut spans: BTreeMap<i32, (i32, i32)> = BTreeMap::new();
    for p in distinct_circle_points(circle) {
        spans
            .entry(p.y)
            .and_modify(|(lo, hi)| {
                *lo = (*lo).min(p.x);
                *hi = (*hi).max(p.x);
            })
            .or_insert((p.x, p.x));
    }
    spans
}

impl Drawable for Circle {
    fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba) {
        draw_circle_outline(sink, *self, color);
    }
}

impl Drawable for Point {
    fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba) {
        draw_point(sink, *self, color);
    }
}

// ============================================================================
// Tests
// ============================================================================
