//! DDA line rasterizer.

use crate::geometry::{Point, Segment};
use std::iter::FusedIterator;

/// Lazy sequence of pixels along a [`Segment`], iterating on x.
///
/// One point is produced for every integer x from `start.x` to `end.x`
/// inclusive; a segment running right-to-left produces nothing. The y
/// coordinate moves towards `end.y` by at most one unit per step.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i64,
    end_x: i64,
    y: i64,
    dir_y: i64,
    error: i64,
    delta_error: i64,
    /// `deltax + 1`: the error value at which y advances.
    threshold: i64,
}

impl LinePoints {
    fn new(segment: Segment) -> Self {
        let (x0, y0) = (i64::from(segment.start.x), i64::from(segment.start.y));
        let (x1, y1) = (i64::from(segment.end.x), i64::from(segment.end.y));

        let delta_x = (x1 - x0).abs();
        let delta_y = (y1 - y0).abs();
        let dir_y = if y1 < y0 { -1 } else { 1 };

        Self {
            x: x0,
            end_x: x1,
            y: y0,
            dir_y,
            error: 0,
            delta_error: delta_y + 1,
            threshold: delta_x + 1,
        }
    }

    fn remaining(&self) -> usize {
        usize::try_from(self.end_x - self.x + 1).unwrap_or(0)
    }

    /// Restrict the walk to columns `first_x..=last_x`.
    ///
    /// Yields exactly the points of the unrestricted walk whose x falls in
    /// the range. Skipped columns are stepped over in constant time, so a
    /// window onto a very long segment costs only the window's width.
    #[must_use]
    pub fn columns(mut self, first_x: i32, last_x: i32) -> Self {
        let first_x = i64::from(first_x);
        if first_x > self.x {
            let steps = i128::from(first_x - self.x);
            let (de, th) = (i128::from(self.delta_error), i128::from(self.threshold));
            let error = i128::from(self.error);

            // error < threshold after every step when delta_error <= threshold,
            // otherwise y advances on every step.
            let (advance, error) = if de <= th {
                let total = error + steps * de;
                (total / th, total % th)
            } else {
                (steps, error + steps * (de - th))
            };
            self.y += self.dir_y * advance as i64;
            self.error = error as i64;
            self.x = first_x;
        }
        self.end_x = self.end_x.min(i64::from(last_x));
        self
    }
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.x > self.end_x {
            return None;
        }

        // x stays within [x0, x1] and y within [y0, y1], so both fit in i32.
        let point = Point::new(self.x as i32, self.y as i32);

        self.error += self.delta_error;
        if self.error >= self.threshold {
            self.y += self.dir_y;
            self.error -= self.threshold;
        }
        self.x += 1;

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePoints {}

impl FusedIterator for LinePoints {}

/// Rasterize `segment` lazily, stepping x from start to end.
///
/// Yields `end.x - start.x + 1` points when `end.x >= start.x` and nothing
/// otherwise. Segments steeper than 45 degrees stop short of `end.y`, since y
/// can advance at most once per x step; use [`line_points_any_octant`] for
/// arbitrary directions.
///
/// # Example
///
/// ```
/// use canvas_raster::geometry::{Point, Segment};
/// use canvas_raster::raster::line_points;
///
/// let points: Vec<Point> = line_points(Segment::from_coords(0, 0, 4, 2)).collect();
/// assert_eq!(points.first(), Some(&Point::new(0, 0)));
/// assert_eq!(points.last(), Some(&Point::new(4, 2)));
/// ```
#[must_use]
pub fn line_points(segment: Segment) -> LinePoints {
    LinePoints::new(segment)
}

/// Rasterize `segment` into a vector.
#[must_use]
pub fn rasterize_line(segment: Segment) -> Vec<Point> {
    line_points(segment).collect()
}

/// Rasterize `segment` in any of the eight octants.
///
/// Steep segments are transposed and right-to-left segments are reversed so
/// that the DDA core always walks the dominant axis forwards; the result is
/// mapped back and ordered from `start` to `end`, both included.
#[must_use]
pub fn line_points_any_octant(segment: Segment) -> Vec<Point> {
    let walk = DominantWalk::new(segment);
    let mut points: Vec<Point> = line_points(walk.walked).map(|p| walk.restore(p)).collect();
    if walk.backwards {
        points.reverse();
    }
    points
}

/// The points of [`line_points_any_octant`] that lie inside the box
/// `min..=max`, in no particular order.
///
/// Work is bounded by the box's extent along the segment's dominant axis,
/// however long the segment is.
///
/// # Example
///
/// ```
/// use canvas_raster::geometry::{Point, Segment};
/// use canvas_raster::raster::line_points_clipped;
///
/// let far = Segment::from_coords(0, 0, i32::MAX, 0);
/// let visible: Vec<Point> = line_points_clipped(far, Point::new(0, 0), Point::new(3, 3)).collect();
/// assert_eq!(visible.len(), 4);
/// ```
pub fn line_points_clipped(segment: Segment, min: Point, max: Point) -> impl Iterator<Item = Point> {
    let walk = DominantWalk::new(segment);
    let (lo, hi) = (walk.restore(min), walk.restore(max));

    line_points(walk.walked)
        .columns(lo.x, hi.x)
        .map(move |p| walk.restore(p))
        .filter(move |p| (min.x..=max.x).contains(&p.x) && (min.y..=max.y).contains(&p.y))
}

/// A segment rewritten so that x is the dominant axis and runs forwards.
#[derive(Debug, Clone, Copy)]
struct DominantWalk {
    walked: Segment,
    steep: bool,
    backwards: bool,
}

impl DominantWalk {
    fn new(segment: Segment) -> Self {
        let steep = segment.is_steep();
        let transpose = |p: Point| if steep { Point::new(p.y, p.x) } else { p };

        let walked = Segment::new(transpose(segment.start), transpose(segment.end));
        let backwards = walked.start.x > walked.end.x;
        let walked = if backwards { walked.reversed() } else { walked };

        Self {
            walked,
            steep,
            backwards,
        }
    }

    /// Map between the walked frame and the caller's frame (its own inverse).
    #[inline]
    fn restore(&self, p: Point) -> Point {
        if self.steep {
            Point::new(p.y, p.x)
        } else {
            p
        }
    }
}
