//! Midpoint circle rasterizer.

use crate::geometry::{Circle, Point};
use std::collections::HashSet;
use std::iter::FusedIterator;

/// Lazy sequence of outline pixels for a [`Circle`].
///
/// Each iteration of the midpoint loop yields all eight reflections of the
/// current offset, in a fixed order, even where reflections coincide (on the
/// axes and on the diagonal). Use [`distinct_circle_points`] for unique pixels.
#[derive(Debug, Clone)]
pub struct CirclePoints {
    center: Point,
    /// Only set for the zero-radius circle, which yields its center once.
    lone_center: Option<Point>,
    x: i32,
    y: i32,
    err: i64,
    /// Next reflection (0..8) of the current (x, y) offset to yield.
    reflection: u8,
}

impl CirclePoints {
    fn new(circle: Circle) -> Self {
        let (x, y, lone_center) = if circle.radius == 0 {
            // x < y ends the loop immediately
            (0, 1, Some(circle.center))
        } else {
            (circle.radius, 0, None)
        };

        Self {
            center: circle.center,
            lone_center,
            x,
            y,
            err: 0,
            reflection: 0,
        }
    }

    #[inline]
    fn reflect(&self, reflection: u8) -> Point {
        let Point { x: cx, y: cy } = self.center;
        let (x, y) = (self.x, self.y);
        let (px, py) = match reflection {
            0 => (cx.wrapping_add(x), cy.wrapping_add(y)),
            1 => (cx.wrapping_add(y), cy.wrapping_add(x)),
            2 => (cx.wrapping_sub(y), cy.wrapping_add(x)),
            3 => (cx.wrapping_sub(x), cy.wrapping_add(y)),
            4 => (cx.wrapping_sub(x), cy.wrapping_sub(y)),
            5 => (cx.wrapping_sub(y), cy.wrapping_sub(x)),
            6 => (cx.wrapping_add(y), cy.wrapping_sub(x)),
            _ => (cx.wrapping_add(x), cy.wrapping_sub(y)),
        };
        Point::new(px, py)
    }

    /// Advance the decision variable by one midpoint step.
    #[inline]
    fn step(&mut self) {
        if self.err <= 0 {
            self.y += 1;
            self.err += 2 * i64::from(self.y) + 1;
        }
        // Deliberately not `else`: both axes may move in the same step.
        if self.err > 0 {
            self.x -= 1;
            self.err -= 2 * i64::from(self.x) + 1;
        }
    }
}

impl Iterator for CirclePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if let Some(center) = self.lone_center.take() {
            return Some(center);
        }
        if self.x < self.y {
            return None;
        }

        let point = self.reflect(self.reflection);
        self.reflection += 1;
        if self.reflection == 8 {
            self.reflection = 0;
            self.step();
        }
        Some(point)
    }
}

impl FusedIterator for CirclePoints {}

/// Rasterize the outline of `circle` lazily.
///
/// - radius 0 yields exactly the center
/// - a negative radius yields nothing
///
/// # Example
///
/// ```
/// use canvas_raster::geometry::{Circle, Point};
/// use canvas_raster::raster::circle_points;
///
/// let first: Vec<Point> = circle_points(Circle::from_coords(0, 0, 5)).take(2).collect();
/// assert_eq!(first, vec![Point::new(5, 0), Point::new(0, 5)]);
/// ```
#[must_use]
pub fn circle_points(circle: Circle) -> CirclePoints {
    CirclePoints::new(circle)
}

/// Rasterize the outline of `circle` into a vector, duplicates included.
#[must_use]
pub fn rasterize_circle(circle: Circle) -> Vec<Point> {
    circle_points(circle).collect()
}

/// Rasterize the outline of `circle` with duplicate pixels removed.
///
/// Order is that of first emission.
#[must_use]
pub fn distinct_circle_points(circle: Circle) -> Vec<Point> {
    let mut seen = HashSet::new();
    circle_points(circle).filter(|p| seen.insert(*p)).collect()
}
