//! Integer geometric primitives.
//!
//! Everything here lives on the pixel grid: a [`Point`] is one cell, a
//! [`Circle`] and a [`Segment`] are the inputs of the two rasterizers.

/// A pixel coordinate on the integer grid.
///
/// Coordinates may be negative or lie outside any surface; clipping is the
/// job of the [`PixelSink`](crate::sink::PixelSink) that consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset of this point relative to `origin`.
    ///
    /// Wraps like the circle rasterizer does, so a point reflected past the
    /// `i32` limits still maps back to its small offset.
    #[must_use]
    pub const fn offset_from(self, origin: Self) -> (i32, i32) {
        (self.x.wrapping_sub(origin.x), self.y.wrapping_sub(origin.y))
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A circle given by its center and integer radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Circle {
    /// Center pixel.
    pub center: Point,
    /// Radius in pixels. Negative radii rasterize to nothing.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }

    /// Create a circle from raw coordinates.
    #[must_use]
    pub const fn from_coords(cx: i32, cy: i32, radius: i32) -> Self {
        Self::new(Point::new(cx, cy), radius)
    }
}

/// A line segment between two pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// The same segment traversed in the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Whether the y-span exceeds the x-span.
    #[must_use]
    pub fn is_steep(&self) -> bool {
        let dx = (i64::from(self.end.x) - i64::from(self.start.x)).abs();
        let dy = (i64::from(self.end.y) - i64::from(self.start.y)).abs();
        dy > dx
    }
}

/// Width and height of a rectangular area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either side is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
