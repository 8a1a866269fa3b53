//! Integer rasterization of circles and lines.
//!
//! Both rasterizers are pure: they take geometry by value and hand back an
//! iterator of [`Point`](crate::geometry::Point)s. Nothing is retained between
//! calls and nothing is written anywhere; painting the result is the job of a
//! [`PixelSink`](crate::sink::PixelSink).
//!
//! # Algorithms
//!
//! - **Midpoint circle**: eight-way symmetric outline using a running integer
//!   decision variable (no square roots, no trigonometry)
//! - **DDA line**: one pixel per x step, the y coordinate advanced by an
//!   accumulating error term (no floating point, no division)
//!
//! # References
//!
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital
//!   display of circular arcs." *Communications of the ACM*, 20(2).
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod circle;
mod line;

pub use circle::{circle_points, distinct_circle_points, rasterize_circle, CirclePoints};
pub use line::{
    line_points, line_points_any_octant, line_points_clipped, rasterize_line, LinePoints,
};
