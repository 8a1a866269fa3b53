//! Drawing rasterized primitives into pixel sinks.
//!
//! The [`raster`](crate::raster) module only computes coordinates; this module
//! commits them to any [`PixelSink`](crate::sink::PixelSink), typically a
//! [`Framebuffer`](crate::framebuffer::Framebuffer).

mod primitives;

pub use primitives::{
    draw_circle, draw_circle_outline, draw_line, draw_line_any_octant, draw_point, draw_stroke,
    Drawable,
};
