//! # canvas-raster
//!
//! Integer rasterization of circles and lines, and the small canvas toolkit
//! built around them.
//!
//! The core is two pure rasterizers that turn geometry into pixel coordinates
//! without floating point: the midpoint circle algorithm and an x-driven DDA
//! line algorithm. Everything else consumes their output: a [`PixelSink`]
//! trait, an RGBA [`Framebuffer`], a freehand [`PaintSession`], an
//! [`ImageViewer`] pan/center model and PNG import/export.
//!
//! ## Quick Start
//!
//! ```
//! use canvas_raster::prelude::*;
//!
//! let mut fb = Framebuffer::new(64, 64)?;
//! fb.clear(Rgba::WHITE);
//!
//! draw_circle_outline(&mut fb, Circle::from_coords(32, 32, 5), Rgba::BLUE);
//! draw_line(&mut fb, Segment::from_coords(10, 10, 20, 19), Rgba::RED);
//!
//! assert_eq!(fb.get_pixel(37, 32), Some(Rgba::BLUE));
//! assert_eq!(fb.get_pixel(20, 19), Some(Rgba::RED));
//! # Ok::<(), canvas_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli`: the `raster-demo` binary
//!
//! [`PixelSink`]: sink::PixelSink
//! [`Framebuffer`]: framebuffer::Framebuffer
//! [`PaintSession`]: paint::PaintSession
//! [`ImageViewer`]: viewer::ImageViewer

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]

// ============================================================================
// Core Modules
// ============================================================================

/// Integer geometric primitives (points, circles, segments).
pub mod geometry;

/// Circle and line rasterizers.
pub mod raster;

/// Pixel sink trait consumed by drawing code.
pub mod sink;

// ============================================================================
// Surface Modules
// ============================================================================

/// RGBA color type and hex parsing.
pub mod color;

/// RGBA framebuffer implementing [`sink::PixelSink`].
pub mod framebuffer;

/// Drawing primitives into pixel sinks.
pub mod render;

/// PNG encoder and decoder.
pub mod output;

// ============================================================================
// Interaction Modules
// ============================================================================

/// Freehand paint session.
pub mod paint;

/// Image viewer pan/center model.
pub mod viewer;

/// YAML configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for canvas-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```
/// use canvas_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Circle, Point, Segment, Size};
    pub use crate::output::{PngDecoder, PngEncoder};
    pub use crate::paint::{Brush, PaintSession, StrokeState};
    pub use crate::raster::{
        circle_points, distinct_circle_points, line_points, line_points_any_octant,
        line_points_clipped, rasterize_circle, rasterize_line,
    };
    pub use crate::render::{
        draw_circle, draw_circle_outline, draw_line, draw_line_any_octant, draw_point, draw_stroke,
        Drawable,
    };
    pub use crate::sink::{paint_points, PixelSink};
    pub use crate::viewer::{DragState, ImageViewer};
}
