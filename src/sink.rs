//! Pixel sinks: where rasterized points end up.
//!
//! A sink accepts any integer coordinate. Points that fall outside whatever
//! surface it manages are clipped by the sink, never reported back to the
//! rasterizer.

use crate::color::Rgba;
use crate::geometry::{Point, Size};

/// A surface that can commit a coloured point.
pub trait PixelSink {
    /// Commit `color` at `point`, silently ignoring points outside the surface.
    fn put_pixel(&mut self, point: Point, color: Rgba);

    /// Area `(0, 0)..(width, height)` outside which points are dropped.
    ///
    /// `None` means the sink keeps every coordinate. Drawing code uses this
    /// to skip work on points that would be clipped anyway.
    fn bounds(&self) -> Option<Size> {
        None
    }
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn put_pixel(&mut self, point: Point, color: Rgba) {
        (**self).put_pixel(point, color);
    }

    fn bounds(&self) -> Option<Size> {
        (**self).bounds()
    }
}

/// Records every point unclipped, in order.
impl PixelSink for Vec<(Point, Rgba)> {
    fn put_pixel(&mut self, point: Point, color: Rgba) {
        self.push((point, color));
    }
}

/// Write every point of `points` into `sink` with a single colour.
pub fn paint_points<S, I>(sink: &mut S, points: I, color: Rgba)
where
    S: PixelSink + ?Sized,
    I: IntoIterator<Item = Point>,
{
    for point in points {
        sink.put_pixel(point, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Segment;
    use crate::raster::line_points;

    #[test]
    fn test_vec_sink_records_in_order() {
        let mut sink: Vec<(Point, Rgba)> = Vec::new();
        paint_points(&mut sink, line_points(Segment::from_coords(0, 0, 2, 0)), Rgba::RED);

        let points: Vec<Point> = sink.iter().map(|(p, _)| *p).collect();
        assert_eq!(points, vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]);
        assert!(sink.iter().all(|(_, c)| *c == Rgba::RED));
    }

    #[test]
    fn test_vec_sink_keeps_negative_coordinates() {
        let mut sink: Vec<(Point, Rgba)> = Vec::new();
        sink.put_pixel(Point::new(-5, -7), Rgba::BLUE);
        assert_eq!(sink, vec![(Point::new(-5, -7), Rgba::BLUE)]);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn put_owned<S: PixelSink>(mut sink: S) {
            sink.put_pixel(Point::new(1, 1), Rgba::GREEN);
        }

        let mut sink: Vec<(Point, Rgba)> = Vec::new();
        put_owned(&mut sink);
        assert_eq!(sink, vec![(Point::new(1, 1), Rgba::GREEN)]);
    }

    #[test]
    fn test_bounds_forward_through_references() {
        fn bounds_of<S: PixelSink>(sink: S) -> Option<Size> {
            sink.bounds()
        }

        let mut recorded: Vec<(Point, Rgba)> = Vec::new();
        assert_eq!(bounds_of(&mut recorded), None);

        let mut fb = crate::framebuffer::Framebuffer::new(7, 3).unwrap();
        assert_eq!(bounds_of(&mut fb), Some(Size::new(7, 3)));
    }
}
