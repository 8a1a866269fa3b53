//! Freehand painting on a framebuffer.
//!
//! [`PaintSession`] owns the canvas, the current brush and the stroke state.
//! Pointer input arrives as plain method calls; there is no event loop here.
//!
//! ```
//! use canvas_raster::color::Rgba;
//! use canvas_raster::geometry::Point;
//! use canvas_raster::paint::PaintSession;
//!
//! let mut session = PaintSession::new(64, 64).unwrap();
//! session.set_color_hex("#ff0000").unwrap();
//! session.pointer_down(Point::new(10, 10));
//! session.pointer_move(Point::new(40, 20));
//! session.pointer_up();
//! assert_eq!(session.canvas().get_pixel(40, 20), Some(Rgba::RED));
//! ```

use crate::color::Rgba;
use crate::config::Config;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Segment};
use crate::output::{PngDecoder, PngEncoder};
use crate::render::draw_stroke;
use std::path::Path;

/// Whether a stroke is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeState {
    /// Pointer is up; moves do not paint.
    #[default]
    Idle,
    /// Pointer is down; the next move paints from `last`.
    Drawing {
        /// Position of the previous pointer sample.
        last: Point,
    },
}

/// Brush used for strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    /// Stroke colour.
    pub color: Rgba,
    /// Stroke width in pixels, at least 1.
    pub width: u32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            width: 5,
        }
    }
}

/// A canvas plus the state needed to paint on it with a pointer.
#[derive(Debug, Clone)]
pub struct PaintSession {
    canvas: Framebuffer,
    background: Rgba,
    brush: Brush,
    state: StrokeState,
}

impl PaintSession {
    /// Create a session with a transparent canvas and the default brush.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            canvas: Framebuffer::new(width, height)?,
            background: Rgba::TRANSPARENT,
            brush: Brush::default(),
            state: StrokeState::Idle,
        })
    }

    /// Create a session from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas size is zero or a colour is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut session = Self::new(config.canvas.width, config.canvas.height)?;
        session.background = config.background()?;
        session.brush = Brush {
            color: config.brush_color()?,
            width: config.brush.width.max(1),
        };
        session.canvas.clear(session.background);
        Ok(session)
    }

    /// The canvas painted so far.
    #[must_use]
    pub fn canvas(&self) -> &Framebuffer {
        &self.canvas
    }

    /// Current brush.
    #[must_use]
    pub fn brush(&self) -> Brush {
        self.brush
    }

    /// Current stroke state.
    #[must_use]
    pub fn state(&self) -> StrokeState {
        self.state
    }

    /// Whether a stroke is in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, StrokeState::Drawing { .. })
    }

    /// Set the brush colour.
    pub fn set_color(&mut self, color: Rgba) {
        self.brush.color = color;
    }

    /// Set the brush colour from a hex string such as a colour picker returns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`](crate::Error::InvalidColor) and keeps the
    /// current colour if `hex` does not parse.
    pub fn set_color_hex(&mut self, hex: &str) -> Result<()> {
        self.brush.color = Rgba::from_hex(hex)?;
        Ok(())
    }

    /// Set the brush width; zero is treated as one.
    pub fn set_brush_width(&mut self, width: u32) {
        self.brush.width = width.max(1);
    }

    /// Pointer pressed: start a stroke and dab the brush at `at`.
    pub fn pointer_down(&mut self, at: Point) {
        self.stroke(Segment::new(at, at));
        self.state = StrokeState::Drawing { last: at };
    }

    /// Pointer moved: continue the stroke, if any.
    pub fn pointer_move(&mut self, to: Point) {
        if let StrokeState::Drawing { last } = self.state {
            self.stroke(Segment::new(last, to));
            self.state = StrokeState::Drawing { last: to };
        }
    }

    /// Pointer released: end the stroke.
    pub fn pointer_up(&mut self) {
        self.state = StrokeState::Idle;
    }

    /// Pointer left the canvas: end the stroke.
    pub fn pointer_leave(&mut self) {
        self.state = StrokeState::Idle;
    }

    /// Pointer entered the canvas; resumes drawing if the primary button is held.
    pub fn pointer_enter(&mut self, at: Point, primary_pressed: bool) {
        if primary_pressed {
            self.state = StrokeState::Drawing { last: at };
        }
    }

    /// Wipe the canvas back to the background colour.
    pub fn clear(&mut self) {
        self.canvas.clear(self.background);
        self.state = StrokeState::Idle;
    }

    /// Save the canvas as PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PngEncoder::write_to_file(&self.canvas, path)
    }

    /// Encode the canvas as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        PngEncoder::to_bytes(&self.canvas)
    }

    /// Draw a PNG image stretched over the whole canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is not a decodable PNG; the canvas is left
    /// untouched in that case.
    pub fn import_png(&mut self, bytes: &[u8]) -> Result<()> {
        let image = PngDecoder::from_bytes(bytes)?;
        tracing::debug!(
            src_width = image.width(),
            src_height = image.height(),
            width = self.canvas.width(),
            height = self.canvas.height(),
            "importing image"
        );
        self.canvas.draw_image_scaled(&image);
        Ok(())
    }

    /// Read a PNG file and draw it stretched over the whole canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn import_png_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let image = PngDecoder::read_file(path)?;
        self.canvas.draw_image_scaled(&image);
        Ok(())
    }

    fn stroke(&mut self, segment: Segment) {
        draw_stroke(&mut self.canvas, segment, self.brush.width, self.brush.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn session() -> PaintSession {
        PaintSession::new(50, 50).unwrap()
    }

    #[test]
    fn test_new_session_is_idle_and_blank() {
        let s = session();
        assert_eq!(s.state(), StrokeState::Idle);
        assert_eq!(s.brush(), Brush::default());
        assert!(s.canvas().to_compact_pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_move_without_press_paints_nothing() {
        let mut s = session();
        s.pointer_move(Point::new(10, 10));
        s.pointer_move(Point::new(20, 20));
        assert!(s.canvas().to_compact_pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_press_move_release() {
        let mut s = session();
        s.set_brush_width(1);

        s.pointer_down(Point::new(5, 5));
        assert!(s.is_drawing());
        assert_eq!(s.canvas().get_pixel(5, 5), Some(Rgba::BLACK));

        s.pointer_move(Point::new(15, 5));
        assert_eq!(s.state(), StrokeState::Drawing { last: Point::new(15, 5) });
        for x in 5..=15 {
            assert_eq!(s.canvas().get_pixel(x, 5), Some(Rgba::BLACK));
        }

        s.pointer_up();
        assert!(!s.is_drawing());
        s.pointer_move(Point::new(15, 30));
        assert_eq!(s.canvas().get_pixel(15, 20), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_stroke_right_to_left_and_steep() {
        let mut s = session();
        s.set_brush_width(1);
        s.pointer_down(Point::new(40, 40));
        s.pointer_move(Point::new(38, 10));
        assert_eq!(s.canvas().get_pixel(38, 10), Some(Rgba::BLACK));
        assert_eq!(s.canvas().get_pixel(40, 40), Some(Rgba::BLACK));
    }

    #[test]
    fn test_thick_brush_covers_neighbours() {
        let mut s = session();
        s.pointer_down(Point::new(25, 25));
        // Default width 5 paints a radius-2 dab
        assert_eq!(s.canvas().get_pixel(27, 25), Some(Rgba::BLACK));
        assert_eq!(s.canvas().get_pixel(25, 23), Some(Rgba::BLACK));
        assert_eq!(s.canvas().get_pixel(28, 25), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_leave_and_reenter() {
        let mut s = session();
        s.set_brush_width(1);
        s.pointer_down(Point::new(1, 1));
        s.pointer_leave();
        assert!(!s.is_drawing());

        s.pointer_enter(Point::new(10, 10), false);
        assert!(!s.is_drawing());

        s.pointer_enter(Point::new(10, 10), true);
        assert_eq!(s.state(), StrokeState::Drawing { last: Point::new(10, 10) });
        s.pointer_move(Point::new(12, 10));
        assert_eq!(s.canvas().get_pixel(11, 10), Some(Rgba::BLACK));
    }

    #[test]
    fn test_strokes_clip_at_edges() {
        let mut s = session();
        s.pointer_down(Point::new(-20, -20));
        s.pointer_move(Point::new(80, 80));
        assert_eq!(s.canvas().get_pixel(0, 0), Some(Rgba::BLACK));
        assert_eq!(s.canvas().get_pixel(49, 49), Some(Rgba::BLACK));
    }

    #[test]
    fn test_distant_pointer_samples_stay_bounded() {
        let mut s = session();
        s.set_color(Rgba::RED);
        s.pointer_down(Point::new(0, 0));
        s.pointer_move(Point::new(i32::MAX, 0));
        s.pointer_move(Point::new(i32::MIN, i32::MIN));
        s.pointer_move(Point::new(25, 25));

        assert_eq!(s.state(), StrokeState::Drawing { last: Point::new(25, 25) });
        assert_eq!(s.canvas().get_pixel(49, 0), Some(Rgba::RED));
        assert_eq!(s.canvas().get_pixel(25, 25), Some(Rgba::RED));
    }

    #[test]
    fn test_set_color_hex() {
        let mut s = session();
        s.set_color_hex("#00ff00").unwrap();
        assert_eq!(s.brush().color, Rgba::GREEN);

        let err = s.set_color_hex("not-a-colour").unwrap_err();
        assert!(matches!(err, Error::InvalidColor(_)));
        assert_eq!(s.brush().color, Rgba::GREEN);
    }

    #[test]
    fn test_zero_width_brush_is_one() {
        let mut s = session();
        s.set_brush_width(0);
        assert_eq!(s.brush().width, 1);
    }

    #[test]
    fn test_clear_restores_background() {
        let mut s = session();
        s.pointer_down(Point::new(10, 10));
        s.clear();
        assert!(!s.is_drawing());
        assert_eq!(s.canvas().get_pixel(10, 10), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.canvas.width = 20;
        config.canvas.height = 10;
        config.canvas.background = "#ffffff".to_string();
        config.brush.color = "#0000ff".to_string();
        config.brush.width = 1;

        let mut s = PaintSession::from_config(&config).unwrap();
        assert_eq!(s.canvas().size().width, 20);
        assert_eq!(s.canvas().get_pixel(3, 3), Some(Rgba::WHITE));

        s.pointer_down(Point::new(3, 3));
        assert_eq!(s.canvas().get_pixel(3, 3), Some(Rgba::BLUE));
        s.clear();
        assert_eq!(s.canvas().get_pixel(3, 3), Some(Rgba::WHITE));
    }

    #[test]
    fn test_save_and_import_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drawing.png");

        let mut s = session();
        s.set_color(Rgba::RED);
        s.pointer_down(Point::new(25, 25));
        s.save(&path).unwrap();

        let mut other = session();
        other.import_png_file(&path).unwrap();
        assert_eq!(other.canvas().get_pixel(25, 25), Some(Rgba::RED));
        assert_eq!(other.canvas().get_pixel(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_import_scales_to_canvas() {
        let mut small = PaintSession::new(2, 2).unwrap();
        small.set_brush_width(1);
        small.set_color(Rgba::BLUE);
        small.pointer_down(Point::new(1, 1));
        let bytes = small.to_png_bytes().unwrap();

        let mut big = PaintSession::new(10, 10).unwrap();
        big.import_png(&bytes).unwrap();
        assert_eq!(big.canvas().get_pixel(9, 9), Some(Rgba::BLUE));
        assert_eq!(big.canvas().get_pixel(5, 5), Some(Rgba::BLUE));
        assert_eq!(big.canvas().get_pixel(4, 4), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_import_garbage_leaves_canvas() {
        let mut s = session();
        s.pointer_down(Point::new(10, 10));
        let before = s.canvas().clone();
        assert!(s.import_png(b"nope").is_err());
        assert_eq!(s.canvas(), &before);
    }
}
