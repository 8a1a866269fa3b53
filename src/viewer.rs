//! Pan-and-center model for an image shown inside a container.
//!
//! Tracks where the image sits inside its container. Loading an image or
//! resizing the container recenters it; a press on the image followed by
//! moves drags it around.

use crate::geometry::Size;

/// Drag gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// Image follows the pointer, keeping the grab point under it.
    Dragging {
        /// Pointer x minus image x at press time.
        grab_x: f32,
        /// Pointer y minus image y at press time.
        grab_y: f32,
    },
}

/// Image placement within a container.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageViewer {
    container: Size,
    image: Option<Size>,
    offset: (f32, f32),
    drag: DragState,
}

impl ImageViewer {
    /// Create an empty viewer for a container.
    #[must_use]
    pub fn new(container: Size) -> Self {
        Self {
            container,
            image: None,
            offset: (0.0, 0.0),
            drag: DragState::Idle,
        }
    }

    /// Show a new image, cancelling any drag and centering it.
    pub fn load(&mut self, image: Size) {
        self.image = Some(image);
        self.drag = DragState::Idle;
        self.center();
    }

    /// Container resized: recenters the image.
    pub fn resize(&mut self, container: Size) {
        self.container = container;
        self.center();
    }

    /// Put the image in the middle of the container.
    ///
    /// Images larger than the container get a negative offset. Without an
    /// image the offset is reset to the origin.
    pub fn center(&mut self) {
        self.offset = match self.image {
            Some(image) => (
                centered(self.container.width, image.width),
                centered(self.container.height, image.height),
            ),
            None => (0.0, 0.0),
        };
    }

    /// Pointer pressed at (x, y); starts a drag only if the press hit the image.
    pub fn press(&mut self, x: f32, y: f32, on_image: bool) {
        if on_image && self.image.is_some() {
            self.drag = DragState::Dragging {
                grab_x: x - self.offset.0,
                grab_y: y - self.offset.1,
            };
        }
    }

    /// Pointer moved to (x, y). Returns whether the image moved.
    pub fn drag_to(&mut self, x: f32, y: f32) -> bool {
        match self.drag {
            DragState::Dragging { grab_x, grab_y } => {
                self.offset = (x - grab_x, y - grab_y);
                true
            }
            DragState::Idle => false,
        }
    }

    /// Pointer released: ends the drag.
    pub fn release(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Image top-left relative to the container top-left.
    #[must_use]
    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }

    /// Whether the image is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Current drag state.
    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Container size.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Size of the loaded image, if any.
    #[must_use]
    pub fn image(&self) -> Option<Size> {
        self.image
    }
}

fn centered(outer: u32, inner: u32) -> f32 {
    ((f64::from(outer) - f64::from(inner)) / 2.0) as f32
}
