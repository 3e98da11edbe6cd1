//! Draggable endpoint handles.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::config::SelectorConfig;

/// Which endpoint a handle (or its shadow overlay) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleId {
    /// The handle marking the start of the selection.
    Start,
    /// The handle marking the end of the selection.
    End,
}

/// One draggable endpoint of the selection.
///
/// A handle only does bookkeeping: it never clamps its own position, the drag
/// state machine does that.
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    id: HandleId,
    /// Offset of the handle's left edge along the track.
    pub left: f64,
    width: f64,
    height: f64,
    hit_margin: f64,
    brand_width: f64,
    image_width: f64,
}

impl Handle {
    /// Create a handle at position 0 with the configured dimensions.
    pub fn new(id: HandleId, config: &SelectorConfig) -> Self {
        Self {
            id,
            left: 0.0,
            width: config.handle_width,
            height: 0.0,
            hit_margin: config.hit_margin,
            brand_width: config.handle_brand_width,
            image_width: config.handle_image_width,
        }
    }

    pub fn id(&self) -> HandleId {
        self.id
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn hit_margin(&self) -> f64 {
        self.hit_margin
    }

    /// Offset of the handle's right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Horizontal center of the handle, where its shadow overlay meets it.
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Place the handle at `left` and stretch it to `height`.
    pub fn set_frame(&mut self, left: f64, height: f64) {
        self.left = left;
        self.height = height;
    }

    /// The handle's bounds in track coordinates.
    pub fn frame(&self) -> Rect {
        Rect::new(self.left, 0.0, self.right(), self.height)
    }

    /// The visible stripe, centered in the handle, in track coordinates.
    pub fn brand_rect(&self) -> Rect {
        Rect::from_center_size(self.frame().center(), (self.brand_width, self.height))
    }

    /// The grip image square, centered in the handle, in track coordinates.
    pub fn image_rect(&self) -> Rect {
        Rect::from_center_size(self.frame().center(), (self.image_width, self.image_width))
    }

    /// Hit test a point given in the handle's own coordinate space.
    ///
    /// The tested area is the handle's bounds grown by the hit margin on every
    /// side, since the visible handle is narrower than a comfortable touch target.
    pub fn contains_local(&self, point: Point) -> bool {
        Rect::new(0.0, 0.0, self.width, self.height)
            .inflate(self.hit_margin, self.hit_margin)
            .contains(point)
    }

    /// Hit test a point given in track coordinates.
    pub fn contains(&self, point: Point) -> bool {
        self.contains_local(point - Vec2::new(self.left, 0.0))
    }
}
