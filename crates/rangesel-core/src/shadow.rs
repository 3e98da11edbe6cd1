//! Dimmed overlays covering the track outside the selection.

use kurbo::Rect;

use crate::geometry::Track;
use crate::handle::{Handle, HandleId};

/// Frames of the two shadow overlays, in track coordinates.
///
/// The start overlay runs from the left edge of the track to the center of the
/// start handle; the end overlay from the center of the end handle to the right
/// edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowOverlays {
    start: Rect,
    end: Rect,
}

impl Default for ShadowOverlays {
    fn default() -> Self {
        Self {
            start: Rect::ZERO,
            end: Rect::ZERO,
        }
    }
}

impl ShadowOverlays {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse both overlays to zero-width slivers at the track edges.
    pub fn reset(&mut self, track: Track) {
        self.start = Rect::new(0.0, 0.0, 0.0, track.height);
        self.end = Rect::new(track.width, 0.0, track.width, track.height);
    }

    /// Move the inner edge of the overlay belonging to `handle`.
    pub fn sync(&mut self, handle: &Handle, track: Track) {
        let edge = handle.center();
        match handle.id() {
            HandleId::Start => self.start = Rect::new(0.0, 0.0, edge, track.height),
            HandleId::End => self.end = Rect::new(edge, 0.0, track.width, track.height),
        }
    }

    pub fn get(&self, id: HandleId) -> Rect {
        match id {
            HandleId::Start => self.start,
            HandleId::End => self.end,
        }
    }

    pub fn start(&self) -> Rect {
        self.start
    }

    pub fn end(&self) -> Rect {
        self.end
    }
}
