//! Rendering surface abstraction.
//!
//! The selector never draws anything itself. It pushes frames and fills to a
//! [`RenderSurface`] supplied by the embedder: an egui painter, a retained
//! view tree, or the in-memory [`RecordingSurface`] used by tests.

mod recording;

pub use recording::RecordingSurface;

use std::ops::{Deref, DerefMut};

use kurbo::Rect;
use peniko::Color;

use crate::handle::HandleId;

/// Receives the selector's visual state changes.
///
/// All frames are in track coordinates, with the origin at the track's
/// top-left corner.
pub trait RenderSurface {
    /// Position a handle view.
    fn set_handle_frame(&mut self, id: HandleId, frame: Rect);

    /// Position the shadow overlay on the outer side of handle `id`.
    fn set_overlay_frame(&mut self, id: HandleId, frame: Rect);

    /// Fill both shadow overlays with `color`.
    fn set_overlay_color(&mut self, color: Color);

    /// Fill the visible stripe of both handles with `color`.
    fn set_handle_color(&mut self, color: Color);

    /// Turn implicit frame animations on or off. Returns the previous setting.
    fn set_animations_enabled(&mut self, enabled: bool) -> bool;
}

/// Scoped batch of surface updates with implicit animation disabled.
///
/// The previous animation setting is restored when the guard is dropped.
pub struct NoAnimation<'a, S: RenderSurface + ?Sized> {
    surface: &'a mut S,
    previous: bool,
}

impl<'a, S: RenderSurface + ?Sized> NoAnimation<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        let previous = surface.set_animations_enabled(false);
        Self { surface, previous }
    }
}

impl<S: RenderSurface + ?Sized> Deref for NoAnimation<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: RenderSurface + ?Sized> DerefMut for NoAnimation<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: RenderSurface + ?Sized> Drop for NoAnimation<'_, S> {
    fn drop(&mut self) {
        self.surface.set_animations_enabled(self.previous);
    }
}
