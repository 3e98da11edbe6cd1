//! In-memory surface that records what it was told to display.

use kurbo::Rect;
use peniko::Color;

use super::RenderSurface;
use crate::config::SerializableColor;
use crate::handle::HandleId;

/// Surface for tests and headless use.
///
/// Keeps the latest frame of every element and counts how updates were
/// delivered, so callers can check that drags never animate.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    start_handle: Option<Rect>,
    end_handle: Option<Rect>,
    start_overlay: Option<Rect>,
    end_overlay: Option<Rect>,
    overlay_color: Option<SerializableColor>,
    handle_color: Option<SerializableColor>,
    animations_enabled: bool,
    /// Frame updates received while animations were enabled.
    animated_updates: usize,
    /// Frame updates received in total.
    frame_updates: usize,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            start_handle: None,
            end_handle: None,
            start_overlay: None,
            end_overlay: None,
            overlay_color: None,
            handle_color: None,
            animations_enabled: true,
            animated_updates: 0,
            frame_updates: 0,
        }
    }
}

impl RecordingSurface {
    /// Create a new empty surface with animations enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last frame set for handle `id`.
    pub fn handle_frame(&self, id: HandleId) -> Option<Rect> {
        match id {
            HandleId::Start => self.start_handle,
            HandleId::End => self.end_handle,
        }
    }

    /// Last frame set for the overlay next to handle `id`.
    pub fn overlay_frame(&self, id: HandleId) -> Option<Rect> {
        match id {
            HandleId::Start => self.start_overlay,
            HandleId::End => self.end_overlay,
        }
    }

    pub fn overlay_color(&self) -> Option<SerializableColor> {
        self.overlay_color
    }

    pub fn handle_color(&self) -> Option<SerializableColor> {
        self.handle_color
    }

    pub fn animations_enabled(&self) -> bool {
        self.animations_enabled
    }

    pub fn animated_updates(&self) -> usize {
        self.animated_updates
    }

    pub fn frame_updates(&self) -> usize {
        self.frame_updates
    }

    fn record_frame(&mut self) {
        self.frame_updates += 1;
        if self.animations_enabled {
            self.animated_updates += 1;
        }
    }
}

impl RenderSurface for RecordingSurface {
    fn set_handle_frame(&mut self, id: HandleId, frame: Rect) {
        self.record_frame();
        match id {
            HandleId::Start => self.start_handle = Some(frame),
            HandleId::End => self.end_handle = Some(frame),
        }
    }

    fn set_overlay_frame(&mut self, id: HandleId, frame: Rect) {
        self.record_frame();
        match id {
            HandleId::Start => self.start_overlay = Some(frame),
            HandleId::End => self.end_overlay = Some(frame),
        }
    }

    fn set_overlay_color(&mut self, color: Color) {
        self.overlay_color = Some(color.into());
    }

    fn set_handle_color(&mut self, color: Color) {
        self.handle_color = Some(color.into());
    }

    fn set_animations_enabled(&mut self, enabled: bool) -> bool {
        std::mem::replace(&mut self.animations_enabled, enabled)
    }
}
