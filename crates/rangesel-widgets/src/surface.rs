//! A render surface backed by an egui painter.

use egui::{Color32, CornerRadius, Painter, Pos2, pos2};
use kurbo::Rect;
use peniko::Color;
use rangesel_core::{HandleId, RenderSurface, SelectorConfig};

use crate::{sizing, theme};

/// Convert a track-space rectangle to screen space, offset by `origin`.
pub fn to_egui_rect(rect: Rect, origin: Pos2) -> egui::Rect {
    egui::Rect::from_min_max(
        pos2(origin.x + rect.x0 as f32, origin.y + rect.y0 as f32),
        pos2(origin.x + rect.x1 as f32, origin.y + rect.y1 as f32),
    )
}

/// Convert a peniko color to an egui color.
pub fn to_color32(color: Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Holds the latest selector frames until the next paint.
///
/// egui redraws every frame and never animates implicitly, so the animation
/// flag is only tracked to answer [`RenderSurface::set_animations_enabled`].
#[derive(Debug, Clone)]
pub struct EguiSurface {
    start_handle: Rect,
    end_handle: Rect,
    start_overlay: Rect,
    end_overlay: Rect,
    overlay_color: Color32,
    handle_color: Color32,
    brand_width: f32,
    grip_width: f32,
    animations_enabled: bool,
}

impl Default for EguiSurface {
    fn default() -> Self {
        Self {
            start_handle: Rect::ZERO,
            end_handle: Rect::ZERO,
            start_overlay: Rect::ZERO,
            end_overlay: Rect::ZERO,
            overlay_color: Color32::from_black_alpha(153),
            handle_color: Color32::from_rgb(255, 41, 88),
            brand_width: 5.0,
            grip_width: 20.0,
            animations_enabled: true,
        }
    }
}

impl EguiSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface sized for the handles described by `config`.
    pub fn from_config(config: &SelectorConfig) -> Self {
        Self {
            overlay_color: to_color32(config.shadow_color.into()),
            handle_color: to_color32(config.handle_color.into()),
            brand_width: config.handle_brand_width as f32,
            grip_width: config.handle_image_width as f32,
            ..Self::default()
        }
    }

    pub fn handle_frame(&self, id: HandleId) -> Rect {
        match id {
            HandleId::Start => self.start_handle,
            HandleId::End => self.end_handle,
        }
    }

    pub fn overlay_frame(&self, id: HandleId) -> Rect {
        match id {
            HandleId::Start => self.start_overlay,
            HandleId::End => self.end_overlay,
        }
    }

    pub fn overlay_color(&self) -> Color32 {
        self.overlay_color
    }

    pub fn handle_color(&self) -> Color32 {
        self.handle_color
    }

    /// Paint overlays and handles with the track's top-left corner at `origin`.
    ///
    /// Handles extend past the track edges at the bounds, so `painter` should
    /// clip to the track.
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        for overlay in [self.start_overlay, self.end_overlay] {
            let overlay = to_egui_rect(overlay, origin);
            painter.rect_filled(overlay, CornerRadius::ZERO, self.overlay_color);
        }
        for handle in [self.start_handle, self.end_handle] {
            let frame = to_egui_rect(handle, origin);
            let stripe = egui::Rect::from_center_size(
                frame.center(),
                egui::vec2(self.brand_width, frame.height()),
            );
            painter.rect_filled(stripe, CornerRadius::ZERO, self.handle_color);

            let grip = egui::Rect::from_center_size(
                frame.center(),
                egui::vec2(self.grip_width, self.grip_width),
            );
            painter.rect_filled(grip, CornerRadius::same(sizing::GRIP_RADIUS), theme::GRIP);
        }
    }
}

impl RenderSurface for EguiSurface {
    fn set_handle_frame(&mut self, id: HandleId, frame: Rect) {
        match id {
            HandleId::Start => self.start_handle = frame,
            HandleId::End => self.end_handle = frame,
        }
    }

    fn set_overlay_frame(&mut self, id: HandleId, frame: Rect) {
        match id {
            HandleId::Start => self.start_overlay = frame,
            HandleId::End => self.end_overlay = frame,
        }
    }

    fn set_overlay_color(&mut self, color: Color) {
        self.overlay_color = to_color32(color);
    }

    fn set_handle_color(&mut self, color: Color) {
        self.handle_color = to_color32(color);
    }

    fn set_animations_enabled(&mut self, enabled: bool) -> bool {
        std::mem::replace(&mut self.animations_enabled, enabled)
    }
}
