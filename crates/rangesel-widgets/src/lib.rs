//! egui integration for the rangesel range selector.
//!
//! - **Surface**: an [`EguiSurface`] that keeps the selector's frames and
//!   paints them with an `egui::Painter`
//! - **Widget**: a [`RangeSelectorView`] that turns egui drag responses into
//!   pan gestures

pub mod range_selector;
pub mod surface;

pub use range_selector::{RangeSelectorResponse, RangeSelectorView};
pub use surface::{EguiSurface, to_color32, to_egui_rect};

/// Standard sizing constants.
pub mod sizing {
    /// Default track height
    pub const TRACK_HEIGHT: f32 = 48.0;
    /// Corner radius of the grip drawn on each handle
    pub const GRIP_RADIUS: u8 = 3;
}

/// Standard colors.
pub mod theme {
    use egui::Color32;

    /// Track background
    pub const TRACK_BG: Color32 = Color32::from_rgb(40, 40, 44);
    /// Grip fill
    pub const GRIP: Color32 = Color32::from_rgb(250, 250, 250);
}
