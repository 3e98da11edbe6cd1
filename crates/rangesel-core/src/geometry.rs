//! Bounds and ratio math for the selector track.
//!
//! Everything here is pure: a [`Geometry`] is derived from the track size and
//! the handle configuration and recomputed on every layout pass.

use kurbo::Size;
use serde::{Deserialize, Serialize};

use crate::config::SelectorConfig;

/// The selector's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Track {
    pub width: f64,
    pub height: f64,
}

impl Track {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl From<Size> for Track {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Handle position limits and ratio conversions for one track size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    track: Track,
    start_bound: f64,
    end_bound: f64,
    min_duration_ratio: f64,
}

impl Geometry {
    /// Compute the bounds for `track` under `config`.
    pub fn new(track: Track, config: &SelectorConfig) -> Self {
        let half_handle = config.handle_width / 2.0;
        let half_brand = config.handle_brand_width / 2.0;
        Self {
            track,
            start_bound: -half_handle + half_brand,
            end_bound: track.width - half_handle - half_brand,
            min_duration_ratio: config.min_duration_ratio,
        }
    }

    pub fn track(&self) -> Track {
        self.track
    }

    /// Leftmost position the start handle may take.
    pub fn start_bound(&self) -> f64 {
        self.start_bound
    }

    /// Rightmost position the end handle may take.
    pub fn end_bound(&self) -> f64 {
        self.end_bound
    }

    /// Distance between the two bounds. Not positive on a degenerate track.
    pub fn span(&self) -> f64 {
        self.end_bound - self.start_bound
    }

    /// True when the track is too narrow to hold a selectable range.
    pub fn is_degenerate(&self) -> bool {
        self.span() <= 0.0
    }

    pub fn min_duration_ratio(&self) -> f64 {
        self.min_duration_ratio
    }

    /// Minimum distance between the two handles' positions.
    pub fn min_duration_length(&self) -> f64 {
        self.min_duration_ratio * self.span()
    }

    /// Replace the minimum selection ratio, keeping the bounds.
    pub fn set_min_duration_ratio(&mut self, ratio: f64) {
        self.min_duration_ratio = ratio;
    }

    /// Normalize a handle position against the bounds.
    ///
    /// Returns `None` on a degenerate track instead of dividing by a zero or
    /// negative span.
    pub fn to_ratio(&self, position: f64) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        Some((position - self.start_bound) / self.span())
    }

    /// Inverse of [`to_ratio`](Self::to_ratio).
    pub fn to_position(&self, ratio: f64) -> f64 {
        self.start_bound + ratio * self.span()
    }
}

/// Restrict `value` to `[lower, upper]`.
///
/// Expects `lower <= upper`. Unlike [`f64::clamp`] this never panics when the
/// precondition is broken; `lower` wins.
pub fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    lower.max(value.min(upper))
}
