//! Selector configuration and validation.

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default minimum selection length, as a fraction of the selectable span.
pub const DEFAULT_MIN_DURATION_RATIO: f64 = 0.5;
/// Default handle width (visual and hit width).
pub const DEFAULT_HANDLE_WIDTH: f64 = 40.0;
/// Default width of the visible stripe at the center of a handle.
pub const DEFAULT_HANDLE_BRAND_WIDTH: f64 = 5.0;
/// Default size of the grip image drawn at the center of a handle.
pub const DEFAULT_HANDLE_IMAGE_WIDTH: f64 = 20.0;
/// Default outward hit-test margin around each handle.
pub const DEFAULT_HIT_MARGIN: f64 = 10.0;

/// Configuration errors, reported when a selector is built or reconfigured.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Minimum duration ratio must be in (0, 1], got {0}")]
    MinDurationRatio(f64),
    #[error("Handle width must be positive and finite, got {0}")]
    HandleWidth(f64),
    #[error("Handle brand width {brand} must be within [0, {handle}]")]
    BrandWidth { brand: f64, handle: f64 },
    #[error("Hit-test margin must be non-negative and finite, got {0}")]
    HitMargin(f64),
}

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Configuration for a [`RangeSelector`](crate::RangeSelector).
///
/// Missing fields fall back to their defaults when deserialized, so a
/// scenario file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Minimum selection length as a fraction of `end_bound - start_bound`.
    pub min_duration_ratio: f64,
    /// Width of each handle.
    pub handle_width: f64,
    /// Width of the visible stripe inside a handle. Determines the bounds inset.
    pub handle_brand_width: f64,
    /// Size of the grip image. Cosmetic only.
    pub handle_image_width: f64,
    /// Extra hit-test area on each side of a handle.
    pub hit_margin: f64,
    /// Fill of the dimmed regions outside the selection.
    pub shadow_color: SerializableColor,
    /// Fill of the handle stripe.
    pub handle_color: SerializableColor,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_duration_ratio: DEFAULT_MIN_DURATION_RATIO,
            handle_width: DEFAULT_HANDLE_WIDTH,
            handle_brand_width: DEFAULT_HANDLE_BRAND_WIDTH,
            handle_image_width: DEFAULT_HANDLE_IMAGE_WIDTH,
            hit_margin: DEFAULT_HIT_MARGIN,
            shadow_color: SerializableColor::new(0, 0, 0, 153),
            handle_color: SerializableColor::new(255, 41, 88, 255),
        }
    }
}

impl SelectorConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum selection ratio.
    pub fn with_min_duration_ratio(mut self, ratio: f64) -> Self {
        self.min_duration_ratio = ratio;
        self
    }

    /// Set the handle width.
    pub fn with_handle_width(mut self, width: f64) -> Self {
        self.handle_width = width;
        self
    }

    /// Set the handle stripe width.
    pub fn with_handle_brand_width(mut self, width: f64) -> Self {
        self.handle_brand_width = width;
        self
    }

    /// Set the grip image size.
    pub fn with_handle_image_width(mut self, width: f64) -> Self {
        self.handle_image_width = width;
        self
    }

    /// Set the hit-test margin.
    pub fn with_hit_margin(mut self, margin: f64) -> Self {
        self.hit_margin = margin;
        self
    }

    /// Set the shadow color.
    pub fn with_shadow_color(mut self, color: Color) -> Self {
        self.shadow_color = color.into();
        self
    }

    /// Set the handle stripe color.
    pub fn with_handle_color(mut self, color: Color) -> Self {
        self.handle_color = color.into();
        self
    }

    /// Check the configuration for values that would break the drag math.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_min_duration_ratio(self.min_duration_ratio)?;
        if !(self.handle_width.is_finite() && self.handle_width > 0.0) {
            return Err(ConfigError::HandleWidth(self.handle_width));
        }
        if !(self.handle_brand_width >= 0.0 && self.handle_brand_width <= self.handle_width) {
            return Err(ConfigError::BrandWidth {
                brand: self.handle_brand_width,
                handle: self.handle_width,
            });
        }
        if !(self.hit_margin.is_finite() && self.hit_margin >= 0.0) {
            return Err(ConfigError::HitMargin(self.hit_margin));
        }
        Ok(())
    }
}

pub(crate) fn validate_min_duration_ratio(ratio: f64) -> Result<(), ConfigError> {
    if ratio > 0.0 && ratio <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::MinDurationRatio(ratio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SelectorConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.min_duration_ratio - 0.5).abs() < f64::EPSILON);
        assert!((config.handle_width - 40.0).abs() < f64::EPSILON);
        assert!((config.handle_brand_width - 5.0).abs() < f64::EPSILON);
        assert!((config.handle_image_width - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_min_duration_ratio_range() {
        for bad in [0.0, -0.1, 1.01, f64::NAN] {
            let config = SelectorConfig::new().with_min_duration_ratio(bad);
            assert!(matches!(config.validate(), Err(ConfigError::MinDurationRatio(_))));
        }
        let config = SelectorConfig::new().with_min_duration_ratio(1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_brand_wider_than_handle() {
        let config = SelectorConfig::new().with_handle_width(4.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::BrandWidth { brand: 5.0, handle: 4.0 })
        );
    }

    #[test]
    fn test_negative_hit_margin() {
        let config = SelectorConfig::new().with_hit_margin(-1.0);
        assert_eq!(config.validate(), Err(ConfigError::HitMargin(-1.0)));
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: SelectorConfig =
            serde_json::from_str(r#"{ "min_duration_ratio": 0.25 }"#).unwrap();
        assert!((config.min_duration_ratio - 0.25).abs() < f64::EPSILON);
        assert!((config.handle_width - DEFAULT_HANDLE_WIDTH).abs() < f64::EPSILON);
        assert_eq!(config.shadow_color, SerializableColor::new(0, 0, 0, 153));
    }

    #[test]
    fn test_color_conversion() {
        let color = Color::from_rgba8(10, 20, 30, 40);
        let serializable = SerializableColor::from(color);
        assert_eq!(serializable, SerializableColor::new(10, 20, 30, 40));
    }
}
