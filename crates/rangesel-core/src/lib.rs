//! Rangesel Core Library
//!
//! Platform-agnostic geometry and drag logic for a dual-handle range selector.
//! Rendering and gesture recognition are supplied by the embedder.

pub mod config;
pub mod drag;
pub mod geometry;
pub mod handle;
pub mod input;
pub mod selector;
pub mod shadow;
pub mod surface;

pub use config::{ConfigError, SelectorConfig, SerializableColor};
pub use drag::{DragMove, DragRegion, DragState};
pub use geometry::{Geometry, Track, clamp};
pub use handle::{Handle, HandleId};
pub use input::{GestureEvent, GesturePhase, GestureTracker};
pub use selector::{RangeSelector, RangeSelectorListener, RatioUpdate, SelectorError, SelectorResult};
pub use shadow::ShadowOverlays;
pub use surface::{NoAnimation, RecordingSurface, RenderSurface};
