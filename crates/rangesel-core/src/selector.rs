//! The range selector: owns the handles, overlays and drag state, and turns
//! gestures into ratio updates.

use std::rc::Weak;

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, SelectorConfig, validate_min_duration_ratio};
use crate::drag::{DragMove, DragRegion, DragState};
use crate::geometry::{Geometry, Track};
use crate::handle::{Handle, HandleId};
use crate::input::{GestureEvent, GesturePhase};
use crate::shadow::ShadowOverlays;
use crate::surface::{NoAnimation, RenderSurface};

/// Tolerance when checking a programmatic selection against the minimum length.
const RATIO_EPSILON: f64 = 1e-9;

/// Selector errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectorError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Track width {width} is too narrow for the handles")]
    DegenerateTrack { width: f64 },
    #[error("Ratio must be in [0, 1], got {0}")]
    RatioOutOfRange(f64),
    #[error("Selection {start}..{end} is shorter than the minimum ratio {min}")]
    SelectionTooShort { start: f64, end: f64, min: f64 },
}

/// Result type for selector operations.
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Receives ratio changes while the user drags.
///
/// Methods take `&self`: the selector only holds a weak reference, so
/// implementors that need to mutate use interior mutability.
pub trait RangeSelectorListener {
    /// The start handle was dragged.
    fn on_start_ratio_updated(&self, start: f64);
    /// The end handle was dragged.
    fn on_end_ratio_updated(&self, end: f64);
    /// The whole selection was dragged.
    fn on_both_ratios_updated(&self, start: f64, end: f64);
}

/// A ratio change produced by one drag event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RatioUpdate {
    Start { start: f64 },
    End { end: f64 },
    Both { start: f64, end: f64 },
}

impl RatioUpdate {
    /// Deliver this update to the matching listener method.
    pub fn notify(&self, listener: &dyn RangeSelectorListener) {
        match *self {
            Self::Start { start } => listener.on_start_ratio_updated(start),
            Self::End { end } => listener.on_end_ratio_updated(end),
            Self::Both { start, end } => listener.on_both_ratios_updated(start, end),
        }
    }

    /// New start ratio, if this update moved the start handle.
    pub fn start(&self) -> Option<f64> {
        match *self {
            Self::Start { start } | Self::Both { start, .. } => Some(start),
            Self::End { .. } => None,
        }
    }

    /// New end ratio, if this update moved the end handle.
    pub fn end(&self) -> Option<f64> {
        match *self {
            Self::End { end } | Self::Both { end, .. } => Some(end),
            Self::Start { .. } => None,
        }
    }
}

/// A dual-handle range selector.
///
/// The selector starts with an empty track; call [`layout`](Self::layout)
/// with the real size before feeding gestures. Every layout resets the
/// selection to the full range.
pub struct RangeSelector<S: RenderSurface> {
    config: SelectorConfig,
    geometry: Geometry,
    start: Handle,
    end: Handle,
    overlays: ShadowOverlays,
    drag: DragState,
    surface: S,
    listener: Option<Weak<dyn RangeSelectorListener>>,
}

impl<S: RenderSurface> RangeSelector<S> {
    /// Create a selector drawing to `surface`.
    pub fn new(config: SelectorConfig, mut surface: S) -> Result<Self, ConfigError> {
        config.validate()?;
        surface.set_overlay_color(config.shadow_color.into());
        surface.set_handle_color(config.handle_color.into());

        Ok(Self {
            geometry: Geometry::new(Track::default(), &config),
            start: Handle::new(HandleId::Start, &config),
            end: Handle::new(HandleId::End, &config),
            overlays: ShadowOverlays::new(),
            drag: DragState::new(),
            surface,
            listener: None,
            config,
        })
    }

    /// Set the listener (builder style).
    pub fn with_listener(mut self, listener: Weak<dyn RangeSelectorListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Replace the listener. The selector does not keep it alive.
    pub fn set_listener(&mut self, listener: Weak<dyn RangeSelectorListener>) {
        self.listener = Some(listener);
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn track(&self) -> Track {
        self.geometry.track()
    }

    pub fn handle(&self, id: HandleId) -> &Handle {
        match id {
            HandleId::Start => &self.start,
            HandleId::End => &self.end,
        }
    }

    pub fn start_handle(&self) -> &Handle {
        &self.start
    }

    pub fn end_handle(&self) -> &Handle {
        &self.end
    }

    pub fn overlays(&self) -> &ShadowOverlays {
        &self.overlays
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Region grabbed by the gesture in progress.
    pub fn active_region(&self) -> Option<DragRegion> {
        self.drag.region()
    }

    /// Ratio of the start handle, or `None` on a degenerate track.
    pub fn start_ratio(&self) -> Option<f64> {
        self.geometry.to_ratio(self.start.left)
    }

    /// Ratio of the end handle, or `None` on a degenerate track.
    pub fn end_ratio(&self) -> Option<f64> {
        self.geometry.to_ratio(self.end.left)
    }

    /// Both ratios, or `None` on a degenerate track.
    pub fn ratios(&self) -> Option<(f64, f64)> {
        Some((self.start_ratio()?, self.end_ratio()?))
    }

    /// Size the selector to `track`.
    ///
    /// Recomputes the bounds, moves the handles to the full range and collapses
    /// the overlays. Previously selected ratios are not restored; use
    /// [`set_ratios`](Self::set_ratios) afterwards to re-apply them.
    ///
    /// A drag in progress is ended: its captured positions belong to the old
    /// track.
    pub fn layout(&mut self, track: impl Into<Track>) {
        let track = track.into();
        if let Some(region) = self.drag.finish() {
            log::debug!("Layout ended the drag on {:?}", region);
        }
        self.geometry = Geometry::new(track, &self.config);
        if self.geometry.is_degenerate() {
            log::warn!(
                "Range selector track width {} leaves no room between the handles",
                track.width
            );
        }
        log::debug!(
            "Range selector layout {}x{}, bounds [{}, {}]",
            track.width,
            track.height,
            self.geometry.start_bound(),
            self.geometry.end_bound()
        );

        self.overlays.reset(track);
        self.start.set_frame(self.geometry.start_bound(), track.height);
        self.end.set_frame(self.geometry.end_bound(), track.height);

        self.surface.set_overlay_frame(HandleId::Start, self.overlays.start());
        self.surface.set_overlay_frame(HandleId::End, self.overlays.end());
        self.surface.set_handle_frame(HandleId::Start, self.start.frame());
        self.surface.set_handle_frame(HandleId::End, self.end.frame());
    }

    /// Feed one pan gesture event.
    ///
    /// Returns the ratio update that was also sent to the listener. Only
    /// `Changed` events of a gesture that grabbed something produce one.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> Option<RatioUpdate> {
        match event.phase {
            GesturePhase::Began => {
                let region = self.drag.begin(event.location, &self.start, &self.end);
                log::debug!("Drag began at {:?} on {:?}", event.location, region);
                None
            }
            GesturePhase::Changed => {
                if !self.drag.is_active() {
                    log::trace!("Ignoring drag change without a gesture");
                    return None;
                }
                let moved = self.drag.update(
                    event.translation.x,
                    &mut self.start,
                    &mut self.end,
                    &self.geometry,
                )?;
                self.apply_move(moved)
            }
            GesturePhase::Ended | GesturePhase::Cancelled => {
                if let Some(region) = self.drag.finish() {
                    log::debug!("Drag on {:?} {:?}", region, event.phase);
                }
                None
            }
        }
    }

    /// Select `start..end` directly, without notifying the listener.
    pub fn set_ratios(&mut self, start: f64, end: f64) -> SelectorResult<()> {
        if self.geometry.is_degenerate() {
            return Err(SelectorError::DegenerateTrack {
                width: self.geometry.track().width,
            });
        }
        for ratio in [start, end] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(SelectorError::RatioOutOfRange(ratio));
            }
        }
        let min = self.geometry.min_duration_ratio();
        if end - start + RATIO_EPSILON < min {
            return Err(SelectorError::SelectionTooShort { start, end, min });
        }

        self.start.left = self.geometry.to_position(start);
        self.end.left = self.geometry.to_position(end);
        self.push_handles(DragMove::Both);
        Ok(())
    }

    /// Change the minimum selection ratio.
    ///
    /// A selection shorter than the new minimum is widened, end handle first,
    /// without leaving the bounds. The listener is not notified.
    pub fn set_min_duration_ratio(&mut self, ratio: f64) -> Result<(), ConfigError> {
        validate_min_duration_ratio(ratio)?;
        self.config.min_duration_ratio = ratio;
        self.geometry.set_min_duration_ratio(ratio);

        let min = self.geometry.min_duration_length();
        if self.geometry.is_degenerate() || self.end.left - self.start.left >= min {
            return Ok(());
        }
        self.end.left = (self.start.left + min).min(self.geometry.end_bound());
        self.start.left = (self.end.left - min).max(self.geometry.start_bound());
        log::debug!(
            "Widened selection to {} / {} for minimum ratio {}",
            self.start.left,
            self.end.left,
            ratio
        );
        self.push_handles(DragMove::Both);
        Ok(())
    }

    /// Change the fill of both shadow overlays.
    pub fn set_shadow_color(&mut self, color: Color) {
        self.config.shadow_color = color.into();
        self.surface.set_overlay_color(color);
    }

    /// Change the fill of both handle stripes.
    pub fn set_handle_color(&mut self, color: Color) {
        self.config.handle_color = color.into();
        self.surface.set_handle_color(color);
    }

    fn apply_move(&mut self, moved: DragMove) -> Option<RatioUpdate> {
        self.push_handles(moved);
        log::trace!("Handles at {} / {}", self.start.left, self.end.left);

        let Some(update) = self.ratio_update(moved) else {
            log::warn!("Skipping ratio update on a degenerate track");
            return None;
        };
        if let Some(listener) = self.listener.as_ref().and_then(Weak::upgrade) {
            update.notify(&*listener);
        }
        Some(update)
    }

    /// Push moved handles and their overlays to the surface without animation.
    fn push_handles(&mut self, moved: DragMove) {
        let track = self.geometry.track();
        let mut batch = NoAnimation::new(&mut self.surface);
        if matches!(moved, DragMove::Start | DragMove::Both) {
            sync_handle(&mut *batch, &mut self.overlays, &self.start, track);
        }
        if matches!(moved, DragMove::End | DragMove::Both) {
            sync_handle(&mut *batch, &mut self.overlays, &self.end, track);
        }
    }

    fn ratio_update(&self, moved: DragMove) -> Option<RatioUpdate> {
        Some(match moved {
            DragMove::Start => RatioUpdate::Start {
                start: self.start_ratio()?,
            },
            DragMove::End => RatioUpdate::End {
                end: self.end_ratio()?,
            },
            DragMove::Both => RatioUpdate::Both {
                start: self.start_ratio()?,
                end: self.end_ratio()?,
            },
        })
    }
}

fn sync_handle<S: RenderSurface + ?Sized>(
    surface: &mut S,
    overlays: &mut ShadowOverlays,
    handle: &Handle,
    track: Track,
) {
    surface.set_handle_frame(handle.id(), handle.frame());
    overlays.sync(handle, track);
    surface.set_overlay_frame(handle.id(), overlays.get(handle.id()));
}
