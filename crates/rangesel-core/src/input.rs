//! Pan gesture events and pointer-to-gesture tracking.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

impl GesturePhase {
    /// Whether this phase terminates the gesture.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// A single pan gesture update, in track coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub phase: GesturePhase,
    /// Translation since the gesture began.
    #[serde(default)]
    pub translation: Vec2,
    /// Where the first touch went down.
    #[serde(default)]
    pub location: Point,
}

impl GestureEvent {
    pub fn new(phase: GesturePhase, translation: Vec2, location: Point) -> Self {
        Self {
            phase,
            translation,
            location,
        }
    }

    /// A gesture starting at `location`.
    pub fn began(location: Point) -> Self {
        Self::new(GesturePhase::Began, Vec2::ZERO, location)
    }

    /// A gesture moved to `dx` along the track since it began.
    pub fn changed(location: Point, dx: f64) -> Self {
        Self::new(GesturePhase::Changed, Vec2::new(dx, 0.0), location)
    }

    pub fn ended(location: Point, dx: f64) -> Self {
        Self::new(GesturePhase::Ended, Vec2::new(dx, 0.0), location)
    }

    pub fn cancelled(location: Point) -> Self {
        Self::new(GesturePhase::Cancelled, Vec2::ZERO, location)
    }
}

/// Turns raw pointer positions into pan gesture events.
///
/// This plays the part of a platform pan recognizer for embedders that only
/// see pointer down/move/up: translation is always measured from the point
/// where the pointer went down.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    /// Where the active gesture started.
    origin: Option<Point>,
    /// Most recent translation, reported again on release.
    translation: Vec2,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Pointer pressed. Restarts tracking if a gesture was already active.
    pub fn pointer_down(&mut self, position: Point) -> GestureEvent {
        self.origin = Some(position);
        self.translation = Vec2::ZERO;
        GestureEvent::began(position)
    }

    /// Pointer moved. Ignored when no gesture is active.
    pub fn pointer_move(&mut self, position: Point) -> Option<GestureEvent> {
        let origin = self.origin?;
        self.translation = position - origin;
        Some(GestureEvent::new(
            GesturePhase::Changed,
            self.translation,
            origin,
        ))
    }

    /// Pointer released.
    pub fn pointer_up(&mut self, position: Point) -> Option<GestureEvent> {
        let origin = self.origin.take()?;
        self.translation = position - origin;
        Some(GestureEvent::new(GesturePhase::Ended, self.translation, origin))
    }

    /// Gesture aborted by the platform (focus loss, pointer left the window).
    pub fn cancel(&mut self) -> Option<GestureEvent> {
        let origin = self.origin.take()?;
        Some(GestureEvent::new(
            GesturePhase::Cancelled,
            self.translation,
            origin,
        ))
    }
}
