//! Scenario file format.

use kurbo::Point;
use rangesel_core::{GestureEvent, SelectorConfig, Track};
use serde::{Deserialize, Serialize};

/// A scripted session: a selector configuration, its initial size, and the
/// steps to feed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: SelectorConfig,
    pub track: Track,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Resize the track.
    Layout(Track),
    /// A raw pan gesture event, as a platform recognizer would deliver it.
    Gesture(GestureEvent),
    /// Pointer pressed at a track position.
    PointerDown(Point),
    /// Pointer moved to a track position.
    PointerMove(Point),
    /// Pointer released at a track position.
    PointerUp(Point),
    /// The platform aborted the gesture.
    Cancel,
    /// Select a range directly.
    SetRatios { start: f64, end: f64 },
}

impl Scenario {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
