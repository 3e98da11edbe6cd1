//! Scenario execution.

use std::rc::{Rc, Weak};

use rangesel_core::{
    ConfigError, GestureTracker, RangeSelector, RangeSelectorListener, RatioUpdate,
    RecordingSurface, SelectorError,
};
use serde::Serialize;
use thiserror::Error;

use crate::scenario::{Scenario, Step};

/// Replay errors.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Step {step} failed: {source}")]
    Step {
        step: usize,
        #[source]
        source: SelectorError,
    },
}

/// A ratio update and the step that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReplayRecord {
    pub step: usize,
    pub update: RatioUpdate,
}

/// Everything a replay produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayOutcome {
    pub records: Vec<ReplayRecord>,
    /// Final start ratio, `None` if the track ended up degenerate.
    pub start_ratio: Option<f64>,
    /// Final end ratio, `None` if the track ended up degenerate.
    pub end_ratio: Option<f64>,
}

/// Logs every update the selector reports.
struct LoggingListener;

impl RangeSelectorListener for LoggingListener {
    fn on_start_ratio_updated(&self, start: f64) {
        log::info!("start -> {start:.4}");
    }

    fn on_end_ratio_updated(&self, end: f64) {
        log::info!("end -> {end:.4}");
    }

    fn on_both_ratios_updated(&self, start: f64, end: f64) {
        log::info!("selection -> {start:.4}..{end:.4}");
    }
}

/// Run `scenario` against a fresh selector.
pub fn replay(scenario: &Scenario) -> Result<ReplayOutcome, ReplayError> {
    let listener = Rc::new(LoggingListener);
    let weak = Rc::downgrade(&listener) as Weak<dyn RangeSelectorListener>;
    let mut selector =
        RangeSelector::new(scenario.config.clone(), RecordingSurface::new())?.with_listener(weak);
    selector.layout(scenario.track);

    let mut tracker = GestureTracker::new();
    let mut records = Vec::new();

    for (step, input) in scenario.steps.iter().enumerate() {
        log::debug!("Step {step}: {input:?}");
        let event = match input {
            Step::Layout(track) => {
                selector.layout(*track);
                None
            }
            Step::Gesture(event) => Some(*event),
            Step::PointerDown(point) => Some(tracker.pointer_down(*point)),
            Step::PointerMove(point) => tracker.pointer_move(*point),
            Step::PointerUp(point) => tracker.pointer_up(*point),
            Step::Cancel => tracker.cancel(),
            Step::SetRatios { start, end } => {
                selector
                    .set_ratios(*start, *end)
                    .map_err(|source| ReplayError::Step { step, source })?;
                None
            }
        };
        if let Some(update) = event.and_then(|event| selector.handle_gesture(event)) {
            records.push(ReplayRecord { step, update });
        }
    }

    Ok(ReplayOutcome {
        records,
        start_ratio: selector.start_ratio(),
        end_ratio: selector.end_ratio(),
    })
}
