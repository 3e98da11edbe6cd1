//! Rangesel Replay
//!
//! Drives a range selector from a scripted JSON scenario, without any UI.
//! Useful for reproducing drag behavior reported from an embedding app.

mod replay;
mod scenario;

pub use replay::{ReplayError, ReplayOutcome, ReplayRecord, replay};
pub use scenario::{Scenario, Step};
