//! Intake tracking
//!
//! Accepts logged amounts, detects when the daily goal is reached and
//! exposes a read model for display.

#![warn(missing_docs)]

pub mod tracker;
pub mod goal;
pub mod snapshot;

pub use tracker::{IntakeTracker, DailyIntakeTracker, AddResult, InitReport, TrackerError, Result};
pub use goal::GoalRule;
pub use snapshot::IntakeSnapshot;
