//! OneGallon core data models.
//!
//! This crate defines the data structures behind the daily water-intake
//! tracker: the day's records, the achievement history, the persisted file
//! shape and the tracker configuration.

#![warn(missing_docs)]

// Time source
mod clock;

// Daily intake
mod record;
mod day;
mod history;
mod state;

// Settings
mod config;

// Re-exports
pub use clock::{Clock, SystemClock, FixedClock};
pub use record::DailyRecord;
pub use day::DayState;
pub use history::AchievementHistory;
pub use state::{AppState, PersistedState};
pub use config::{TrackerConfig, ConfigError};

/// Local wall-clock timestamp type.
pub type Time = chrono::NaiveDateTime;

/// Calendar date type.
pub type Date = chrono::NaiveDate;
