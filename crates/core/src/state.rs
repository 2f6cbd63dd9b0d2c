//! Session state and its on-disk shape.

use serde::{Deserialize, Serialize};
use crate::{AchievementHistory, DailyRecord, DayState, Date};

/// The state file, written wholesale on every save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Day the records belong to
    pub current_date: Date,

    /// Sum of `today_records`
    pub today_total: f64,

    /// Records in insertion order
    pub today_records: Vec<DailyRecord>,

    /// Achievement days
    pub history: AchievementHistory,
}

/// Everything the tracker holds in memory for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Current day
    pub day: DayState,

    /// Days on which the goal was reached
    pub history: AchievementHistory,
}

impl AppState {
    /// Fresh, empty state for `today`.
    pub fn new(today: Date) -> Self {
        Self {
            day: DayState::new(today),
            history: AchievementHistory::new(),
        }
    }

    /// Drop everything and start over on `today`.
    pub fn reset(&mut self, today: Date) {
        self.day.reset(today);
        self.history.clear();
    }

    /// Snapshot for persistence.
    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            current_date: self.day.date,
            today_total: self.day.total_ml(),
            today_records: self.day.records().to_vec(),
            history: self.history.clone(),
        }
    }

    /// Rebuild from a persisted snapshot.
    pub fn from_persisted(persisted: PersistedState) -> Self {
        let day = DayState::from_records(persisted.current_date, persisted.today_records);
        if (day.total_ml() - persisted.today_total).abs() > f64::EPSILON {
            tracing::warn!(
                stored = persisted.today_total,
                recomputed = day.total_ml(),
                "today_total does not match records, using record sum"
            );
        }
        Self {
            day,
            history: persisted.history,
        }
    }
}
