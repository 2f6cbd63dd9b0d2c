//! Achievement history - days on which the goal was reached.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use crate::Date;

/// Map from calendar date to the total logged when the goal was reached.
///
/// Entries are append-only: a date is recorded at most once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AchievementHistory(BTreeMap<Date, f64>);

impl AchievementHistory {
    /// Empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an achievement. Returns `false` and leaves the existing entry
    /// untouched when `date` is already present.
    pub fn record(&mut self, date: Date, total_ml: f64) -> bool {
        if self.0.contains_key(&date) {
            return false;
        }
        self.0.insert(date, total_ml);
        true
    }

    /// Whether the goal was reached on `date`.
    pub fn contains(&self, date: Date) -> bool {
        self.0.contains_key(&date)
    }

    /// Total recorded for `date`.
    pub fn get(&self, date: Date) -> Option<f64> {
        self.0.get(&date).copied()
    }

    /// Number of achievement days.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no day has been achieved yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries, most recent day first.
    pub fn newest_first(&self) -> Vec<(Date, f64)> {
        self.0.iter().rev().map(|(d, t)| (*d, *t)).collect()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}
