//! Day state - what has been logged for the current calendar day.

use crate::{DailyRecord, Date, Time};

/// Running intake for one calendar day.
///
/// `total_ml` always equals the sum of `records`; the only mutators are
/// [`DayState::push`] and [`DayState::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct DayState {
    /// Day being tracked
    pub date: Date,

    /// Sum of all record amounts
    total_ml: f64,

    /// Records in insertion order
    records: Vec<DailyRecord>,
}

impl DayState {
    /// Create an empty day.
    pub fn new(date: Date) -> Self {
        Self {
            date,
            total_ml: 0.0,
            records: Vec::new(),
        }
    }

    /// Rebuild a day from persisted records. The total is recomputed from
    /// the records so a hand-edited file cannot break the sum invariant.
    pub fn from_records(date: Date, records: Vec<DailyRecord>) -> Self {
        let total_ml = records.iter().map(|r| r.amount).sum();
        Self { date, total_ml, records }
    }

    /// Total logged so far.
    pub fn total_ml(&self) -> f64 {
        self.total_ml
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    /// True when nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append an amount and return the new total.
    pub fn push(&mut self, time: Time, amount: f64) -> f64 {
        self.records.push(DailyRecord::new(time, amount));
        self.total_ml += amount;
        self.total_ml
    }

    /// Clear the day, optionally moving it to another date.
    pub fn reset(&mut self, date: Date) {
        self.date = date;
        self.total_ml = 0.0;
        self.records.clear();
    }
}
