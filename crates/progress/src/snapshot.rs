//! Read model handed to the display layer.

use onegallon_core::{DailyRecord, Date, Time};

use crate::GoalRule;

/// A read-only view of the tracker at a point in time.
#[derive(Debug, Clone)]
pub struct IntakeSnapshot {
    /// When the snapshot was taken
    pub taken_at: Time,

    /// Day the totals refer to
    pub date: Date,

    /// Total logged today
    pub today_total: f64,

    /// Today's records, oldest first
    pub today_records: Vec<DailyRecord>,

    /// Achievement days, newest first
    pub history: Vec<(Date, f64)>,

    /// Goal the totals are measured against
    pub goal: GoalRule,
}

impl IntakeSnapshot {
    /// Fraction of the daily target, clamped to `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.goal.progress(self.today_total)
    }

    /// Today's total in reference bottles.
    pub fn equivalent_units(&self) -> f64 {
        self.goal.equivalent_units(self.today_total)
    }

    /// `"1300 ml / 3785 ml"`
    pub fn metric_label(&self) -> String {
        format!("{} ml / {} ml", self.today_total.trunc(), self.goal.target_ml.trunc())
    }

    /// `"Equivalent: 2.0 / 6 bottles"`
    pub fn equivalent_caption(&self) -> String {
        format!(
            "Equivalent: {:.1} / {} bottles",
            self.equivalent_units(),
            self.goal.goal_units
        )
    }

    /// Whether the goal was already reached on the snapshot's day.
    pub fn achieved_today(&self) -> bool {
        self.history.iter().any(|(d, _)| *d == self.date)
    }
}
