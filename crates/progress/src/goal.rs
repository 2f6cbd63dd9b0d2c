//! Daily goal arithmetic.

use onegallon_core::TrackerConfig;

/// Threshold and display units for the daily goal.
///
/// The goal is reached when the day's total reaches `target_ml`. The bottle
/// count (`total / reference_ml` against `goal_units`) is for display only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalRule {
    /// Daily target in millilitres
    pub target_ml: f64,

    /// One reference bottle in millilitres
    pub reference_ml: f64,

    /// Bottles shown as the goal
    pub goal_units: u32,
}

impl GoalRule {
    /// Build from configuration.
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            target_ml: config.target_ml,
            reference_ml: config.reference_ml,
            goal_units: config.goal_units,
        }
    }

    /// Whether `total_ml` meets the target.
    pub fn is_reached(&self, total_ml: f64) -> bool {
        total_ml >= self.target_ml
    }

    /// `total_ml` expressed in reference bottles.
    pub fn equivalent_units(&self, total_ml: f64) -> f64 {
        total_ml / self.reference_ml
    }

    /// Fraction of the target, clamped to `[0, 1]`.
    pub fn progress(&self, total_ml: f64) -> f64 {
        (total_ml / self.target_ml).clamp(0.0, 1.0)
    }
}
