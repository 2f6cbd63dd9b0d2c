//! Daily intake tracking service.

use std::sync::Arc;

use async_trait::async_trait;
use onegallon_core::{AppState, Clock, ConfigError, Date, SystemClock, TrackerConfig};
use onegallon_storage::{Storage, StorageError};
use tracing::{debug, info, warn};

use crate::{GoalRule, IntakeSnapshot};

/// Error type for tracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Errors surfaced by the tracker.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Saving, loading or clearing the state failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration is out of range
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Outcome of [`IntakeTracker::add_amount`].
#[derive(Debug)]
pub struct AddResult {
    /// The amount was positive and has been logged
    pub accepted: bool,

    /// This add pushed today's total over the target for the first time
    pub goal_reached: bool,

    /// Today's total after the call (zero right after a goal reset)
    pub new_total: f64,

    /// Total recorded in history when the goal fired
    pub achieved_ml: Option<f64>,

    /// The final save of this call failed; the saved file lags the
    /// in-memory state until the next successful save
    pub save_error: Option<StorageError>,
}

impl AddResult {
    fn rejected(total: f64) -> Self {
        Self {
            accepted: false,
            goal_reached: false,
            new_total: total,
            achieved_ml: None,
            save_error: None,
        }
    }
}

/// Outcome of [`IntakeTracker::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    /// A previously saved state file was removed
    pub cleared_previous: bool,
}

/// Daily intake tracking service.
#[async_trait]
pub trait IntakeTracker: Send + Sync {
    /// Reset to an empty day and delete any saved state.
    async fn initialize(&mut self) -> Result<InitReport>;

    /// Log `amount` millilitres. Non-positive amounts are ignored.
    ///
    /// The in-memory update and goal check always complete; a failed save
    /// is reported in [`AddResult::save_error`].
    async fn add_amount(&mut self, amount: f64) -> AddResult;

    /// Take a read-only view of the current state.
    fn snapshot(&self) -> IntakeSnapshot;

    /// Overwrite the saved state with the in-memory one.
    async fn save(&mut self) -> Result<()>;

    /// Replace the in-memory state with the saved one. Returns `false` when
    /// nothing was saved.
    async fn load(&mut self) -> Result<bool>;
}

/// Tracker backed by a [`Storage`] implementation.
pub struct DailyIntakeTracker<S: Storage> {
    storage: S,
    state: AppState,
    config: TrackerConfig,
    goal: GoalRule,
    clock: Arc<dyn Clock>,
}

impl<S: Storage> DailyIntakeTracker<S> {
    /// Create a tracker with an empty day, using the system clock.
    pub fn new(storage: S, config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        if !config.goal_rules_agree() {
            warn!(
                target_ml = config.target_ml,
                reference_ml = config.reference_ml,
                goal_units = config.goal_units,
                "target_ml differs from reference_ml * goal_units; goal uses target_ml"
            );
        }
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        Ok(Self {
            storage,
            state: AppState::new(clock.today()),
            goal: GoalRule::from_config(&config),
            config,
            clock,
        })
    }

    /// Use a different time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.state.day.reset(clock.today());
        self.clock = clock;
        self
    }

    /// Configuration in use.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// In-memory state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    async fn persist(&mut self) -> Option<StorageError> {
        let err = self.storage.save_state(&self.state.to_persisted()).await.err();
        if let Some(e) = &err {
            warn!(error = %e, "saving state failed");
        }
        err
    }

    /// Move the day to `today` if the calendar has advanced.
    fn roll_over(&mut self, today: Date) {
        if self.state.day.date != today {
            info!(from = %self.state.day.date, to = %today, "day rolled over");
            self.state.day.reset(today);
        }
    }
}

#[async_trait]
impl<S: Storage + 'static> IntakeTracker for DailyIntakeTracker<S> {
    async fn initialize(&mut self) -> Result<InitReport> {
        self.state.reset(self.clock.today());
        let cleared_previous = self.storage.clear().await?;
        if cleared_previous {
            info!("Application started with cleared data (previous records removed).");
        }
        Ok(InitReport { cleared_previous })
    }

    async fn add_amount(&mut self, amount: f64) -> AddResult {
        if !(amount > 0.0 && amount.is_finite()) {
            debug!(amount, "rejected amount");
            return AddResult::rejected(self.state.day.total_ml());
        }

        let now = self.clock.now();
        let today = now.date();
        self.roll_over(today);

        let total = self.state.day.push(now, amount);
        debug!(amount, total, "amount logged");
        let mut save_error = self.persist().await;

        let goal_reached = self.goal.is_reached(total) && !self.state.history.contains(today);
        if goal_reached {
            self.state.history.record(today, total);
            info!(date = %today, total, "daily goal reached");
            self.state.day.reset(today);
            // Full overwrite, so this also repairs a failed first save.
            save_error = self.persist().await;
        }

        AddResult {
            accepted: true,
            goal_reached,
            new_total: self.state.day.total_ml(),
            achieved_ml: goal_reached.then_some(total),
            save_error,
        }
    }

    fn snapshot(&self) -> IntakeSnapshot {
        let now = self.clock.now();
        let today = now.date();

        // A day left over from before midnight reads as empty.
        let mut today_records = if self.state.day.date == today {
            self.state.day.records().to_vec()
        } else {
            Vec::new()
        };
        today_records.sort_by(|a, b| a.time.cmp(&b.time));
        let today_total = today_records.iter().map(|r| r.amount).sum();

        IntakeSnapshot {
            taken_at: now,
            date: today,
            today_total,
            today_records,
            history: self.state.history.newest_first(),
            goal: self.goal,
        }
    }

    async fn save(&mut self) -> Result<()> {
        self.storage.save_state(&self.state.to_persisted()).await?;
        Ok(())
    }

    async fn load(&mut self) -> Result<bool> {
        match self.storage.load_state().await? {
            Some(persisted) => {
                self.state = AppState::from_persisted(persisted);
                info!(
                    date = %self.state.day.date,
                    total = self.state.day.total_ml(),
                    achievements = self.state.history.len(),
                    "state loaded"
                );
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
