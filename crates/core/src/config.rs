//! Tracker configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A value is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Daily goal and input settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Daily target in millilitres
    pub target_ml: f64,

    /// Size of one reference bottle in millilitres
    pub reference_ml: f64,

    /// Number of reference bottles that make up the goal
    pub goal_units: u32,

    /// Amount used when the user does not type one
    pub default_amount: f64,

    /// Suggested input increment
    pub input_step: f64,

    /// Pause after a celebration before the view is redrawn
    pub celebration_delay_ms: u64,

    /// State file location
    pub data_file: PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            target_ml: 3785.0,
            reference_ml: 650.0,
            goal_units: 6,
            default_amount: 650.0,
            input_step: 50.0,
            celebration_delay_ms: 1500,
            data_file: PathBuf::from("water_tracker.json"),
        }
    }
}

impl TrackerConfig {
    /// Parse a TOML document; missing keys fall back to defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.target_ml > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "target_ml must be positive, got {}",
                self.target_ml
            )));
        }
        if !(self.reference_ml > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "reference_ml must be positive, got {}",
                self.reference_ml
            )));
        }
        if self.goal_units == 0 {
            return Err(ConfigError::Invalid("goal_units must be at least 1".into()));
        }
        if self.default_amount < 0.0 || self.input_step < 0.0 {
            return Err(ConfigError::Invalid(
                "default_amount and input_step must not be negative".into(),
            ));
        }
        Ok(())
    }

    /// Whether `target_ml` equals `reference_ml * goal_units`. When it does
    /// not, a bottle-count threshold and a millilitre threshold fire at
    /// different totals.
    pub fn goal_rules_agree(&self) -> bool {
        (self.target_ml - self.reference_ml * f64::from(self.goal_units)).abs() < f64::EPSILON
    }

    /// Post-celebration pause.
    pub fn celebration_delay(&self) -> Duration {
        Duration::from_millis(self.celebration_delay_ms)
    }
}
